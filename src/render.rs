use crate::types::{Length, LengthQuantity, ScoredResult};

const MAX_WIDTH: f64 = 80.0;

const HEADERS: [&str; 6] = [
    "Rank",
    "Combination",
    "Pieces",
    "Total Length",
    "Waste",
    "Efficiency",
];

/// `515mm + 1025mm`
pub fn format_combination(combination: &[Length]) -> String {
    combination
        .iter()
        .map(|l| format!("{l}mm"))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// `515mm (×2), 1025mm (×1)` for every length with a positive quantity.
pub fn format_selected(desired: &LengthQuantity) -> String {
    desired
        .iter()
        .filter(|&(_, &qty)| qty > 0)
        .map(|(l, q)| format!("{l}mm (×{q})"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_lengths(lengths: &[Length]) -> String {
    lengths
        .iter()
        .map(|l| format!("{l}mm"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn recommendation(best: &ScoredResult) -> String {
    format!(
        "Recommended: {} = {}mm (Waste: {}mm, Efficiency: {:.1}%)",
        format_combination(&best.combination),
        best.total_length,
        best.waste,
        best.efficiency
    )
}

/// Ranked results as an aligned text table.
pub fn render_table(results: &[ScoredResult]) -> String {
    let rows: Vec<[String; 6]> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                format_combination(&r.combination),
                r.pieces.to_string(),
                format!("{}mm", r.total_length),
                format!("{}mm", r.waste),
                format!("{:.1}%", r.efficiency),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Draws the raw bar with each piece boxed and labelled; unused stock is dotted.
pub fn render_bar(raw_length: Length, combination: &[Length]) -> String {
    if raw_length == 0 {
        return String::new();
    }

    let scale = MAX_WIDTH / raw_length as f64;
    let grid_w = (raw_length as f64 * scale).round() as usize;

    let mut edges = vec![0usize];
    let mut offset = 0u64;
    for &length in combination {
        offset += length as u64;
        edges.push(((offset as f64 * scale).round() as usize).min(grid_w));
    }

    let mut border = vec!['-'; grid_w + 1];
    let mut middle = vec![' '; grid_w + 1];

    let used_end = edges.last().copied().unwrap_or(0);
    for c in middle.iter_mut().take(grid_w).skip(used_end + 1) {
        *c = '.';
    }

    for &e in edges.iter().chain(std::iter::once(&grid_w)) {
        border[e] = '+';
        middle[e] = '|';
    }

    for (i, &length) in combination.iter().enumerate() {
        place_label(&mut middle, edges[i], edges[i + 1], &length.to_string());
    }

    let border: String = border.into_iter().collect();
    let middle: String = middle.into_iter().collect();
    format!("{border}\n{middle}\n{border}\n")
}

fn place_label(row: &mut [char], start: usize, end: usize, label: &str) {
    let inner = end.saturating_sub(start + 1);
    let len = label.chars().count();
    if len > inner {
        return;
    }
    let x = start + 1 + (inner - len) / 2;
    for (i, ch) in label.chars().enumerate() {
        row[x + i] = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_combination() {
        assert_eq!(format_combination(&[515, 1025]), "515mm + 1025mm");
        assert_eq!(format_combination(&[6000]), "6000mm");
        assert_eq!(format_combination(&[]), "");
    }

    #[test]
    fn test_format_selected_skips_zero() {
        let desired: LengthQuantity = [(515, 2), (1025, 0), (2045, 1)].into_iter().collect();
        assert_eq!(format_selected(&desired), "515mm (×2), 2045mm (×1)");
    }

    #[test]
    fn test_recommendation() {
        let best = ScoredResult::new(vec![1835, 4155], 6000);
        assert_eq!(
            recommendation(&best),
            "Recommended: 1835mm + 4155mm = 5990mm (Waste: 10mm, Efficiency: 99.8%)"
        );
    }

    #[test]
    fn test_render_table() {
        let results = vec![
            ScoredResult::new(vec![3000, 3000], 6000),
            ScoredResult::new(vec![3000], 6000),
        ];
        let output = render_table(&results);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Rank | Combination"));
        assert!(lines[1].contains("-+-"));
        assert!(lines[2].contains("3000mm + 3000mm"));
        assert!(lines[2].contains("100.0%"));
        assert!(lines[3].contains("3000mm"));
        assert!(lines[3].contains("50.0%"));
        assert!(output.ends_with("50.0%\n"));
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }

    #[test]
    fn test_render_bar_full() {
        let output = render_bar(6000, &[3000, 3000]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 81);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0].matches('+').count(), 3);
        assert_eq!(lines[1].matches("3000").count(), 2);
        assert!(!lines[1].contains('.'));
    }

    #[test]
    fn test_render_bar_marks_waste() {
        let output = render_bar(1000, &[515]);
        let middle = output.lines().nth(1).unwrap();
        assert!(middle.contains("515"));
        assert!(middle.contains('.'));
        assert!(middle.starts_with('|'));
        assert!(middle.ends_with('|'));
    }

    #[test]
    fn test_render_bar_empty() {
        let output = render_bar(6000, &[]);
        let middle = output.lines().nth(1).unwrap();
        assert!(middle.starts_with("|."));
        assert_eq!(render_bar(0, &[100]), "");
    }
}
