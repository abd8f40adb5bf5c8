//! Single-bar cutting combinations.
//!
//! [`enumerator::find_combinations`] ranks every way of cutting pieces from one raw
//! bar without exceeding the requested quantity of any length.
//! [`suggester::suggest`] proposes catalog quantities that give a high-efficiency cut.

pub mod enumerator;
pub mod error;
pub mod render;
pub mod suggester;
pub mod types;

pub use enumerator::{Enumerator, find_combinations};
pub use error::{Error, Result};
pub use suggester::{suggest, suggest_from};
pub use types::{CATALOG, Length, LengthQuantity, ScoredResult};
