//! Lines of code: language classification and code/comment/blank counting.

pub mod counter;
pub mod language;

pub use counter::{LineCounts, count_lines};
pub use language::language_of;
