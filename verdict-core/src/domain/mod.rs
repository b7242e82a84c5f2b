//! Core domain types
//!
//! Submissions as reported by the review API, the fixed set of review
//! statuses with their verdict texts, and the cursor that bounds each
//! fetch window.

pub mod cursor;
pub mod homework;

pub use cursor::Cursor;
pub use homework::{Homework, HomeworkStatus, parse_status};
