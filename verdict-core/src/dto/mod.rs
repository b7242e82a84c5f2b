//! Data Transfer Objects for the homework-status API
//!
//! The API payload is handled as raw JSON so that missing keys and wrong
//! shapes can be reported precisely instead of failing a blanket
//! deserialization.

pub mod statuses;

pub use statuses::{CURRENT_DATE_KEY, HOMEWORKS_KEY, check_response, current_date};
