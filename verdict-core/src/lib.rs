//! Verdict Core
//!
//! Core types and pure logic for the homework review watcher.
//!
//! This crate contains:
//! - Domain types: submissions, review statuses and the poll cursor
//! - DTOs: validation of the homework-status API payload
//!
//! Nothing here performs I/O, so the whole crate is usable from tests
//! without a network or a runtime.

pub mod domain;
pub mod dto;
pub mod error;

pub use error::{CoreError, Result};
