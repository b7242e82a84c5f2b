//! Homework domain model
//!
//! Represents a single submission and its review status.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// Reviewed and accepted
    Approved,

    /// Picked up by a reviewer
    Reviewing,

    /// Reviewed and sent back with comments
    Rejected,
}

impl HomeworkStatus {
    /// Looks up a status by its API code
    ///
    /// Returns `None` for codes outside the known set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict sent to the student
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "reviewed, reviewer satisfied.",
            HomeworkStatus::Reviewing => "taken for review.",
            HomeworkStatus::Rejected => "reviewed, reviewer has comments.",
        }
    }
}

/// A submission entry from the `homeworks` list
///
/// Only the name and status are interpreted. Every other field the API
/// sends is kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: HashMap<String, JsonValue>,
}

impl Homework {
    /// Reads a homework out of a raw API record
    pub fn from_record(record: &JsonValue) -> Result<Self> {
        serde_json::from_value(record.clone())
            .map_err(|e| CoreError::malformed(format!("invalid homework record: {e}")))
    }

    /// Resolves the raw status code against the known set
    pub fn review_status(&self) -> Result<HomeworkStatus> {
        HomeworkStatus::from_code(&self.status)
            .ok_or_else(|| CoreError::UnknownStatus(self.status.clone()))
    }

    /// Notification text announcing the current status
    pub fn status_message(&self) -> Result<String> {
        let status = self.review_status()?;
        Ok(format!(
            "Status of submission \"{}\" changed. {}",
            self.homework_name,
            status.verdict()
        ))
    }
}

/// Translates a raw homework record into a notification message
///
/// Fails with `MalformedResponse` if the record lacks a string name or
/// status, and with `UnknownStatus` if the status is not a known code.
pub fn parse_status(record: &JsonValue) -> Result<String> {
    Homework::from_record(record)?.status_message()
}
