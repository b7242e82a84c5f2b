//! Scheduler layer for the bot
//!
//! Drives the poll cycle: fetch, validate, translate, notify, sleep.

pub mod poller;

pub use poller::StatusPoller;
