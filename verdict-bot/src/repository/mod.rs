//! Repository layer
//!
//! Repositories wrap the remote collaborators behind small traits: the
//! homework-status API and the messaging channel. They carry no business
//! logic, only call the client and classify its failures.
//!
//! All repositories are trait-based to enable testing and mocking.

mod homeworks;
mod messages;

// Re-export traits
pub use homeworks::HomeworkRepository;
pub use messages::MessageRepository;

// Re-export implementations
pub use homeworks::HttpHomeworkRepository;
pub use messages::TelegramMessageRepository;
