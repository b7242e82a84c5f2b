//! Service layer
//!
//! Services contain the business rules that sit between the poller and the
//! repositories. Currently this is only notification dispatch.

pub mod dispatcher;

pub use dispatcher::Dispatcher;
