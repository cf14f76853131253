//! Foundation Module - Shared value objects and errors for the domain.

mod errors;
mod events;
mod framework;
mod timestamp;

pub use errors::ModelError;
pub use events::EventId;
pub use framework::Framework;
pub use timestamp::Timestamp;
