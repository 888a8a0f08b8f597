//! Application use cases (business logic orchestration).

mod issue_timestamp;
mod verify_timestamp;

pub use issue_timestamp::*;
pub use verify_timestamp::*;
