//! Session engine
//!
//! Answer sources, the session state machine, statistics, persistence and
//! share links.

mod error;
mod session;
pub mod share;
pub mod source;
mod stats;
pub mod store;

pub use error::{DescriptorError, GameError, StateError, ValidationError};
pub use session::{Attempt, GameSession, GuessResult, SessionManager, SessionState};
pub use share::{LinkError, ShareDescriptor};
pub use source::{AnswerSource, FixedSource, WordListSource};
pub use stats::Stats;
pub use store::{FileStore, GameStore, MemoryStore, StoreError};
