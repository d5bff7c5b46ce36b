//! Public API surface for runtime consumers.
//!
//! Re-exports the command set accepted by the session, the status view polled
//! by display layers, and the runtime error type.
mod command;
mod errors;
mod view;

pub use command::{Command, CommandOutcome};
pub use errors::{Result, RuntimeError};
pub use view::StatusView;
