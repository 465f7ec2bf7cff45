//! nexttask - Ask for feedback or the next task
//!
//! Prompts on a line-oriented stream until the user types a task (which is
//! returned) or the stop keyword (which ends the session with nothing).

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod session;

pub use error::{NextTaskError, Result};
pub use prompt::{InputLoop, Outcome, Renderer};
pub use session::run_session;
