//! Prompt System - Read-classify loop and its console output
//!
//! This module provides the InputLoop, which keeps asking for input until it
//! gets a task or the stop keyword, and the Renderer that writes its text.

mod input_loop;
mod render;

pub use input_loop::{Input, InputLoop, Outcome, STOP_KEYWORD, classify, is_stop_keyword};
pub use render::Renderer;
