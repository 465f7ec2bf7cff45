//! Renderer - Console text for the prompt loop
//!
//! Wording is cosmetic; the renderer only controls the separator, the prompt
//! text, and whether ANSI colors are applied.

use std::io::Write;

use colored::{Color, Colorize};

use crate::config::PromptConfig;
use crate::error::Result;

const FAREWELL: &str = "Exiting task loop. Thank you!";
const REMINDER: &str = "Please provide some input or type 'stop' to exit.";
const PROCESSING: &str = "Processing your request...";

/// Writes the loop's prompts and messages to any writer
#[derive(Debug, Clone)]
pub struct Renderer {
    prompt: String,
    separator: String,
    color: bool,
}

impl Renderer {
    pub fn from_config(config: &PromptConfig) -> Self {
        Self {
            prompt: config.text.clone(),
            separator: config.separator.repeat(config.separator_width),
            color: config.color,
        }
    }

    /// Default wording with colors off
    pub fn plain() -> Self {
        Self::from_config(&PromptConfig {
            color: false,
            ..Default::default()
        })
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Separator then the prompt, left on the same line as the user's input
    pub fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(&self.separator, Color::BrightBlack))?;
        write!(out, "{}", self.paint(&self.prompt, Color::Cyan))?;
        out.flush()?;
        Ok(())
    }

    pub fn farewell<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.paint(FAREWELL, Color::Green))?;
        Ok(())
    }

    pub fn reminder<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.paint(REMINDER, Color::Yellow))?;
        Ok(())
    }

    pub fn acknowledge<W: Write>(&self, out: &mut W, task: &str) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint(&format!("Received input: {}", task), Color::Green))?;
        writeln!(out, "{}", PROCESSING)?;
        Ok(())
    }

    pub fn confirm<W: Write>(&self, out: &mut W, task: &str) -> Result<()> {
        writeln!(out, "{}", self.paint(&format!("Next task received: {}", task), Color::Cyan))?;
        out.flush()?;
        Ok(())
    }
}
