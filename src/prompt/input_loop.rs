//! InputLoop - Prompt until a task or the stop keyword arrives

use std::io::{BufRead, Write};

use log::{debug, info};

use super::render::Renderer;
use crate::error::Result;

/// Keyword that ends the loop without a task, matched case-insensitively
pub const STOP_KEYWORD: &str = "stop";

/// True when the trimmed text is the stop keyword in any case
pub fn is_stop_keyword(text: &str) -> bool {
    text.trim().to_lowercase() == STOP_KEYWORD
}

/// What a single line of input means to the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stop,
    Empty,
    Task(String),
}

/// Classify one raw line by its trimmed form
pub fn classify(line: &str) -> Input {
    let trimmed = line.trim();
    if is_stop_keyword(trimmed) {
        Input::Stop
    } else if trimmed.is_empty() {
        Input::Empty
    } else {
        Input::Task(trimmed.to_string())
    }
}

/// How the loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The stop keyword was entered
    Stopped,
    /// The input stream closed before a task was given
    Exhausted,
    /// A non-empty, non-stop line was entered
    Task(String),
}

impl Outcome {
    pub fn into_task(self) -> Option<String> {
        match self {
            Outcome::Task(task) => Some(task),
            Outcome::Stopped | Outcome::Exhausted => None,
        }
    }
}

/// Reads lines from `R` and writes prompts to `W` until an outcome is reached
pub struct InputLoop<R, W> {
    reader: R,
    writer: W,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> InputLoop<R, W> {
    pub fn new(reader: R, writer: W, renderer: Renderer) -> Self {
        Self {
            reader,
            writer,
            renderer,
        }
    }

    /// Read one line, or None at end of stream
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            self.renderer.prompt(&mut self.writer)?;

            let Some(line) = self.read_line()? else {
                info!("Input stream closed before a task was given");
                // Keep the shell prompt off the end of ours
                writeln!(self.writer)?;
                return Ok(Outcome::Exhausted);
            };

            match classify(&line) {
                Input::Stop => {
                    info!("Stop keyword received");
                    self.renderer.farewell(&mut self.writer)?;
                    return Ok(Outcome::Stopped);
                }
                Input::Empty => {
                    debug!("Empty input, prompting again");
                    self.renderer.reminder(&mut self.writer)?;
                }
                Input::Task(task) => {
                    info!("Task received: {}", task);
                    self.renderer.acknowledge(&mut self.writer, &task)?;
                    return Ok(Outcome::Task(task));
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
