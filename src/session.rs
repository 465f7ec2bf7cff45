//! Session - Run the input loop and confirm the task it produced

use std::io::{BufRead, Write};

use log::info;

use crate::error::Result;
use crate::prompt::{InputLoop, Renderer, is_stop_keyword};

/// Run one prompt session and return the task, if any.
///
/// A produced task is confirmed on `writer` unless it reads as the stop
/// keyword. Stop and end of input print nothing further.
pub fn run_session<R: BufRead, W: Write>(reader: R, mut writer: W, renderer: Renderer) -> Result<Option<String>> {
    let mut input_loop = InputLoop::new(reader, &mut writer, renderer.clone());
    let outcome = input_loop.run()?;
    info!("Input loop finished: {:?}", outcome);

    let task = outcome.into_task();
    if let Some(task) = task.as_deref().filter(|t| !is_stop_keyword(t)) {
        renderer.confirm(&mut writer, task)?;
    }
    Ok(task)
}
