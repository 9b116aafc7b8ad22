//! Interactive read-dispatch loop over a line source.

use crate::error::ConsoleResult;
use crate::executor::Executor;
use crate::outcome::CommandOutcome;
use crate::parser_executor::CommandParserExecutor;
use crate::registry::{tokenize, CommandRegistry};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const LOG_TARGET: &str = "nodectl::shell";

/// Keyword that leaves the console without stopping the daemon.
pub const QUIT_COMMAND: &str = "quit";

/// Keyword that stops the daemon; the session ends once it succeeds.
pub const EXIT_COMMAND: &str = "exit";

/// What a single console line amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineResult {
    Empty,
    Unknown,
    Completed(CommandOutcome),
    /// `exit` succeeded; the daemon is stopping.
    Stopped,
    Quit,
}

/// Console session: prompt, tokenize, dispatch, report.
pub struct Shell<E, W: Write> {
    dispatcher: CommandParserExecutor<E, W>,
    registry: CommandRegistry<E, W>,
    prompt: String,
}

impl<E: Executor, W: Write> Shell<E, W> {
    pub fn new(dispatcher: CommandParserExecutor<E, W>, prompt: impl Into<String>) -> Self {
        Self {
            dispatcher,
            registry: CommandRegistry::new(),
            prompt: prompt.into(),
        }
    }

    pub fn dispatcher(&self) -> &CommandParserExecutor<E, W> {
        &self.dispatcher
    }

    pub fn into_dispatcher(self) -> CommandParserExecutor<E, W> {
        self.dispatcher
    }

    /// Executes one raw console line.
    pub fn execute_line(&mut self, line: &str) -> LineResult {
        let tokens = tokenize(line);
        let Some((&keyword, args)) = tokens.split_first() else {
            return LineResult::Empty;
        };

        if keyword == QUIT_COMMAND {
            return LineResult::Quit;
        }

        match self.registry.dispatch(&mut self.dispatcher, keyword, args) {
            Some(outcome) => {
                debug!(target: LOG_TARGET, keyword, ?outcome, "command finished");
                if !outcome.succeeded() {
                    warn!(target: LOG_TARGET, keyword, ?outcome, "command failed");
                    self.dispatcher
                        .output_mut()
                        .line(format!("command failed: {keyword}"));
                } else if keyword == EXIT_COMMAND {
                    return LineResult::Stopped;
                }
                LineResult::Completed(outcome)
            }
            None => {
                self.dispatcher
                    .output_mut()
                    .line(format!("unknown command: {keyword}"));
                LineResult::Unknown
            }
        }
    }

    /// Reads lines until `quit`, a successful `exit`, or end of input.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> ConsoleResult<()> {
        info!(target: LOG_TARGET, "console session started");
        let mut line = String::new();
        loop {
            self.dispatcher.output_mut().prompt(&self.prompt);

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                info!(target: LOG_TARGET, "end of input");
                break;
            }

            match self.execute_line(&line) {
                LineResult::Quit => break,
                LineResult::Stopped => {
                    info!(target: LOG_TARGET, "daemon stop requested");
                    break;
                }
                _ => {}
            }
        }
        info!(target: LOG_TARGET, "console session ended");
        Ok(())
    }
}
