//! nodectl console library
//!
//! Validation and dispatch layer of the node control console: tokens typed at
//! the prompt are checked, coerced into typed values, and forwarded to an
//! [`Executor`] that performs the actual node operation.

/// Console version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod coercion;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging_executor;
pub mod outcome;
pub mod output;
pub mod parser_executor;
pub mod registry;
pub mod shell;

pub use coercion::{BandwidthLimit, BlockId, LogLevel, LogLevelError, ThreadCount};
pub use config::ConsoleSettings;
pub use error::{ConsoleError, ConsoleResult};
pub use executor::Executor;
pub use logging_executor::LoggingExecutor;
pub use outcome::CommandOutcome;
pub use output::ConsoleOutput;
pub use parser_executor::CommandParserExecutor;
pub use registry::{tokenize, CommandRegistry};
pub use shell::{LineResult, Shell};
