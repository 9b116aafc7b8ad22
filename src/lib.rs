//! # nodectl
//!
//! Command validation and dispatch for an interactive node control console.
//!
//! Console lines are split into tokens, checked against each command's arity,
//! coerced into typed values (heights, digests, addresses, log levels,
//! bandwidth limits) and forwarded to an executor that performs the node
//! operation.
//!
//! ## Quick Start
//!
//! ```rust
//! use nodectl::prelude::*;
//!
//! let output = ConsoleOutput::new(Vec::new());
//! let mut console = CommandParserExecutor::with_output(LoggingExecutor::new(), output);
//!
//! assert_eq!(console.set_limit(&["-1"]), CommandOutcome::Dispatched(true));
//! assert_eq!(console.executor().limits().up, Some(128 * 1024));
//! assert_eq!(console.print_block(&["not-a-block"]), CommandOutcome::RejectedSilently);
//! ```
//!
//! ## Architecture
//!
//! - [`primitives`] - digests and network-tagged account addresses
//! - [`console`] - coercion policies, the executor boundary, dispatch, shell

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use nodectl_console as console;
pub use nodectl_primitives as primitives;

/// Common imports for console integrations
pub mod prelude {
    pub use crate::console::{
        BandwidthLimit, BlockId, CommandOutcome, CommandParserExecutor, CommandRegistry,
        ConsoleOutput, ConsoleSettings, Executor, LogLevel, LoggingExecutor, Shell, ThreadCount,
    };
    pub use crate::primitives::{AccountAddress, AddressVersions, Hash256, Network};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
