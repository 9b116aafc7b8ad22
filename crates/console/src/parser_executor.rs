//! Validation and dispatch of console commands onto an [`Executor`].
//!
//! Each public handler takes the already-tokenized arguments of one command,
//! checks arity, coerces tokens through [`crate::coercion`], and makes at most
//! one executor call. Diagnostics for the console user are written to the
//! injected [`ConsoleOutput`].

use crate::coercion::{
    parse_decimal, resolve_address, BandwidthLimit, BlockId, LogLevel, LogLevelError, ThreadCount,
};
use crate::executor::Executor;
use crate::output::ConsoleOutput;
use crate::outcome::CommandOutcome;
use nodectl_primitives::{AddressVersions, Hash256};
use std::io::{self, Write};
use tracing::debug;

const LOG_TARGET: &str = "nodectl::console";

const MSG_NEED_BLOCK_INDEX: &str = "need block index parameter";
const MSG_WRONG_START_INDEX: &str = "wrong starter block index parameter";
const MSG_WRONG_END_INDEX: &str = "wrong end block index parameter";
const MSG_SET_LOG_USAGE: &str = "use: set_log <log_level_number_0-4>";
const MSG_SET_LOG_FORMAT: &str = "wrong number format, use: set_log <log_level_number_0-4>";
const MSG_SET_LOG_RANGE: &str = "wrong number range, use: set_log <log_level_number_0-4>";
const MSG_PRINT_BLOCK_USAGE: &str = "expected: print_block (<block_hash> | <block_height>)";
const MSG_PRINT_TX_USAGE: &str = "expected: print_tx <transaction hash>";
const MSG_START_MINING_USAGE: &str =
    "Please specify a wallet address to mine for: start_mining <addr> [threads=1]";
const MSG_BAD_ADDRESS: &str = "target account address has wrong format";
const MSG_TESTNET_WARNING: &str = "Mining to a testnet address, make sure this is intentional!";

/// Turns tokenized console commands into typed executor calls.
pub struct CommandParserExecutor<E, W: Write = io::Stdout> {
    executor: E,
    output: ConsoleOutput<W>,
    address_versions: AddressVersions,
}

impl<E: Executor> CommandParserExecutor<E, io::Stdout> {
    /// Creates a dispatcher that prints to standard output.
    pub fn new(executor: E) -> Self {
        Self::with_output(executor, ConsoleOutput::stdout())
    }
}

impl<E: Executor, W: Write> CommandParserExecutor<E, W> {
    pub fn with_output(executor: E, output: ConsoleOutput<W>) -> Self {
        Self {
            executor,
            output,
            address_versions: AddressVersions::default(),
        }
    }

    /// Overrides the version bytes used to recognise main and test addresses.
    pub fn with_address_versions(mut self, versions: AddressVersions) -> Self {
        self.address_versions = versions;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn output_mut(&mut self) -> &mut ConsoleOutput<W> {
        &mut self.output
    }

    pub fn into_parts(self) -> (E, ConsoleOutput<W>) {
        (self.executor, self.output)
    }

    pub fn print_peer_list(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("print_peer_list", args, E::print_peer_list)
    }

    pub fn save_blockchain(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("save_blockchain", args, E::save_blockchain)
    }

    pub fn show_hash_rate(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("show_hash_rate", args, E::show_hash_rate)
    }

    pub fn hide_hash_rate(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("hide_hash_rate", args, E::hide_hash_rate)
    }

    pub fn show_difficulty(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("show_difficulty", args, E::show_difficulty)
    }

    pub fn print_connections(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("print_connections", args, E::print_connections)
    }

    /// `print_bc <start> [end]`. A missing end is passed as 0; extra tokens are ignored.
    pub fn print_blockchain_info(&mut self, args: &[&str]) -> CommandOutcome {
        let Some(first) = args.first() else {
            self.output.line(MSG_NEED_BLOCK_INDEX);
            return CommandOutcome::Rejected;
        };

        let Some(start) = parse_decimal::<u64>(first) else {
            self.output.line(MSG_WRONG_START_INDEX);
            return CommandOutcome::Rejected;
        };

        let end = match args.get(1) {
            None => 0,
            Some(token) => match parse_decimal::<u64>(token) {
                Some(end) => end,
                None => {
                    self.output.line(MSG_WRONG_END_INDEX);
                    return CommandOutcome::Rejected;
                }
            },
        };

        debug!(target: LOG_TARGET, start, end, "print_blockchain_info");
        CommandOutcome::Dispatched(self.executor.print_blockchain_info(start, end))
    }

    /// `set_log <0-4>`. Every malformed form prints a hint and still reports handled.
    pub fn set_log_level(&mut self, args: &[&str]) -> CommandOutcome {
        let [token] = args else {
            self.output.line(MSG_SET_LOG_USAGE);
            return CommandOutcome::Acknowledged;
        };

        match LogLevel::parse(token) {
            Ok(level) => {
                debug!(target: LOG_TARGET, %level, "set_log_level");
                CommandOutcome::Dispatched(self.executor.set_log_level(level))
            }
            Err(LogLevelError::Format) => {
                self.output.line(MSG_SET_LOG_FORMAT);
                CommandOutcome::Acknowledged
            }
            Err(LogLevelError::Range(level)) => {
                debug!(target: LOG_TARGET, level, "log level out of range");
                self.output.line(MSG_SET_LOG_RANGE);
                CommandOutcome::Acknowledged
            }
        }
    }

    pub fn print_height(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("print_height", args, E::print_height)
    }

    /// `print_block <height|hash>`. A token that is neither is refused without output.
    pub fn print_block(&mut self, args: &[&str]) -> CommandOutcome {
        let Some(token) = args.first() else {
            self.output.line(MSG_PRINT_BLOCK_USAGE);
            return CommandOutcome::Rejected;
        };

        match BlockId::resolve(token) {
            Some(BlockId::ByHeight(height)) => {
                debug!(target: LOG_TARGET, height, "print_block resolved by height");
                CommandOutcome::Dispatched(self.executor.print_block_by_height(height))
            }
            Some(BlockId::ByHash(hash)) => {
                debug!(target: LOG_TARGET, %hash, "print_block resolved by hash");
                CommandOutcome::Dispatched(self.executor.print_block_by_hash(hash))
            }
            None => {
                debug!(target: LOG_TARGET, token, "print_block token is neither height nor hash");
                CommandOutcome::RejectedSilently
            }
        }
    }

    /// `print_tx <hash>`. Always reports handled; the executor's answer is not consulted.
    pub fn print_transaction(&mut self, args: &[&str]) -> CommandOutcome {
        let Some(token) = args.first() else {
            self.output.line(MSG_PRINT_TX_USAGE);
            return CommandOutcome::Acknowledged;
        };

        match Hash256::parse(token) {
            Ok(hash) => {
                debug!(target: LOG_TARGET, %hash, "print_transaction");
                let _ = self.executor.print_transaction(hash);
                CommandOutcome::Dispatched(true)
            }
            Err(err) => {
                debug!(target: LOG_TARGET, token, error = %err, "print_transaction ignored");
                CommandOutcome::Acknowledged
            }
        }
    }

    pub fn print_transaction_pool_long(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args(
            "print_transaction_pool_long",
            args,
            E::print_transaction_pool_long,
        )
    }

    pub fn print_transaction_pool_short(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args(
            "print_transaction_pool_short",
            args,
            E::print_transaction_pool_short,
        )
    }

    /// `start_mining <addr> [threads]`.
    ///
    /// The address is checked before the token count, so a bad address with
    /// too many tokens still gets the address message.
    pub fn start_mining(&mut self, args: &[&str]) -> CommandOutcome {
        let Some(token) = args.first() else {
            self.output.line(MSG_START_MINING_USAGE);
            return CommandOutcome::Acknowledged;
        };

        let Some(address) = resolve_address(token, &self.address_versions) else {
            self.output.line(MSG_BAD_ADDRESS);
            return CommandOutcome::Acknowledged;
        };
        if address.network().is_test() {
            self.output.line(MSG_TESTNET_WARNING);
        }

        if args.len() > 2 {
            debug!(target: LOG_TARGET, arity = args.len(), "start_mining takes at most two arguments");
            return CommandOutcome::RejectedSilently;
        }

        let threads = ThreadCount::from_token(args.get(1).copied()).get();
        debug!(
            target: LOG_TARGET,
            network = %address.network(),
            threads,
            "start_mining"
        );
        let _ = self.executor.start_mining(address, threads);
        CommandOutcome::Dispatched(true)
    }

    pub fn stop_mining(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("stop_mining", args, E::stop_mining)
    }

    pub fn stop_daemon(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("stop_daemon", args, E::stop_daemon)
    }

    pub fn print_status(&mut self, args: &[&str]) -> CommandOutcome {
        self.without_args("print_status", args, E::print_status)
    }

    /// `limit <kB/s>`; `-1` selects the default.
    pub fn set_limit(&mut self, args: &[&str]) -> CommandOutcome {
        self.with_limit("set_limit", args, E::set_limit)
    }

    pub fn set_limit_up(&mut self, args: &[&str]) -> CommandOutcome {
        self.with_limit("set_limit_up", args, E::set_limit_up)
    }

    pub fn set_limit_down(&mut self, args: &[&str]) -> CommandOutcome {
        self.with_limit("set_limit_down", args, E::set_limit_down)
    }

    fn without_args(
        &mut self,
        command: &'static str,
        args: &[&str],
        call: impl FnOnce(&mut E) -> bool,
    ) -> CommandOutcome {
        if !args.is_empty() {
            debug!(target: LOG_TARGET, command, arity = args.len(), "command takes no arguments");
            return CommandOutcome::RejectedSilently;
        }
        CommandOutcome::Dispatched(call(&mut self.executor))
    }

    fn with_limit(
        &mut self,
        command: &'static str,
        args: &[&str],
        call: impl FnOnce(&mut E, i64) -> bool,
    ) -> CommandOutcome {
        let [token] = args else {
            debug!(target: LOG_TARGET, command, arity = args.len(), "limit takes one argument");
            return CommandOutcome::RejectedSilently;
        };

        let Some(limit) = BandwidthLimit::parse(token) else {
            debug!(target: LOG_TARGET, command, token, "limit is not a number");
            return CommandOutcome::RejectedSilently;
        };

        debug!(target: LOG_TARGET, command, kbps = limit.kbps(), bytes = limit.bytes(), "forwarding limit");
        CommandOutcome::Dispatched(call(&mut self.executor, limit.bytes()))
    }
}
