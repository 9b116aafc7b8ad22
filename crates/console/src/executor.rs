//! The control-executor boundary.
//!
//! Handlers in [`crate::CommandParserExecutor`] call exactly one of these
//! methods with fully validated arguments. What the executor does (talk to the
//! daemon over RPC, print state, toggle mining) is its own business; the
//! console only forwards the boolean it returns.

use crate::coercion::LogLevel;
use nodectl_primitives::{AccountAddress, Hash256};

/// Node control operations reachable from the console.
#[cfg_attr(test, mockall::automock)]
pub trait Executor {
    fn print_peer_list(&mut self) -> bool;

    fn save_blockchain(&mut self) -> bool;

    fn show_hash_rate(&mut self) -> bool;

    fn hide_hash_rate(&mut self) -> bool;

    fn show_difficulty(&mut self) -> bool;

    fn print_connections(&mut self) -> bool;

    /// Prints headers for heights `start..=end`; `end == 0` means "up to the tip".
    fn print_blockchain_info(&mut self, start: u64, end: u64) -> bool;

    fn set_log_level(&mut self, level: LogLevel) -> bool;

    fn print_height(&mut self) -> bool;

    fn print_block_by_height(&mut self, height: u64) -> bool;

    fn print_block_by_hash(&mut self, hash: Hash256) -> bool;

    fn print_transaction(&mut self, hash: Hash256) -> bool;

    fn print_transaction_pool_long(&mut self) -> bool;

    fn print_transaction_pool_short(&mut self) -> bool;

    /// Starts mining to `address`. The address carries its network.
    fn start_mining(&mut self, address: AccountAddress, threads: u64) -> bool;

    fn stop_mining(&mut self) -> bool;

    fn stop_daemon(&mut self) -> bool;

    fn print_status(&mut self) -> bool;

    /// Sets the combined bandwidth limit, in bytes per second.
    fn set_limit(&mut self, bytes: i64) -> bool;

    fn set_limit_up(&mut self, bytes: i64) -> bool;

    fn set_limit_down(&mut self, bytes: i64) -> bool;
}
