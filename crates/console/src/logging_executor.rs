//! Stand-in executor used when no daemon is attached.
//!
//! Every call is recorded as a structured `tracing` event so the console can be
//! exercised end to end. `set_log_level` is real: it forwards the new level to
//! a hook, which the binary wires to the subscriber's reload handle.

use crate::coercion::LogLevel;
use crate::executor::Executor;
use nodectl_primitives::{AccountAddress, Hash256};
use tracing::{info, warn, Level};

const LOG_TARGET: &str = "nodectl::executor";

/// Applies a new verbosity; returns whether it took effect.
pub type LevelHook = Box<dyn FnMut(Level) -> bool + Send>;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level.value() {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Mining session started through the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningSession {
    pub address: AccountAddress,
    pub threads: u64,
}

/// Bandwidth limits in bytes per second; `None` until set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub up: Option<i64>,
    pub down: Option<i64>,
}

#[derive(Default)]
pub struct LoggingExecutor {
    level_hook: Option<LevelHook>,
    mining: Option<MiningSession>,
    limits: Limits,
    show_hash_rate: bool,
    stopped: bool,
}

impl LoggingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level_hook(mut self, hook: LevelHook) -> Self {
        self.level_hook = Some(hook);
        self
    }

    pub fn mining(&self) -> Option<&MiningSession> {
        self.mining.as_ref()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn is_showing_hash_rate(&self) -> bool {
        self.show_hash_rate
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn record(&self, operation: &'static str) -> bool {
        info!(target: LOG_TARGET, operation, "executed");
        true
    }
}

impl Executor for LoggingExecutor {
    fn print_peer_list(&mut self) -> bool {
        self.record("print_peer_list")
    }

    fn save_blockchain(&mut self) -> bool {
        self.record("save_blockchain")
    }

    fn show_hash_rate(&mut self) -> bool {
        self.show_hash_rate = true;
        self.record("show_hash_rate")
    }

    fn hide_hash_rate(&mut self) -> bool {
        self.show_hash_rate = false;
        self.record("hide_hash_rate")
    }

    fn show_difficulty(&mut self) -> bool {
        self.record("show_difficulty")
    }

    fn print_connections(&mut self) -> bool {
        self.record("print_connections")
    }

    fn print_blockchain_info(&mut self, start: u64, end: u64) -> bool {
        info!(target: LOG_TARGET, start, end, "print_blockchain_info");
        true
    }

    fn set_log_level(&mut self, level: LogLevel) -> bool {
        let tracing_level = Level::from(level);
        let applied = match self.level_hook.as_mut() {
            Some(hook) => hook(tracing_level),
            None => true,
        };
        if applied {
            info!(target: LOG_TARGET, %level, %tracing_level, "log level changed");
        } else {
            warn!(target: LOG_TARGET, %level, "log level could not be applied");
        }
        applied
    }

    fn print_height(&mut self) -> bool {
        self.record("print_height")
    }

    fn print_block_by_height(&mut self, height: u64) -> bool {
        info!(target: LOG_TARGET, height, "print_block_by_height");
        true
    }

    fn print_block_by_hash(&mut self, hash: Hash256) -> bool {
        info!(target: LOG_TARGET, %hash, "print_block_by_hash");
        true
    }

    fn print_transaction(&mut self, hash: Hash256) -> bool {
        info!(target: LOG_TARGET, %hash, "print_transaction");
        true
    }

    fn print_transaction_pool_long(&mut self) -> bool {
        self.record("print_transaction_pool_long")
    }

    fn print_transaction_pool_short(&mut self) -> bool {
        self.record("print_transaction_pool_short")
    }

    fn start_mining(&mut self, address: AccountAddress, threads: u64) -> bool {
        info!(
            target: LOG_TARGET,
            network = %address.network(),
            threads,
            "start_mining"
        );
        self.mining = Some(MiningSession { address, threads });
        true
    }

    fn stop_mining(&mut self) -> bool {
        if self.mining.take().is_none() {
            warn!(target: LOG_TARGET, "stop_mining while not mining");
        }
        self.record("stop_mining")
    }

    fn stop_daemon(&mut self) -> bool {
        self.stopped = true;
        self.record("stop_daemon")
    }

    fn print_status(&mut self) -> bool {
        info!(
            target: LOG_TARGET,
            mining = self.mining.is_some(),
            limit_up = ?self.limits.up,
            limit_down = ?self.limits.down,
            "print_status"
        );
        true
    }

    fn set_limit(&mut self, bytes: i64) -> bool {
        self.limits.up = Some(bytes);
        self.limits.down = Some(bytes);
        info!(target: LOG_TARGET, bytes, "set_limit");
        true
    }

    fn set_limit_up(&mut self, bytes: i64) -> bool {
        self.limits.up = Some(bytes);
        info!(target: LOG_TARGET, bytes, "set_limit_up");
        true
    }

    fn set_limit_down(&mut self, bytes: i64) -> bool {
        self.limits.down = Some(bytes);
        info!(target: LOG_TARGET, bytes, "set_limit_down");
        true
    }
}
