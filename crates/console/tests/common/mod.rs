//! Shared fixtures for console integration tests.

#![allow(dead_code)]

use nodectl_console::{CommandParserExecutor, ConsoleOutput, Executor, LogLevel};
use nodectl_primitives::{AccountAddress, AddressVersions, Hash256, Network};

/// One executor invocation with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    PrintPeerList,
    SaveBlockchain,
    ShowHashRate,
    HideHashRate,
    ShowDifficulty,
    PrintConnections,
    PrintBlockchainInfo(u64, u64),
    SetLogLevel(u16),
    PrintHeight,
    PrintBlockByHeight(u64),
    PrintBlockByHash(Hash256),
    PrintTransaction(Hash256),
    PrintTransactionPoolLong,
    PrintTransactionPoolShort,
    StartMining(AccountAddress, u64),
    StopMining,
    StopDaemon,
    PrintStatus,
    SetLimit(i64),
    SetLimitUp(i64),
    SetLimitDown(i64),
}

/// Executor that records every call and answers with a fixed verdict.
pub struct RecordingExecutor {
    pub calls: Vec<Call>,
    pub verdict: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            verdict: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            verdict: false,
        }
    }

    fn push(&mut self, call: Call) -> bool {
        self.calls.push(call);
        self.verdict
    }
}

impl Executor for RecordingExecutor {
    fn print_peer_list(&mut self) -> bool {
        self.push(Call::PrintPeerList)
    }

    fn save_blockchain(&mut self) -> bool {
        self.push(Call::SaveBlockchain)
    }

    fn show_hash_rate(&mut self) -> bool {
        self.push(Call::ShowHashRate)
    }

    fn hide_hash_rate(&mut self) -> bool {
        self.push(Call::HideHashRate)
    }

    fn show_difficulty(&mut self) -> bool {
        self.push(Call::ShowDifficulty)
    }

    fn print_connections(&mut self) -> bool {
        self.push(Call::PrintConnections)
    }

    fn print_blockchain_info(&mut self, start: u64, end: u64) -> bool {
        self.push(Call::PrintBlockchainInfo(start, end))
    }

    fn set_log_level(&mut self, level: LogLevel) -> bool {
        self.push(Call::SetLogLevel(level.value()))
    }

    fn print_height(&mut self) -> bool {
        self.push(Call::PrintHeight)
    }

    fn print_block_by_height(&mut self, height: u64) -> bool {
        self.push(Call::PrintBlockByHeight(height))
    }

    fn print_block_by_hash(&mut self, hash: Hash256) -> bool {
        self.push(Call::PrintBlockByHash(hash))
    }

    fn print_transaction(&mut self, hash: Hash256) -> bool {
        self.push(Call::PrintTransaction(hash))
    }

    fn print_transaction_pool_long(&mut self) -> bool {
        self.push(Call::PrintTransactionPoolLong)
    }

    fn print_transaction_pool_short(&mut self) -> bool {
        self.push(Call::PrintTransactionPoolShort)
    }

    fn start_mining(&mut self, address: AccountAddress, threads: u64) -> bool {
        self.push(Call::StartMining(address, threads))
    }

    fn stop_mining(&mut self) -> bool {
        self.push(Call::StopMining)
    }

    fn stop_daemon(&mut self) -> bool {
        self.push(Call::StopDaemon)
    }

    fn print_status(&mut self) -> bool {
        self.push(Call::PrintStatus)
    }

    fn set_limit(&mut self, bytes: i64) -> bool {
        self.push(Call::SetLimit(bytes))
    }

    fn set_limit_up(&mut self, bytes: i64) -> bool {
        self.push(Call::SetLimitUp(bytes))
    }

    fn set_limit_down(&mut self, bytes: i64) -> bool {
        self.push(Call::SetLimitDown(bytes))
    }
}

pub type Console = CommandParserExecutor<RecordingExecutor, Vec<u8>>;

pub fn console() -> Console {
    CommandParserExecutor::with_output(RecordingExecutor::new(), ConsoleOutput::new(Vec::new()))
}

pub fn failing_console() -> Console {
    CommandParserExecutor::with_output(
        RecordingExecutor::failing(),
        ConsoleOutput::new(Vec::new()),
    )
}

/// Consumes the console, returning recorded calls and printed text.
pub fn finish(console: Console) -> (Vec<Call>, String) {
    let (executor, output) = console.into_parts();
    let text = String::from_utf8(output.into_inner()).expect("console output is UTF-8");
    (executor.calls, text)
}

pub fn main_address(seed: u8) -> (AccountAddress, String) {
    let address = AccountAddress::new(Network::Main, [seed; 20]);
    let text = address.encode(&AddressVersions::default());
    (address, text)
}

pub fn test_address(seed: u8) -> (AccountAddress, String) {
    let address = AccountAddress::new(Network::Test, [seed; 20]);
    let text = address.encode(&AddressVersions::default());
    (address, text)
}
