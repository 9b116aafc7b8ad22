//! End-to-end console sessions driven through the keyword table.

mod common;

use common::{console, test_address, Call, RecordingExecutor};
use nodectl_console::{CommandOutcome, LineResult, Shell};
use std::io::Cursor;

fn shell() -> Shell<RecordingExecutor, Vec<u8>> {
    Shell::new(console(), "node")
}

fn finish(shell: Shell<RecordingExecutor, Vec<u8>>) -> (Vec<Call>, String) {
    common::finish(shell.into_dispatcher())
}

#[test]
fn session_dispatches_each_line() {
    let mut shell = shell();
    let script = "print_height\n\nprint_bc 5 9\nlimit_down -1\nset_log 2\nquit\nstatus\n";
    shell.run(Cursor::new(script)).unwrap();

    let (calls, text) = finish(shell);
    assert_eq!(
        calls,
        vec![
            Call::PrintHeight,
            Call::PrintBlockchainInfo(5, 9),
            Call::SetLimitDown(128 * 1024),
            Call::SetLogLevel(2),
        ]
    );
    assert_eq!(text, "node> ".repeat(6));
}

#[test]
fn session_reports_failures_and_unknown_keywords() {
    let mut shell = shell();
    shell
        .run(Cursor::new("print_block nonsense\nfly_to_moon\nprint_bc\n"))
        .unwrap();

    let (calls, text) = finish(shell);
    assert!(calls.is_empty());
    assert_eq!(
        text,
        "node> command failed: print_block\n\
         node> unknown command: fly_to_moon\n\
         node> need block index parameter\ncommand failed: print_bc\n\
         node> "
    );
}

#[test]
fn acknowledged_commands_are_not_failures() {
    let mut shell = shell();
    assert_eq!(
        shell.execute_line("set_log 9"),
        LineResult::Completed(CommandOutcome::Acknowledged)
    );
    assert_eq!(
        shell.execute_line("print_tx xyz"),
        LineResult::Completed(CommandOutcome::Acknowledged)
    );

    let (_, text) = finish(shell);
    assert_eq!(
        text,
        "wrong number range, use: set_log <log_level_number_0-4>\n\
         expected: print_tx <transaction hash>\n"
    );
}

#[test]
fn mining_to_testnet_through_keyword() {
    let (address, encoded) = test_address(7);
    let mut shell = shell();
    let line = format!("start_mining {encoded} 2");
    assert_eq!(
        shell.execute_line(&line),
        LineResult::Completed(CommandOutcome::Dispatched(true))
    );

    let (calls, text) = finish(shell);
    assert_eq!(calls, vec![Call::StartMining(address, 2)]);
    assert_eq!(
        text,
        "Mining to a testnet address, make sure this is intentional!\n"
    );
}

#[test]
fn exit_ends_session() {
    let mut shell = shell();
    shell.run(Cursor::new("exit\nprint_height\n")).unwrap();

    let (calls, text) = finish(shell);
    assert_eq!(calls, vec![Call::StopDaemon]);
    assert_eq!(text, "node> ");
}

#[test]
fn exit_line_reports_stop() {
    let mut shell = shell();
    assert_eq!(shell.execute_line("exit"), LineResult::Stopped);
    assert_eq!(finish(shell).0, vec![Call::StopDaemon]);
}
