//! Keyword table binding console commands to their handlers.

use crate::executor::Executor;
use crate::outcome::CommandOutcome;
use crate::parser_executor::CommandParserExecutor;
use std::io::Write;

/// Handler signature shared by every [`CommandParserExecutor`] command.
pub type Handler<E, W> = fn(&mut CommandParserExecutor<E, W>, &[&str]) -> CommandOutcome;

/// Keyword of the built-in command listing.
pub const HELP_COMMAND: &str = "help";

/// One registered console command.
pub struct CommandSpec<E, W: Write> {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    handler: Handler<E, W>,
}

/// Splits a raw console line into tokens on whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Console keyword table.
pub struct CommandRegistry<E, W: Write> {
    commands: Vec<CommandSpec<E, W>>,
}

impl<E: Executor, W: Write> Default for CommandRegistry<E, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor, W: Write> CommandRegistry<E, W> {
    /// Builds the table with every daemon console command.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_node_commands();
        registry.register_mining_commands();
        registry.register_limit_commands();
        registry
    }

    /// Adds a command. A later registration under the same keyword wins.
    pub fn register(
        &mut self,
        name: &'static str,
        usage: &'static str,
        description: &'static str,
        handler: Handler<E, W>,
    ) {
        self.commands.retain(|spec| spec.name != name);
        self.commands.push(CommandSpec {
            name,
            usage,
            description,
            handler,
        });
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec<E, W>> {
        self.commands.iter().find(|spec| spec.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|spec| spec.name)
    }

    /// Runs `name` with `args`. Returns `None` when the keyword is unknown.
    pub fn dispatch(
        &self,
        target: &mut CommandParserExecutor<E, W>,
        name: &str,
        args: &[&str],
    ) -> Option<CommandOutcome> {
        if name == HELP_COMMAND {
            self.print_help(target);
            return Some(CommandOutcome::Acknowledged);
        }
        self.lookup(name).map(|spec| (spec.handler)(target, args))
    }

    fn print_help(&self, target: &mut CommandParserExecutor<E, W>) {
        let width = self.commands.iter().map(|spec| spec.usage.len()).max().unwrap_or(0);
        let output = target.output_mut();
        output.line("Commands:");
        for spec in &self.commands {
            output.line(format!("  {:<width$}  {}", spec.usage, spec.description));
        }
    }

    fn register_node_commands(&mut self) {
        self.register(
            "print_pl",
            "print_pl",
            "Print peer list",
            CommandParserExecutor::print_peer_list,
        );
        self.register(
            "save",
            "save",
            "Save blockchain",
            CommandParserExecutor::save_blockchain,
        );
        self.register(
            "print_cn",
            "print_cn",
            "Print connections",
            CommandParserExecutor::print_connections,
        );
        self.register(
            "print_bc",
            "print_bc <begin_height> [<end_height>]",
            "Print blockchain info in a given blocks range",
            CommandParserExecutor::print_blockchain_info,
        );
        self.register(
            "print_height",
            "print_height",
            "Print local blockchain height",
            CommandParserExecutor::print_height,
        );
        self.register(
            "print_block",
            "print_block <block_hash> | <block_height>",
            "Print block",
            CommandParserExecutor::print_block,
        );
        self.register(
            "print_tx",
            "print_tx <transaction_hash>",
            "Print transaction",
            CommandParserExecutor::print_transaction,
        );
        self.register(
            "print_pool",
            "print_pool",
            "Print transaction pool (long format)",
            CommandParserExecutor::print_transaction_pool_long,
        );
        self.register(
            "print_pool_sh",
            "print_pool_sh",
            "Print transaction pool (short format)",
            CommandParserExecutor::print_transaction_pool_short,
        );
        self.register(
            "show_diff",
            "show_diff",
            "Show difficulty",
            CommandParserExecutor::show_difficulty,
        );
        self.register(
            "set_log",
            "set_log <level>",
            "Change current log detalization level, <level> is a number 0-4",
            CommandParserExecutor::set_log_level,
        );
        self.register(
            "status",
            "status",
            "Show daemon status",
            CommandParserExecutor::print_status,
        );
        self.register(
            "exit",
            "exit",
            "Stop the daemon",
            CommandParserExecutor::stop_daemon,
        );
    }

    fn register_mining_commands(&mut self) {
        self.register(
            "start_mining",
            "start_mining <addr> [threads=1]",
            "Start mining for specified address",
            CommandParserExecutor::start_mining,
        );
        self.register(
            "stop_mining",
            "stop_mining",
            "Stop mining",
            CommandParserExecutor::stop_mining,
        );
        self.register(
            "show_hr",
            "show_hr",
            "Start showing hash rate",
            CommandParserExecutor::show_hash_rate,
        );
        self.register(
            "hide_hr",
            "hide_hr",
            "Stop showing hash rate",
            CommandParserExecutor::hide_hash_rate,
        );
    }

    fn register_limit_commands(&mut self) {
        self.register(
            "limit",
            "limit <kB/s>",
            "Set download and upload limit, -1 for default",
            CommandParserExecutor::set_limit,
        );
        self.register(
            "limit_up",
            "limit_up <kB/s>",
            "Set upload limit, -1 for default",
            CommandParserExecutor::set_limit_up,
        );
        self.register(
            "limit_down",
            "limit_down <kB/s>",
            "Set download limit, -1 for default",
            CommandParserExecutor::set_limit_down,
        );
    }
}
