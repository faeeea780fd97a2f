//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use roomsearch_core::config::SearchConfig;
use roomsearch_core::error::Result;
use roomsearch_core::session::SearchSession;
use roomsearch_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Configuration from `--config`, or discovered from the working directory
    ///
    /// `--graph` overrides any graph file the configuration names.
    pub fn load_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                let mut config = SearchConfig::load(path)?;
                config.resolve_graph_file(path);
                config
            }
            None => SearchConfig::discover(&env::current_dir()?)?,
        };

        if let Some(graph) = &self.cli.graph {
            config.graph_file = Some(graph.clone());
        }

        trace_time!(self.start, "load_config");
        Ok(config)
    }

    pub fn open_session(&self, config: &SearchConfig) -> Result<SearchSession> {
        let session = SearchSession::from_config(config)?;
        tracing::debug!(
            rooms = session.graph().rooms().len(),
            edges = session.graph().edge_count(),
            elapsed = ?self.start.elapsed(),
            "open_session"
        );
        Ok(session)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("roomsearch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classical graph-search strategies traced over a house floor plan.");
        println!();
        println!("Run `roomsearch --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => commands::search::execute(ctx, args),
            Commands::Rooms => commands::rooms::execute(ctx),
            Commands::Algorithms => commands::algorithms::execute(ctx.cli),
        }
    }
}
