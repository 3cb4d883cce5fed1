//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;

use super::commands::{self, ThemeMode};
use todo_dash::adapters::{ClockIdSource, FileKeyValueStore};
use todo_dash::config::Config;
use todo_dash::core::models::{Filter, TaskId};
use todo_dash::core::services::{KvStateSink, TodoStore};
use todo_dash::output::OutputMode;

/// todo-dash - A local todo list
#[derive(Parser, Debug)]
#[command(
    name = "todo-dash",
    version,
    about = "A local todo list with persistent state",
    long_about = "Add, edit, complete, filter and delete short text tasks.\n\n\
                  Every change is written straight to the data directory,\n\
                  together with the light/dark theme preference."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the persisted state
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Task and theme commands
    #[command(flatten)]
    Todo(TodoCommand),

    /// Show version
    Version,
}

/// Commands that open the task store
#[derive(Subcommand, Debug)]
pub enum TodoCommand {
    /// Add a new task
    Add {
        /// Task text
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List tasks
    List {
        /// Which tasks to show: all, completed, pending
        #[arg(short, long, default_value = "all")]
        filter: Filter,
    },

    /// Mark a task completed, or back to pending
    Toggle {
        /// Task ID
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },

    /// Replace a task's text
    Edit {
        /// Task ID
        #[arg(allow_negative_numbers = true)]
        id: TaskId,

        /// New task text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },

    /// Delete every completed task
    ClearCompleted,

    /// Delete every task
    ClearAll,

    /// Show task counts
    Stats,

    /// Show or change the theme
    Theme {
        /// dark, light or toggle (omit to show the current theme)
        mode: Option<ThemeMode>,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load();
    if !config.display.color || output_mode == OutputMode::Json {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Todo(command)) => {
            let data_dir = config.data_dir(cli.data_dir.as_deref());
            run_todo(command, &data_dir, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("todo-dash v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("todo-dash v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'todo-dash --help' for usage");
                println!("Run 'todo-dash add <text>' to get started");
            }
            Ok(())
        },
    }
}

/// Open the store, apply one command, then flush
fn run_todo(command: TodoCommand, data_dir: &Path, mode: OutputMode) -> anyhow::Result<()> {
    debug!("Using data directory {}", data_dir.display());

    let sink = KvStateSink::new(FileKeyValueStore::new(data_dir));
    let mut store = TodoStore::init(sink, ClockIdSource::new());

    let result = match command {
        TodoCommand::Add { text } => commands::add(&mut store, &text.join(" "), mode),
        TodoCommand::List { filter } => commands::list(&mut store, filter, mode),
        TodoCommand::Toggle { id } => commands::toggle(&mut store, id, mode),
        TodoCommand::Edit { id, text } => commands::edit(&mut store, id, &text.join(" "), mode),
        TodoCommand::Delete { id } => commands::delete(&mut store, id, mode),
        TodoCommand::ClearCompleted => commands::clear_completed(&mut store, mode),
        TodoCommand::ClearAll => commands::clear_all(&mut store, mode),
        TodoCommand::Stats => commands::stats(&store, mode),
        TodoCommand::Theme { mode: theme } => {
            commands::theme(&mut store, theme, mode);
            Ok(())
        },
    };

    store
        .teardown()
        .with_context(|| format!("failed to save state to {}", data_dir.display()))?;
    result
}
