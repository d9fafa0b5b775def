//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cmdlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive the cmdlog logging facade from the shell", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Minimum level that gets written (see `cmdlog levels`)
    #[arg(short = 'L', long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the valid log levels
    Levels,

    /// Log a single message
    Log {
        /// Message text; embedded newlines become separate lines
        message: String,

        /// Level of the message
        #[arg(short, long, default_value = "info")]
        level: String,

        /// Extra field attached to the record (JSON output only)
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Log messages tagged with a sub-command label
    Run {
        /// Sub-command label
        tag: String,

        /// Messages logged while the label is active
        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// Log a message into an in-memory capture and print it on stdout
    Capture {
        /// Message logged while output is captured
        message: String,
    },

    /// Log a message through a `tracing` event
    #[command(name = "trace-demo")]
    TraceDemo {
        /// Message text
        message: String,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        cmdlog_core::set_level(&self.log_level)?;

        match &self.command {
            Commands::Levels => levels::execute(),
            Commands::Log { message, level, fields } => emit::execute(message, level, fields),
            Commands::Run { tag, messages } => run::execute(tag, messages),
            Commands::Capture { message } => capture::execute(message),
            Commands::TraceDemo { message } => trace_demo::execute(message),
        }
    }
}
