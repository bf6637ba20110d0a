//! Command-line front end.
//!
//! Each command is one request against the state layer. `shell` keeps a
//! single process alive so registrations and submissions stay visible
//! between commands.

mod commands;
mod render;
mod shell;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::validation::{FormErrors, SubmitError};

pub use commands::execute;
pub use shell::{run_shell, split_words};

#[derive(Debug, Parser)]
#[command(name = "busvoz", version, about = "Feedback sobre as linhas de ônibus de Olinda")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the simulated request delay
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Session file override
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List bus lines
    Lines,
    /// List feedback types
    Types,
    /// List submitted feedback, newest first
    List {
        /// Only this bus line id
        #[arg(long)]
        line: Option<String>,
        /// Only this feedback type id
        #[arg(long)]
        kind: Option<String>,
        /// Only feedback of the signed-in user
        #[arg(long)]
        mine: bool,
    },
    /// Sign in by email
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Submit a complaint as the signed-in user
    Submit {
        /// Bus line id
        #[arg(long)]
        line: String,
        /// Feedback type id
        #[arg(long)]
        kind: String,
        #[arg(long)]
        comment: String,
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Read commands from stdin against one in-process state
    Shell,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if self.no_delay {
            config.latency.auth_ms = 0;
            config.latency.submit_ms = 0;
        }
        if let Some(path) = &self.session_file {
            config.session.path = Some(path.clone());
            config.session.persist = true;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Form(FormErrors),

    #[error("{0}")]
    Rejected(#[from] SubmitError),

    #[error("Linha de ônibus '{id}' não encontrada")]
    UnknownBusLine { id: String },

    #[error("Tipo de problema '{id}' não encontrado")]
    UnknownFeedbackType { id: String },
}

impl From<FormErrors> for CliError {
    fn from(errors: FormErrors) -> Self {
        CliError::Form(errors)
    }
}

impl CliError {
    /// Errors caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, CliError::Io(_))
    }
}
