use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "imeta",
    version,
    about = "Interface conformance checking and documentation composition"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Interface settings file (default: ./imeta.json)
    #[arg(long, global = true, env = "IMETA_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Register every class in the given manifests and report violations
    Check {
        /// Manifest files, or directories searched for `*.json` manifests
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Exit non-zero on any violation, warnings included
        #[arg(long)]
        strict: bool,
        /// Stop each manifest at its first violation
        #[arg(long)]
        raise: bool,
    },

    /// Print composed class and member documentation
    Docs {
        /// Manifest files, or directories searched for `*.json` manifests
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Only this class
        #[arg(long)]
        class: Option<String>,
        /// Only this member
        #[arg(long)]
        member: Option<String>,
    },

    /// Check whether a candidate signature accepts every call a reference accepts
    Compat {
        /// Candidate signature, e.g. "(self, a, b=None)"
        candidate: String,
        /// Reference signature, e.g. "(self, a)"
        reference: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
