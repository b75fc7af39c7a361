use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};

use crate::cli_args::Cli;

/// Run `imeta completion <shell>`: write the completion script for the
/// `imeta` binary (subcommands, manifest paths, global flags) to stdout.
///
/// Exit 2 when the shell is not one clap_complete can target.
pub fn run(shell: &str) -> i32 {
    let Some(target) = parse_shell(shell) else {
        let known: Vec<String> = Shell::value_variants()
            .iter()
            .filter_map(|s| s.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        eprintln!(
            "imeta completion: no completion script for '{}' (expected one of: {})",
            shell,
            known.join(", ")
        );
        return 2;
    };

    tracing::debug!(shell = %target, "generating completions");
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(target, &mut cmd, bin, &mut std::io::stdout());
    0
}

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "ps" | "pwsh" => Some(Shell::PowerShell),
        other => <Shell as ValueEnum>::from_str(other, true).ok(),
    }
}
