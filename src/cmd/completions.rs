//! Completions command implementation
//!
//! Handles the `seo-audit completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// seo-audit completions bash > /etc/bash_completion.d/seo-audit
///
/// # Zsh
/// seo-audit completions zsh > ~/.zfunc/_seo-audit
///
/// # Fish
/// seo-audit completions fish > ~/.config/fish/completions/seo-audit.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("seo-audit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic SEO analyzer for static HTML pages")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("audit").about("Audit an HTML page or external URL"))
        .subcommand(Command::new("site").about("Audit every HTML page under a directory"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "seo-audit".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    #[test]
    fn test_cmd_completions_all_shells_supported() {
        // Verify all major shells are available
        let _bash = Shell::Bash;
        let _zsh = Shell::Zsh;
        let _fish = Shell::Fish;
        let _powershell = Shell::PowerShell;

        // If this compiles, all shells are available
    }
}
