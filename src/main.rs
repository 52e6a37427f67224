use clap::{Parser, Subcommand};
use clap_complete::Shell;
use seo_audit::cmd;
use std::process;

/// Heuristic SEO analyzer for static HTML pages
///
/// seo-audit runs a fixed battery of checks against a page's markup, scores
/// the result, and reports prioritized recommendations.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit an HTML page or external URL
    Audit {
        /// HTML file path, http(s):// URL, or a shortcut: current, home
        #[arg(value_name = "TARGET", default_value = "index.html")]
        target: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Audit every HTML page under a directory
    Site {
        /// Site root directory
        #[arg(value_name = "DIR")]
        dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Audit { target, json }) => cmd::cmd_audit(target, *json),
        Some(Commands::Site { dir, json }) => cmd::cmd_site(dir, *json),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("seo-audit v{}", env!("CARGO_PKG_VERSION"));
            println!("Heuristic SEO analyzer for static HTML pages\n");
            println!("Usage: seo-audit <COMMAND>\n");
            println!("Commands:");
            println!("  audit  Audit an HTML page or external URL");
            println!("  site   Audit every HTML page under a directory");
            println!("\nRun 'seo-audit <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use seo_audit::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
