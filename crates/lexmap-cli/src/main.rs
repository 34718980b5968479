//! `lexmap` - build the language-definition registry artifact.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lexmap_registry::{BuildError, build_registry};

#[derive(Parser)]
#[command(name = "lexmap", version, about = "Language-definition registry builder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the two language catalogs into the registry artifact.
    Build {
        /// Rich catalog: JSON object with delimiters and base families.
        #[arg(long)]
        rich: PathBuf,
        /// Simple catalog: JSON array of {language, extensions} records.
        #[arg(long)]
        simple: PathBuf,
        /// Where to write the registry artifact.
        #[arg(long, default_value = "languages.json")]
        out: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), BuildError> {
    match cli.command {
        Command::Build { rich, simple, out } => {
            let output = build_registry(&rich, &simple, Some(&out))?;
            output.diagnostics.report();
            eprintln!(
                "wrote {} languages, {} extensions indexed ({} unmatched, {} extension conflicts)",
                output.registry.len(),
                output.index.len(),
                output.diagnostics.unmatched.len(),
                output.diagnostics.extension_conflicts.len(),
            );
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
