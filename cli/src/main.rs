use std::path::{Path, PathBuf};

use clap::Parser;
use litedump_engine::{DEFAULT_ENGINE_PROGRAM, Engine, dump, write_document};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "litedump")]
#[command(about = "Dump a SQLite database file to a JSON document", version)]
struct Cli {
    /// Path to the database file to dump.
    db_file: String,

    /// Output path (default: the input path up to its first '.', with
    /// '.json' appended).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// External engine program used for all database access.
    #[arg(long, default_value = DEFAULT_ENGINE_PROGRAM)]
    engine: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let output = cli
        .output
        .unwrap_or_else(|| derive_output_path(&cli.db_file));
    let engine = Engine::with_program(&cli.engine, &cli.db_file);

    // Extraction failures go to stderr without changing the exit status;
    // only argument errors exit non-zero.
    match run(&engine, &output) {
        Ok(tables) => println!("Dumped {tables} table(s) to '{}'.", output.display()),
        Err(err) => eprintln!("error: {err}"),
    }
}

fn run(engine: &Engine, output: &Path) -> litedump_engine::Result<usize> {
    let document = dump(engine)?;
    write_document(&document, output)?;
    Ok(document.table_count())
}

/// Derives the output path: input text up to (not including) its first
/// '.', with ".json" appended; the whole input when no '.' exists.
fn derive_output_path(db_file: &str) -> PathBuf {
    let stem = db_file.split('.').next().unwrap_or(db_file);
    PathBuf::from(format!("{stem}.json"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::derive_output_path;
    use std::path::PathBuf;

    #[test]
    fn test_simple_extension_is_replaced() {
        assert_eq!(derive_output_path("test.db"), PathBuf::from("test.json"));
    }

    #[test]
    fn test_only_the_first_dot_matters() {
        assert_eq!(derive_output_path("a.b.db"), PathBuf::from("a.json"));
    }

    #[test]
    fn test_no_dot_appends_extension() {
        assert_eq!(derive_output_path("nodot"), PathBuf::from("nodot.json"));
    }

    #[test]
    fn test_leading_dot_leaves_empty_stem() {
        assert_eq!(derive_output_path(".hidden"), PathBuf::from(".json"));
    }
}
