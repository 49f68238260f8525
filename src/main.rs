//! CLI entry point for `pg_dumpacl`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use pg_dumpacl::catalog::snapshot::CatalogSnapshot;
use pg_dumpacl::generator::dump::{self, DatabaseSelection, DumpOptions, ErrorPolicy};
use pg_dumpacl::output::formatter;

#[derive(Parser)]
#[command(
    name = "pg_dumpacl",
    about = "Dump database creation statements and ACLs as a replayable SQL script"
)]
struct Cli {
    /// JSON catalog snapshot of the source cluster
    snapshot: PathBuf,

    /// Dump every database in the snapshot
    #[arg(short = 'a', long, conflicts_with = "database")]
    all: bool,

    /// Dump only this database
    #[arg(short = 'd', long, required_unless_present = "all")]
    database: Option<String>,

    /// Write the script to this file instead of stdout
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// What to do with objects whose ACL cannot be parsed
    #[arg(long, default_value = "halt")]
    on_error: ErrorPolicy,

    /// Also replay ACLs of the snapshot's non-database objects
    #[arg(long)]
    objects: bool,

    /// Print debug diagnostics on stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let snapshot = match CatalogSnapshot::from_path(&cli.snapshot) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("pg_dumpacl: {e}");
            process::exit(1);
        }
    };

    let selection = match cli.database {
        Some(name) if !cli.all => DatabaseSelection::Named(name),
        _ => DatabaseSelection::All,
    };
    let options = DumpOptions {
        selection,
        error_policy: cli.on_error,
        include_objects: cli.objects,
    };

    let report = match dump::dump(&snapshot, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("pg_dumpacl: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = formatter::write_script(cli.file.as_deref(), &report.script) {
        eprintln!("pg_dumpacl: {e}");
        process::exit(1);
    }

    for skipped in &report.skipped {
        eprintln!("pg_dumpacl: skipped: {skipped}");
    }
    if !report.skipped.is_empty() {
        process::exit(1);
    }
}
