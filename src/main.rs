use clap::{Parser, Subcommand, ValueEnum};
use lendlog::application::command::Command;
use lendlog::application::registry::{ActiveLoanSummary, ItemSummary, LoanRegistry};
use lendlog::interfaces::csv::command_reader::CommandReader;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tracing filter for diagnostics written to stderr (e.g. "debug").
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a CSV command script, then list items and active loans
    Run {
        /// Command script, one `verb, field, ...` row per operation
        script: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Replay a small example session
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Ok,
    Rejected,
}

#[derive(Serialize)]
struct Outcome {
    status: Status,
    message: String,
}

#[derive(Serialize)]
struct Report {
    outcomes: Vec<Outcome>,
    items: Vec<ItemSummary>,
    active_loans: Vec<ActiveLoanSummary>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut registry = LoanRegistry::in_memory();

    let (reports, format) = match cli.command {
        Commands::Run { script, format } => {
            let file = File::open(script).into_diagnostic()?;
            let reader = CommandReader::new(file);
            let mut outcomes = Vec::new();
            for command in reader.commands() {
                match command {
                    Ok(command) => outcomes.push(apply(&mut registry, command)?),
                    Err(e) => {
                        eprintln!("Error reading command: {}", e);
                    }
                }
            }
            (vec![report(&registry, outcomes)], format)
        }
        Commands::Demo { format } => {
            let (lending, returns) = demo_session();
            let mut reports = Vec::new();
            for stage in [lending, returns] {
                let outcomes = stage
                    .into_iter()
                    .map(|command| apply(&mut registry, command))
                    .collect::<Result<Vec<_>>>()?;
                reports.push(report(&registry, outcomes));
            }
            (reports, format)
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(out).into_diagnostic()?;
                }
                write_text(&mut out, report).into_diagnostic()?;
            }
        }
        Format::Json => {
            // A single report is printed bare; the demo's stages as an array.
            match reports.as_slice() {
                [single] => serde_json::to_writer_pretty(&mut out, single),
                stages => serde_json::to_writer_pretty(&mut out, stages),
            }
            .into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}

/// Snapshot of the registry after a batch of outcomes.
fn report(registry: &LoanRegistry, outcomes: Vec<Outcome>) -> Report {
    Report {
        outcomes,
        items: registry.list_items(),
        active_loans: registry.list_active_loans(),
    }
}

/// Applies one command. Rejections become outcomes; anything else aborts.
fn apply(registry: &mut LoanRegistry, command: Command) -> Result<Outcome> {
    match registry.apply(command) {
        Ok(receipt) => Ok(Outcome {
            status: Status::Ok,
            message: receipt.to_string(),
        }),
        Err(e) if e.is_rejection() => Ok(Outcome {
            status: Status::Rejected,
            message: e.to_string(),
        }),
        Err(e) => Err(e).into_diagnostic(),
    }
}

fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    for outcome in &report.outcomes {
        writeln!(out, "{}", outcome.message)?;
    }

    writeln!(out)?;
    writeln!(out, "Items:")?;
    for item in &report.items {
        writeln!(out, "{}", item)?;
    }

    writeln!(out)?;
    writeln!(out, "Active loans:")?;
    for loan in &report.active_loans {
        writeln!(out, "{}", loan)?;
    }
    Ok(())
}

/// Example session split in two stages: registrations and loans, then one
/// return. Listings are printed after each stage.
fn demo_session() -> (Vec<Command>, Vec<Command>) {
    let contact = |name: &str, phone: &str| Command::RegisterContact {
        name: name.to_string(),
        phone: phone.to_string(),
    };
    let item = |name: &str, kind: &str, id: &str| Command::RegisterItem {
        name: name.to_string(),
        kind: kind.to_string(),
        id: id.to_string(),
    };
    let lend = |id: &str, phone: &str| Command::Lend {
        id: id.to_string(),
        phone: phone.to_string(),
    };

    let lending = vec![
        contact("João Silva", "11999887766"),
        contact("Maria Santos", "11999887755"),
        Command::RegisterBook {
            title: "Dom Casmurro".to_string(),
            author: "Machado de Assis".to_string(),
            isbn: "123".to_string(),
        },
        item("Drill", "tool", "001"),
        item("Switch", "videogame", "002"),
        lend("123", "11999887766"),
        lend("001", "11999887755"),
    ];
    let returns = vec![Command::Return {
        id: "123".to_string(),
    }];
    (lending, returns)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
