use clap::{ArgGroup, Parser};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use nistcat::{error::Result, load_catalog};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group = ArgGroup::new("action")
    .required(true)
    .multiple(true)
    .args(["control", "assignments", "dump"]))]
struct Args {
    /// Catalog XML file path
    #[arg(short, long)]
    file: String,

    /// Text of the field identifying the control to inspect (e.g. AC-1)
    #[arg(short, long)]
    control: Option<String>,

    /// Tag of the field matched during control lookup
    #[arg(short, long, default_value = "number")]
    tag: String,

    /// Print the control's element hierarchy instead of its text
    #[arg(long)]
    hierarchy: bool,

    /// Write the organization-defined assignment document to this path
    #[arg(short, long)]
    assignments: Option<String>,

    /// Print the text of the whole catalog
    #[arg(long)]
    dump: bool,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let catalog = load_catalog(&args.file)?;

    if let Some(output_path) = args.assignments {
        info!("Writing assignment document to {}", output_path);
        catalog.write_assignment_document(&output_path)?;
    }

    if let Some(text) = args.control {
        if args.hierarchy {
            catalog.print_hierarchy(&args.tag, &text)?;
        } else {
            println!("{}", catalog.control_text(&args.tag, &text)?);
        }
    }

    if args.dump {
        println!("{}", catalog.document_text());
    }

    Ok(())
}
