use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use core_types::{Gender, Person};
use database::Db;
use generator::BalancedGenerator;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the census population tool.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from the .env file, if one exists.
    // Settings may also come straight from the process environment.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_settings()?;
    let mut db = Db::connect(&settings).await?;

    // Execute the appropriate command, then release the connection on
    // every exit path before surfacing the outcome.
    let outcome = run(cli.command, &mut db).await;
    if let Err(err) = db.close().await {
        tracing::warn!(%err, "failed to close the store connection");
    }
    outcome
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Populates and reports on a small relational schema of people.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database, both tables and the seeded gender rows.
    Setup,
    /// Insert a single person record.
    Insert(InsertArgs),
    /// Write the distinct person listing to report_unique.txt.
    Report,
    /// Generate and insert a balanced synthetic population.
    Populate(PopulateArgs),
    /// Write the filtered listing to report_first_letter_f.txt.
    FilteredReport,
}

#[derive(Parser)]
struct InsertArgs {
    /// Full name, "Surname FirstName MiddleName".
    full_name: String,

    /// Birth date (format: YYYY-MM-DD).
    birth_date: NaiveDate,

    /// Gender label: "male" or "female".
    gender: Gender,
}

#[derive(Parser)]
struct PopulateArgs {
    /// Number of synthetic records to generate and insert.
    #[arg(long, default_value_t = 100_000)]
    count: usize,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn run(command: Commands, db: &mut Db) -> anyhow::Result<()> {
    match command {
        Commands::Setup => {
            db.ensure_schema().await?;
            println!("Schema ready.");
        }
        Commands::Insert(args) => {
            let person = Person::new(args.full_name, args.birth_date, args.gender);
            db.insert_person(&person).await?;
            println!("Inserted {}.", person.full_name());
        }
        Commands::Report => {
            let rows = db.write_unique_report(database::UNIQUE_REPORT_FILE).await?;
            println!("Wrote {rows} rows to {}.", database::UNIQUE_REPORT_FILE);
        }
        Commands::Populate(args) => {
            handle_populate(args, db).await?;
        }
        Commands::FilteredReport => {
            let rows = db
                .write_filtered_report(database::FILTERED_REPORT_FILE)
                .await?;
            println!("Wrote {rows} rows to {}.", database::FILTERED_REPORT_FILE);
        }
    }
    Ok(())
}

/// Handles the orchestration of the bulk population run.
async fn handle_populate(args: PopulateArgs, db: &mut Db) -> anyhow::Result<()> {
    println!("Generating and inserting {} person records", args.count);

    // Set up the progress bar
    let progress_bar = ProgressBar::new(args.count as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    // Insertions stay strictly sequential: the surname balancing depends
    // on in-order load updates, and the store sees one statement at a time.
    for person in BalancedGenerator::new(args.count) {
        db.insert_person(&person).await?;
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("population inserted");
    Ok(())
}
