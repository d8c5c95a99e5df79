use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "fitscan")]
#[command(about = "FitScan - AI-assisted fitness tracking client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hydrated session state and initial route
    Status,
    /// Continue without an account
    Guest,
    /// Log in with an email address
    Login { email: String },
    /// Log out and erase the local session
    Logout,
    /// Submit profile data and a body photo for analysis
    Onboard {
        /// Age in years
        #[arg(long)]
        age: u32,
        /// Height in centimeters
        #[arg(long)]
        height: u32,
        /// Weight in kilograms
        #[arg(long)]
        weight: u32,
        /// Body photo to analyze
        #[arg(long)]
        photo: PathBuf,
    },
    /// Analyze a meal photo and record it in the history
    ScanMeal { photo: PathBuf },
    /// Generate a workout plan and record it in the history
    Workout {
        /// Where the workouts will happen (gym, home, park, ...)
        #[arg(long)]
        location: String,
        /// Physical limitations to account for
        #[arg(long, default_value = "")]
        limitations: String,
    },
    /// Show the recorded meal and workout histories
    History,
    /// Probe the analysis backend
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = bootstrap::bootstrap().await?;

    match cli.command {
        Commands::Status => commands::status::run(&ctx)?,
        Commands::Guest => commands::auth::guest(&ctx)?,
        Commands::Login { email } => commands::auth::login(&ctx, &email)?,
        Commands::Logout => commands::auth::logout(&ctx)?,
        Commands::Onboard {
            age,
            height,
            weight,
            photo,
        } => commands::onboard::run(&ctx, age, height, weight, &photo).await?,
        Commands::ScanMeal { photo } => commands::nutriscan::run(&ctx, &photo).await?,
        Commands::Workout {
            location,
            limitations,
        } => commands::coach::run(&ctx, &location, &limitations).await?,
        Commands::History => commands::journey::run(&ctx)?,
        Commands::Health => commands::health::run(&ctx).await?,
    }

    // Let queued write-behind tasks reach disk before the process ends
    ctx.store()?.flush().await;

    Ok(())
}
