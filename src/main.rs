//! Bonus-bet hedge finder entry point.

use std::collections::HashSet;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bonus_hedge::config::Config;
use bonus_hedge::feed::{merge_events, OddsApiClient};
use bonus_hedge::hedge::{scan, ScanReport};
use bonus_hedge::market::{regions_needed, resolve_book, sport_key, books::BOOK_ALIASES};

/// Sportsbook bonus-bet hedge finder.
#[derive(Parser, Debug)]
#[command(name = "bonus-hedge")]
#[command(about = "Find the best cash hedge for a sportsbook bonus bet")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Book holding the bonus bet.
    #[arg(long)]
    bonus_book: Option<String>,

    /// Comma-separated books available for the hedge wager.
    #[arg(long)]
    books: Option<String>,

    /// Comma-separated sports to scan.
    #[arg(long, default_value = "nba,ncaab")]
    sports: String,

    /// Bonus bet face value in dollars.
    #[arg(long)]
    stake: Option<Decimal>,

    /// Minimum efficiency to keep an opportunity (0.75 = 75%).
    #[arg(long)]
    min_eff: Option<Decimal>,

    /// Print every qualifying opportunity instead of only the best.
    #[arg(long)]
    all: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check configuration validity.
    CheckConfig,

    /// List supported bookmaker names.
    ListBooks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("bonus_hedge=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::ListBooks) => cmd_list_books(),
        None => cmd_scan(args).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("BONUS HEDGE FINDER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!(
        "  Odds API Key: {}",
        if config.odds_api_key.is_some() {
            "present"
        } else {
            "MISSING (required for scanning)"
        }
    );
    println!("  Odds API URL: {}", config.odds_api_url);
    println!("  Bonus Stake: ${:.2}", config.bonus_stake);
    println!("  Min Efficiency: {:.2}%", config.min_efficiency * Decimal::ONE_HUNDRED);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// List supported bookmaker names and their API keys.
fn cmd_list_books() -> anyhow::Result<()> {
    let mut names: Vec<_> = BOOK_ALIASES.iter().collect();
    names.sort();
    println!("Supported bookmakers (name -> odds source key):");
    for (name, key) in names {
        println!("  {:<12} -> {}", name, key);
    }
    Ok(())
}

/// Fetch odds and scan for the best hedge.
async fn cmd_scan(args: Args) -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let bonus_arg = args
        .bonus_book
        .ok_or_else(|| anyhow::anyhow!("--bonus-book is required"))?;
    let books_arg = args
        .books
        .ok_or_else(|| anyhow::anyhow!("--books is required"))?;

    let bonus_book = resolve_book(&bonus_arg)?;
    let mut hedge_books: HashSet<String> = HashSet::new();
    for name in books_arg.split(',') {
        hedge_books.insert(resolve_book(name)?.to_string());
    }

    let stake = args.stake.unwrap_or(config.bonus_stake);
    let min_efficiency = args.min_eff.unwrap_or(config.min_efficiency);
    if stake <= Decimal::ZERO {
        return Err(anyhow::anyhow!("--stake must be positive"));
    }

    // The bonus book counts toward region routing even when it is not a
    // hedge candidate.
    let mut all_books: Vec<&str> = hedge_books.iter().map(String::as_str).collect();
    all_books.push(bonus_book);
    let regions = regions_needed(all_books);
    info!(bonus_book, ?regions, "resolved books and regions");

    let client = OddsApiClient::new(&config)?;
    let mut batches = Vec::new();
    for sport in args.sports.split(',') {
        let key = sport_key(sport)?;
        for &region in &regions {
            match client.fetch_events(key, region).await {
                Ok(events) => batches.push(events),
                Err(e) => {
                    warn!(sport = key, %region, error = %e, "fetch failed");
                    return Err(e.into());
                }
            }
        }
    }

    let events = merge_events(batches);
    info!(events = events.len(), "scanning");

    let report = scan(&events, bonus_book, &hedge_books, stake, min_efficiency);
    present(&report, args.all);
    Ok(())
}

/// Render scan results in the fixed presentation format.
fn present(report: &ScanReport, all: bool) {
    for skip in &report.skipped {
        warn!(%skip, "candidate skipped");
    }

    if report.opportunities.is_empty() {
        println!("No valid bonus hedge found.");
        return;
    }

    if all {
        for (i, opp) in report.opportunities.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{opp}");
        }
    } else if let Some(best) = report.best() {
        println!("{best}");
    }
}
