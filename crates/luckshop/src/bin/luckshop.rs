//! # LUCKSHOP CLI
//!
//! Roll for luck and see what the vendor has in stock.
//!
//! ```bash
//! # Roll a d20 with a +3 bonus
//! luckshop --catalog data/catalog.toml roll +3
//!
//! # Stock the shop for a fixed luck total, as JSON
//! luckshop --json generate 14
//!
//! # How often does 17 luck find a basket with this policy?
//! luckshop --policy data/policy.toml simulate 17 -n 100000
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, or `--verbose` for debug), reports to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luckshop::economy::{entropy_rng, seeded_rng, ShopRng};
use luckshop::report::{render_inventory, render_statistics};
use luckshop::{parse_bonus, ShopSetup, StockReport};

#[derive(Parser)]
#[command(name = "luckshop")]
#[command(about = "Luck-driven shop inventory for tabletop games")]
struct Cli {
    /// Catalog file (.toml or .json)
    #[arg(
        short,
        long,
        global = true,
        env = "LUCKSHOP_CATALOG",
        default_value = "data/catalog.toml"
    )]
    catalog: PathBuf,

    /// Policy file (.toml); the reference policy when omitted
    #[arg(short, long, global = true, env = "LUCKSHOP_POLICY")]
    policy: Option<PathBuf>,

    /// Seed for reproducible rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Roll a d20, add the bonus, and stock the shop
    Roll {
        /// Luck bonus; anything that is not a whole number counts as 0
        #[arg(default_value = "0", allow_hyphen_values = true)]
        bonus: String,
    },

    /// Stock the shop for a fixed luck total
    Generate {
        /// Luck total
        luck: u32,
    },

    /// Show the catalog's cost buckets
    Inspect,

    /// Stock the shop many times for one luck total and report the odds
    Simulate {
        /// Luck total
        luck: u32,

        /// Number of runs
        #[arg(short = 'n', long, default_value_t = 10_000)]
        iterations: u32,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn make_rng(seed: Option<u64>) -> ShopRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "seeded rng");
            seeded_rng(seed)
        }
        None => entropy_rng(),
    }
}

fn print_report(report: &StockReport<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json().context("rendering report")?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let setup = ShopSetup::load(&cli.catalog, cli.policy.as_deref())
        .with_context(|| format!("loading shop from {}", cli.catalog.display()))?;
    let shop = setup.shop().context("opening shop")?;
    tracing::debug!(policy = ?shop.policy(), "shop open");
    let mut rng = make_rng(cli.seed);

    match cli.command {
        Command::Roll { bonus } => {
            let (roll, stock) = shop.roll(parse_bonus(&bonus), &mut rng);
            print_report(&StockReport::new(Some(roll), &stock), cli.json)?;
        }
        Command::Generate { luck } => {
            let stock = shop.generate_basket(luck, &mut rng);
            print_report(&StockReport::new(None, &stock), cli.json)?;
        }
        Command::Inspect => {
            if cli.json {
                let catalog = shop.catalog();
                let buckets: std::collections::BTreeMap<u32, usize> = catalog
                    .costs()
                    .map(|cost| (cost, catalog.bucket_len(cost)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&buckets)?);
            } else {
                print!("{}", render_inventory(shop.catalog()));
            }
        }
        Command::Simulate { luck, iterations } => {
            let stats = shop.run_statistics(luck, iterations, &mut rng);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_statistics(&stats));
            }
        }
    }

    Ok(())
}
