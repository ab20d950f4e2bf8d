use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xorseek::monitor::utils;
use xorseek::prelude::*;

#[derive(Parser)]
#[command(name = "xorseek", version)]
#[command(about = "Brute-force search for a mnemonic hidden behind an XOR mask")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the search over the embedded puzzle or a JSON config
    Scan {
        /// JSON config file (defaults to the embedded puzzle)
        #[arg(short, long)]
        config: Option<String>,
        /// Worker threads (defaults to the CPU count)
        #[arg(short, long)]
        threads: Option<usize>,
        /// Report progress every N masks
        #[arg(long)]
        progress_interval: Option<u16>,
        /// Single-threaded ascending sweep instead of the parallel driver
        #[arg(long)]
        serial: bool,
        /// Disable the progress bar
        #[arg(long)]
        no_progress_bar: bool,
        /// Wordlist file, one word per line (defaults to the built-in English list)
        #[arg(long)]
        wordlist: Option<String>,
    },
    /// Print the effective configuration as JSON
    ShowConfig {
        /// JSON config file (defaults to the embedded puzzle)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            config,
            threads,
            progress_interval,
            serial,
            no_progress_bar,
            wordlist,
        } => run_scan(
            config,
            threads,
            progress_interval,
            serial,
            no_progress_bar,
            wordlist,
        ),
        Commands::ShowConfig { config } => {
            let config = load_config(config)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<String>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {path}")),
        None => Ok(SearchConfig::embedded()),
    }
}

fn run_scan(
    config_path: Option<String>,
    threads: Option<usize>,
    progress_interval: Option<u16>,
    serial: bool,
    no_progress_bar: bool,
    wordlist_path: Option<String>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(threads) = threads {
        config.num_threads = threads;
    }
    if let Some(interval) = progress_interval {
        config.progress_interval = interval;
    }
    config.validate()?;

    let wordlist = match wordlist_path {
        Some(path) => {
            Wordlist::from_file(&path).with_context(|| format!("failed to load wordlist {path}"))?
        }
        None => Wordlist::english(),
    };

    let mask_count = config.mask_count();
    let window_count = config.window_count();

    println!("Starting XOR mask scan");
    println!("Target address:   {}", config.target_address);
    println!("Mask range:       {}..{}", config.mask_start, config.mask_end);
    println!("Windows per mask: {}", window_count);
    println!(
        "Search space:     {} windows",
        utils::format_number(config.search_space())
    );
    println!(
        "Driver:           {}",
        if serial {
            "serial".to_string()
        } else {
            format!("parallel, {} threads", config.num_threads)
        }
    );

    let monitor = ScanMonitor::new(
        mask_count,
        window_count,
        MonitorConfig {
            show_progress_bar: !no_progress_bar,
        },
    );
    let driver = SearchDriver::new(config, wordlist)?;

    monitor.start();
    let outcome = if serial {
        driver.run_with_observer(|masks| monitor.update_masks(masks))?
    } else {
        driver.run_parallel(|masks| monitor.update_masks(masks))?
    };

    match outcome {
        SearchOutcome::Found(record) => {
            monitor.record_match();
            monitor.finish("match found");
            let verified = driver.verify(&record)?;

            println!();
            println!("MATCH FOUND");
            println!("  XOR mask: {}", record.mask);
            println!("  Offset:   {}", record.offset);
            println!("  Mnemonic: {}", record.phrase);
            println!("  Address:  {}", record.address);
            println!(
                "  Verified: {}",
                if verified {
                    "yes"
                } else {
                    "NO - rederivation mismatch"
                }
            );
        }
        SearchOutcome::Exhausted { windows_examined } => {
            monitor.finish("exhausted");
            println!();
            println!(
                "Scan complete, no match found. {} windows examined.",
                utils::format_number(windows_examined)
            );
        }
    }

    Ok(())
}
