use anyhow::Result;
use clap::{Parser, Subcommand};

use installer_version::config;
use installer_version::domain::{self, SelectionPolicy};
use installer_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "installer-version",
    version,
    about = "Parse and order installer version strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse each input and print its canonical form
    Parse {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Compare two versions
    Compare { a: String, b: String },
    /// Print the latest version the configured policy allows
    Latest {
        #[arg(required = true)]
        inputs: Vec<String>,

        #[arg(long, help = "Ignore specifiers and commit builds regardless of config")]
        stable: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Parse { inputs } => {
            let mut all_parsed = true;
            for input in &inputs {
                let version = domain::parse_version(input);
                all_parsed &= version.is_some();
                ui::display_parsed(input, version.as_ref());
            }
            if !all_parsed {
                std::process::exit(1);
            }
        }
        Command::Compare { a, b } => {
            let (Some(left), Some(right)) = (domain::parse_version(&a), domain::parse_version(&b))
            else {
                ui::display_error(&format!("Cannot compare '{}' with '{}'", a, b));
                std::process::exit(1);
            };
            println!("{}", ui::format_comparison(&left, &right));
        }
        Command::Latest { inputs, stable } => {
            let policy = if stable {
                SelectionPolicy::stable_only()
            } else {
                let config = match config::load_config(args.config.as_deref()) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        ui::display_error(&format!("Error loading config: {}", e));
                        std::process::exit(1);
                    }
                };
                SelectionPolicy::from(&config.selection)
            };
            log::debug!("selection policy: {:?}", policy);

            let versions = domain::parse_all(&inputs);
            log::info!("{} of {} inputs are versions", versions.len(), inputs.len());

            match domain::latest_version(&versions, &policy) {
                Some(latest) => println!("{}", latest),
                None => {
                    ui::display_error("No eligible version found");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
