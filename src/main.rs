use std::{path::Path, process::ExitCode};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, error::LocksmithError};

mod config;
mod error;
mod export;
mod random;

/// Number of keys generated per run.
const KEY_COUNT: usize = 100_000;

fn run(config: &Config) -> Result<(), LocksmithError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("Generating {} keys", format_count(KEY_COUNT));
    let keys = random::generate_collection(&mut rng, KEY_COUNT);
    debug!("Generated {} keys", keys.len());
    export::export(&keys, &config.output_path)?;
    info!("{}", confirmation_message(keys.len(), &config.output_path));
    Ok(())
}

/// Formats `count` with `,` as thousands separator, e.g. `100,000`.
fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

fn confirmation_message(count: usize, path: &Path) -> String {
    format!(
        "{} keys generated and saved to '{}'",
        format_count(count),
        path.display()
    )
}

fn main() -> ExitCode {
    let config = match Config::read_from_file() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    debug!("Using config: {config:?}");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error while generating keys: {err}");
            ExitCode::FAILURE
        }
    }
}
