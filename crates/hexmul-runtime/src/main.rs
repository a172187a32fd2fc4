//! # Hexmul Runtime
//!
//! Unix-filter entry point for the fork/join hex multiplier.
//!
//! Reads two equal-length hex numbers, one per line, from stdin; writes
//! their product followed by a newline to stdout. On any failure no result
//! line is emitted and the diagnostic goes to stderr.
//!
//! ## Configuration
//!
//! - `HEXMUL_MAX_OPERAND_LEN` - override the maximum operand length
//! - `HEXMUL_LOG` - log level (`error`, `warn`, `info`, `debug`, `trace`)

use anyhow::{bail, Context, Result};
use std::io;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hexmul::adapters::stdio;
use hexmul::adapters::task_pool::TaskWorkerPool;
use hexmul::{HexMultiplyApi, MultiplierConfig, MultiplierService};

/// Load configuration, with environment overrides.
fn load_config() -> MultiplierConfig {
    let mut config = MultiplierConfig::default();

    if let Ok(max) = std::env::var("HEXMUL_MAX_OPERAND_LEN") {
        if let Ok(max) = max.parse() {
            config.max_operand_len = max;
        }
    }

    config
}

fn log_level() -> Level {
    std::env::var("HEXMUL_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Level::WARN)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. Diagnostics go to stderr; stdout carries only the
    // result line.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // The program takes no arguments; both operands arrive on stdin.
    if std::env::args().len() > 1 {
        bail!("usage: hexmul  (reads two hex lines from stdin)");
    }

    let config = load_config();

    let pair = stdio::read_operand_pair(io::stdin().lock()).context("reading operands")?;

    let service = MultiplierService::with_config(TaskWorkerPool::new(), config);
    let product = service
        .multiply(pair)
        .await
        .context("multiplication failed")?;

    stdio::write_product(io::stdout().lock(), &product).context("writing result")?;

    Ok(())
}
