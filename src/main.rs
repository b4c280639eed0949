// SPDX-License-Identifier: GPL-3.0-or-later

use dotenvy::var;
use handler_hash::fingerprint;
use std::{env, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// print the token of every function name or `Type::method` string given on
// the command line.
fn main() -> ExitCode {
    let rust_log = var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    let filter = EnvFilter::builder()
        .parse(&rust_log)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let console_logger = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing_subscriber::registry().with(console_logger).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        error!("Usage: handler-hash <function | Type::method>...");
        return ExitCode::FAILURE;
    }

    let mut failed = 0;
    for arg in &args {
        match fingerprint(arg) {
            Ok(token) => println!("{}  {}", token, arg),
            Err(x) => {
                error!("Failed hashing '{}': {}", arg, x);
                failed += 1;
            }
        }
    }
    info!("Hashed {} of {} callable(s)", args.len() - failed, args.len());

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
