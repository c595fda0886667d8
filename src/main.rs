use clap::Parser;
use roster::commands::Cli;
use roster::libs::messages::macros::{enable_debug_mode, is_debug_mode};
use roster::libs::messages::Message;
use roster::libs::prompt::is_interrupted;
use roster::msg_error;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // A missing .env file is not an error.
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    if cli.debug {
        enable_debug_mode();
    }
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=debug"));
        tracing_subscriber::registry().with(fmt::layer()).with(filter).init();
    }

    match cli.run() {
        Ok(()) => process::exit(0),
        Err(error) if is_interrupted(&error) => process::exit(130),
        Err(error) => {
            msg_error!(Message::StartupFailed(format!("{:#}", error)));
            process::exit(1);
        }
    }
}
