//! mailprobe - send a self-addressed test email via Microsoft Graph

use mailprobe_cli::config::Config;
use mailprobe_cli::{run, Endpoints};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("mailprobe_auth=debug".parse().unwrap())
                .add_directive("mailprobe_graph=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting mailprobe");

    let config = Config::from_env();

    match run(&config, &Endpoints::default()).await {
        Ok(()) => println!("Email sent successfully."),
        Err(e) => println!("Error sending email: {e:#}"),
    }
}
