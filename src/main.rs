use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cmd;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            fmt::layer().with_writer(std::io::stderr).with_filter(
                EnvFilter::from_default_env().add_directive("bluealliance=info".parse()?),
            ),
        )
        .init();

    cmd::Cli::parse().run().await
}
