//! stockdeck - A terminal stock dashboard.

use stockdeck::{App, Config, Result, SampleData};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockdeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application over the bundled sample data
    let mut app = App::new(config, Box::new(SampleData))?;
    app.run().await?;

    Ok(())
}
