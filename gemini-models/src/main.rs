use gemini_models::{Client, ModelLister};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> gemini_models::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = Client::from_env()?;
    let stdout = std::io::stdout();
    ModelLister::new(client).run(stdout.lock()).await
}
