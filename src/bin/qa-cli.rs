use qa_bot::{ai, config, console, logging};
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = config::load_env();
    logging::init("warn");
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "loaded .env"),
        Ok(None) => {}
        Err(err) => tracing::warn!("failed to read .env: {err}"),
    }

    let backend = ai::providers::from_env();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    console::run_console(backend, stdin, stdout).await?;
    Ok(())
}
