use qa_bot::{config, logging};

fn main() {
    let dotenv = config::load_env();
    logging::init("info");
    match dotenv {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "loaded .env"),
        Ok(None) => tracing::debug!("no .env file found"),
        Err(err) => tracing::warn!("failed to read .env: {err}"),
    }

    dioxus::launch(qa_bot::ui::App);
}
