use anyhow::{Context, Result};
use navbar_i18n::config::Config;
use navbar_i18n::i18n::{FilePreferenceStore, LocaleSource};
use navbar_i18n::page::Page;
use navbar_i18n::session::{Command, PageSession, Reply};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("navbar_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let page_json = tokio::fs::read_to_string(&config.page_file)
        .await
        .with_context(|| format!("Failed to read page file {}", config.page_file))?;
    let page = Page::from_json(&page_json)
        .with_context(|| format!("Failed to parse page file {}", config.page_file))?;

    info!(
        "Loaded page {} with {} elements",
        config.page_file,
        page.elements.len()
    );

    let store = FilePreferenceStore::new(&config.preferences_file);
    info!("Preferences stored in {}", store.path().display());

    let session = PageSession::new(
        page,
        LocaleSource::from_base(&config.locale_base_url),
        store,
        config.browser_language.as_deref(),
    );
    session.load().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match session.execute(command).await {
            Ok(Reply::Print(output)) => println!("{}", output),
            Ok(Reply::Quit) => break,
            Err(e) => warn!("{}", e),
        }
    }

    let report = session.language_manager().metrics().report();
    info!(
        "Translation metrics: {} cache hits, {} misses, {} fetch failures, {} elements translated",
        report.cache_hits, report.cache_misses, report.fetch_failures, report.elements_translated
    );
    Ok(())
}
