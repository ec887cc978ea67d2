use anyhow::{Result, bail};
use core_cms::config::AppConfig;
use core_cms::domain::slug::{SlugQuery, SlugResolver, truncate_chars};
use core_cms::infrastructure::{
    database, repositories::PostgresSlugRepository, util::DefaultSlugGenerator,
};
use std::{env, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints the first free slug for `<text>` in `<table>`'s `slug` column,
/// optionally cut to `[max_length]` characters.
#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut args = env::args().skip(1);
    let (table, text) = match (args.next(), args.next()) {
        (Some(table), Some(text)) => (table, text),
        _ => bail!("usage: available_slug <table> <text> [max_length]"),
    };
    let max_length = args.next().map(|raw| raw.parse::<usize>()).transpose()?;

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;

    let resolver = SlugResolver::new(
        Arc::new(PostgresSlugRepository::new(pool)),
        Arc::new(DefaultSlugGenerator),
    )
    .with_counter_separator(config.slug_counter_separator());

    let query = SlugQuery::new(table, "slug", resolver.slugify(&text));
    let slug = resolver.first_free(query).await?;
    println!("{}", truncate_chars(slug, max_length));
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
