use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tn_cache::{ArticleCache, CacheConfig};
use tn_core::{NewsSource, SystemClock};
use tn_fetch::{FetchArgs, GNewsConfig, GNewsSource};
use tn_inference::Summarizer;
use tn_web::AppState;
use tracing::info;

mod config;
mod duration;
mod logging;

use config::AppConfig;
use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(name = "technews", author, version, about = "Technology headlines with on-demand summaries", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "openrouter", help = "Summarization backend. Available: openrouter (default), dummy")]
    model: String,
    /// Label articles by keyword (ai_news, gaming_news, ...) instead of "technology"
    #[arg(long)]
    keyword_categories: bool,
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the news site
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
        /// How long fetched headlines are reused (e.g. 1h, 30m, 1h15m30s)
        #[arg(long)]
        cache_ttl: Option<HumanDuration>,
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },
    /// Fetch headlines once and print them
    Fetch(FetchArgs),
    /// Summarize one of the current headlines by id
    Summarize { id: String },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cache_ttl: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

fn build_source(config: &AppConfig, keyword_categories: bool) -> Arc<dyn NewsSource> {
    let gnews = GNewsConfig::default().with_api_key(config.gnews_api_key.clone());
    Arc::new(GNewsSource::new(gnews).with_keyword_categories(keyword_categories))
}

fn build_summarizer(config: &AppConfig, provider: &str) -> Result<Arc<Summarizer>> {
    let inference_config = tn_inference::Config {
        provider: provider.to_string(),
        api_key: config.openrouter_api_key.clone(),
        model_name: config.openrouter_model.clone(),
        ..tn_inference::Config::default()
    };
    let model = tn_inference::create_model(Some(inference_config))?;
    info!("🧠 Inference model initialized (using {})", model.name());
    Ok(Arc::new(Summarizer::new(model)))
}

fn build_cache(source: Arc<dyn NewsSource>, ttl: Option<std::time::Duration>) -> Arc<ArticleCache> {
    let mut cache_config = CacheConfig::default();
    if let Some(ttl) = ttl {
        cache_config = cache_config.with_ttl(ttl);
    }
    Arc::new(ArticleCache::new(source, Arc::new(SystemClock), cache_config))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let config = AppConfig::from_env()?;
    if config.gnews_api_key.is_none() {
        tracing::warn!("⚠️ {} is not set. No headlines will be fetched.", config::GNEWS_API_KEY);
    }
    let source = build_source(&config, cli.keyword_categories);

    match cli.command.unwrap_or_default() {
        Commands::Serve { host, port, cache_ttl, static_dir } => {
            let summarizer = build_summarizer(&config, &cli.model)?;
            let cache = build_cache(source, cache_ttl.map(|d| d.0).or(config.cache_ttl));
            info!("🗄️ Article cache ttl is {}s", cache.ttl().as_secs());

            // Warm the cache so the first visitor does not wait on the upstream.
            cache.ensure_fresh().await;

            let app = tn_web::create_app(AppState::new(cache, summarizer), &static_dir);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("🚀 Serving tech news on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Fetch(args) => {
            tn_fetch::handle_command(args, source.as_ref()).await?;
        }
        Commands::Summarize { id } => {
            let summarizer = build_summarizer(&config, &cli.model)?;
            let cache = build_cache(source, config.cache_ttl);
            cache.ensure_fresh().await;

            let Some(article) = cache.get(&id).await else {
                bail!("No article with id {} in the current headlines", id);
            };
            println!("📄 {}", article.title);
            println!("{}", summarizer.summarize(Some(&article.content)).await);
            println!("Source: {} <{}>", article.source, article.url);
        }
    }

    Ok(())
}
