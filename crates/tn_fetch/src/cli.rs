use clap::Args;
use tn_core::{Article, FetchedArticle, NewsSource, Result};

#[derive(Args, Debug, Clone, Default)]
pub struct FetchArgs {
    /// Only show articles in this category (e.g. ai_news)
    #[arg(long)]
    pub category: Option<String>,
    /// Print the article body below each headline
    #[arg(long)]
    pub content: bool,
}

/// Fetches once and prints every headline with the id it would be cached
/// under.
pub async fn handle_command(args: FetchArgs, source: &dyn NewsSource) -> Result<()> {
    let articles = select(source.fetch_articles().await, args.category.as_deref());

    println!("Found {} articles from {}", articles.len(), source.name());
    for article in articles {
        println!("{} [{}] {} - {}", article.id, article.category, article.title, article.url);
        if args.content {
            println!("    {}", article.content);
        }
    }
    Ok(())
}

fn select(fetched: Vec<FetchedArticle>, category: Option<&str>) -> Vec<Article> {
    fetched
        .into_iter()
        .map(Article::from_fetched)
        .filter(|a| category.map_or(true, |c| a.category == c))
        .collect()
}
