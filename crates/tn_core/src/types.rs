use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::category::normalize_category;

/// Number of hex characters kept from the digest when deriving an article id.
pub const ARTICLE_ID_LEN: usize = 10;

/// Derives the stable identifier of an article from its title and url.
///
/// The same pair always yields the same id, so a detail page link keeps
/// working across refreshes for as long as the article is still served
/// upstream. Collisions are not handled.
pub fn article_id(title: &str, url: &str) -> String {
    let digest = Sha256::digest(format!("{}-{}", title, url).as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(ARTICLE_ID_LEN);
    id
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceRef {
    pub name: String,
}

/// A news item as produced by a [`crate::NewsSource`], before it is keyed
/// and stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FetchedArticle {
    pub title: String,
    pub url: String,
    pub description: String,
    pub content: String,
    pub source: SourceRef,
    pub category: String,
    pub image: Option<String>,
}

/// An article as held by the cache and rendered by the web layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub content: String,
    pub source: String,
    pub category: String,
}

impl Article {
    pub fn from_fetched(fetched: FetchedArticle) -> Self {
        // The id hashes the raw fields, before any placeholder is applied.
        let id = article_id(&fetched.title, &fetched.url);

        let content = if !fetched.content.is_empty() {
            fetched.content
        } else {
            fetched.description
        };

        Self {
            id,
            title: non_empty_or(fetched.title, "No title"),
            url: non_empty_or(fetched.url, "#"),
            content,
            source: non_empty_or(fetched.source.name, "Unknown Source"),
            category: normalize_category(non_empty_or(fetched.category, "General").as_str()),
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(title: &str, url: &str) -> FetchedArticle {
        FetchedArticle {
            title: title.to_string(),
            url: url.to_string(),
            description: "A short description".to_string(),
            content: "The full body".to_string(),
            source: SourceRef { name: "The Verge".to_string() },
            category: "technology".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_article_id_is_deterministic() {
        let a = article_id("iPhone 16 launches", "https://x.com/a");
        let b = article_id("iPhone 16 launches", "https://x.com/a");
        assert_eq!(a, b);
        assert_eq!(a.len(), ARTICLE_ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_article_id_changes_with_url() {
        let a = article_id("iPhone 16 launches", "https://x.com/a");
        let b = article_id("iPhone 16 launches", "https://x.com/b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_article_id_known_value() {
        assert_eq!(article_id("iPhone 16 launches", "https://x.com/a"), "93e28d1e6e");
        assert_eq!(article_id("", ""), "3973e022e9");
    }

    #[test]
    fn test_from_fetched_keeps_fields() {
        let article = Article::from_fetched(fetched("Title", "https://x.com/a"));
        assert_eq!(article.id, article_id("Title", "https://x.com/a"));
        assert_eq!(article.content, "The full body");
        assert_eq!(article.source, "The Verge");
        assert_eq!(article.category, "technology");
    }

    #[test]
    fn test_from_fetched_falls_back_to_description() {
        let mut raw = fetched("Title", "https://x.com/a");
        raw.content.clear();
        let article = Article::from_fetched(raw);
        assert_eq!(article.content, "A short description");
    }

    #[test]
    fn test_from_fetched_defaults() {
        let article = Article::from_fetched(FetchedArticle::default());
        assert_eq!(article.title, "No title");
        assert_eq!(article.url, "#");
        assert_eq!(article.content, "");
        assert_eq!(article.source, "Unknown Source");
        assert_eq!(article.category, "general");
        assert_eq!(article.id, article_id("", ""));
    }
}
