use std::fmt;

/// Normalizes a free-form category label into the `lower_snake` form used in
/// article records, e.g. `"Machine Learning"` becomes `"machine_learning"`.
pub fn normalize_category(label: &str) -> String {
    label.replace(' ', "_").to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ai,
    Gaming,
    NewLaunches,
    OtherTech,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ai => "ai_news",
            Category::Gaming => "gaming_news",
            Category::NewLaunches => "new_launches",
            Category::OtherTech => "other_tech_news",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Ai => &["ai", "artificial intelligence", "machine learning", "neural network"],
            Category::Gaming => &["game", "gaming", "xbox", "playstation", "nintendo", "steam"],
            Category::NewLaunches => &["launch", "release", "unveil", "announce"],
            Category::OtherTech => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets an article by keyword, checking AI, then gaming, then launches.
///
/// Keywords are matched as plain substrings, so `"ai"` also hits words such
/// as `"said"`.
pub fn categorize_news(title: &str, content: &str) -> Category {
    let title = title.to_lowercase();
    let content = content.to_lowercase();

    [Category::Ai, Category::Gaming, Category::NewLaunches]
        .into_iter()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|kw| title.contains(kw) || content.contains(kw))
        })
        .unwrap_or(Category::OtherTech)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("General"), "general");
        assert_eq!(normalize_category("Machine Learning News"), "machine_learning_news");
        assert_eq!(normalize_category("technology"), "technology");
    }

    #[test]
    fn test_categorize_priority() {
        assert_eq!(categorize_news("New AI chip", "xbox"), Category::Ai);
        assert_eq!(categorize_news("Nintendo Switch 2", ""), Category::Gaming);
        assert_eq!(categorize_news("Pixel unveiled", "Google will unveil it"), Category::NewLaunches);
        assert_eq!(categorize_news("Quarterly results", "Revenue up"), Category::OtherTech);
    }

    #[test]
    fn test_categorize_matches_substrings() {
        // "said" contains "ai"
        assert_eq!(categorize_news("Results", "the CEO said"), Category::Ai);
        assert_eq!(Category::Ai.to_string(), "ai_news");
    }
}
