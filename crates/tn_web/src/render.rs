//! HTML pages for the list and detail views.

use tn_core::Article;

pub const STYLESHEET: &str = "/static/style.css";
pub const NO_NEWS: &str = "No tech news found at the moment. Please try again later!";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn article_path(id: &str) -> String {
    format!("/article/{}", id)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>{}</title>\n    <link rel=\"stylesheet\" href=\"{}\">\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        STYLESHEET,
        body
    )
}

pub fn list_page(articles: &[Article]) -> String {
    if articles.is_empty() {
        return page(
            "Tech News",
            &format!("    <h1>📰 Latest Tech News</h1>\n    <p>{}</p>\n", NO_NEWS),
        );
    }

    let mut body = String::from("    <h1>📰 Latest Tech News</h1>\n    <div class=\"news-list\">\n");
    for article in articles {
        body.push_str(&format!(
            "        <div class=\"news-item\"><a href=\"{}\">{}</a> <span class=\"category\">{}</span></div>\n",
            escape(&article_path(&article.id)),
            escape(&article.title),
            escape(&article.category),
        ));
    }
    body.push_str("    </div>\n");
    page("Latest Tech News", &body)
}

pub fn detail_page(article: &Article, summary: &str) -> String {
    let body = format!(
        concat!(
            "    <h1>📄 {title}</h1>\n",
            "    <p class=\"nav-link\"><a href=\"/\">Back to All News</a></p>\n",
            "    <div class=\"card\">\n",
            "        <div class=\"summary\">{summary}</div>\n",
            "        <div class=\"source\">Source: {source}</div>\n",
            "        <div class=\"category\">Category: {category}</div>\n",
            "        <div class=\"original-link\"><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">Read Original Article</a></div>\n",
            "    </div>\n",
        ),
        title = escape(&article.title),
        summary = escape(summary),
        source = escape(&article.source),
        category = escape(&article.category),
        url = escape(&article.url),
    );
    page(&format!("{} - Summarized News", article.title), &body)
}

pub fn not_found_page() -> String {
    page(
        "Not Found",
        "    <h1>Not Found</h1>\n    <p>The requested article is not available. It may have dropped out of the latest headlines.</p>\n    <p class=\"nav-link\"><a href=\"/\">Back to All News</a></p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            id: "abcdef0123".to_string(),
            title: title.to_string(),
            url: "https://x.com/a?b=1&c=2".to_string(),
            content: "body".to_string(),
            source: "The Verge".to_string(),
            category: "technology".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_empty_list_page() {
        let html = list_page(&[]);
        assert!(html.contains(NO_NEWS));
        assert!(!html.contains("news-list"));
    }

    #[test]
    fn test_list_page_links_by_id() {
        let html = list_page(&[article("iPhone <16>")]);
        assert!(html.contains("href=\"/article/abcdef0123\""));
        assert!(html.contains("iPhone &lt;16&gt;"));
        assert!(html.contains(STYLESHEET));
    }

    #[test]
    fn test_list_page_one_row_per_article() {
        let mut second = article("Steam Deck");
        second.id = "9876543210".to_string();
        let html = list_page(&[article("iPhone"), second]);
        let rows: Vec<&str> = html.lines().filter(|l| l.contains("news-item")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("/article/abcdef0123") && rows[0].ends_with("</div>"));
        assert!(rows[1].contains("/article/9876543210") && rows[1].ends_with("</div>"));
    }

    #[test]
    fn test_detail_page() {
        let html = detail_page(&article("Title"), "Short summary.");
        assert!(html.contains("<title>Title - Summarized News</title>"));
        assert!(html.contains("Short summary."));
        assert!(html.contains("Source: The Verge"));
        assert!(html.contains("href=\"https://x.com/a?b=1&amp;c=2\" target=\"_blank\""));
        assert!(html.contains("href=\"/\""));
    }
}
