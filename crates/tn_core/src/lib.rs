pub mod category;
pub mod clock;
pub mod error;
pub mod models;
pub mod source;
pub mod types;

pub use category::{categorize_news, normalize_category, Category};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use models::InferenceModel;
pub use source::NewsSource;
pub use types::{article_id, Article, FetchedArticle, SourceRef, ARTICLE_ID_LEN};
