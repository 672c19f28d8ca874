pub mod cli;
pub mod gnews;

pub use cli::{handle_command, FetchArgs};
pub use gnews::{GNewsConfig, GNewsSource};

pub mod prelude {
    pub use super::gnews::{GNewsConfig, GNewsSource};
    pub use tn_core::{Article, FetchedArticle, NewsSource, Result, Error};
}
