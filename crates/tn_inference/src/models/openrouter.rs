use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tn_core::{Error, InferenceModel, Result};

use crate::Config;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat completions through the OpenRouter API.
pub struct OpenRouterModel {
    client: Arc<Client>,
    config: Config,
}

impl OpenRouterModel {
    pub fn new(config: Config) -> Self {
        Self {
            client: Arc::new(Client::new()),
            config,
        }
    }
}

impl fmt::Debug for OpenRouterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.config.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.config.model_name)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

#[async_trait]
impl InferenceModel for OpenRouterModel {
    fn name(&self) -> &str {
        &self.config.model_name
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model_name,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
        };

        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url.trim_end_matches('/')))
            .header("HTTP-Referer", self.config.referer.as_str())
            .header("X-Title", self.config.app_title.as_str())
            .json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::UnexpectedResponse("completion has no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn model_for(server: &Server, api_key: Option<&str>) -> OpenRouterModel {
        OpenRouterModel::new(Config {
            api_key: api_key.map(str::to_string),
            base_url: server.url(),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn test_complete_sends_chat_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_header("http-referer", "http://localhost")
            .match_header("x-title", "Tech News Summarizer App")
            .match_body(Matcher::PartialJson(json!({
                "model": crate::DEFAULT_MODEL_NAME,
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "some article" }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  A summary.\n"}}]}"#)
            .create_async()
            .await;

        let text = model_for(&server, Some("test-key"))
            .complete("be brief", "some article")
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(text, "A summary.");
    }

    #[tokio::test]
    async fn test_complete_status_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"No auth credentials found"}}"#)
            .create_async()
            .await;

        let err = model_for(&server, None).complete("s", "u").await.unwrap_err();
        assert!(err.is_http_status());
    }

    #[tokio::test]
    async fn test_complete_without_choices() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = model_for(&server, Some("k")).complete("s", "u").await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
        assert!(!err.is_http_status());
    }
}
