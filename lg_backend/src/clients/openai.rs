use crate::error::{Error, Result};
use lg_core::server::default_config::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::error;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

/// Thin client over an OpenAI-compatible chat-completion endpoint.
///
/// One request in, one trimmed completion text out. No retry and no
/// backoff: a provider failure surfaces as an error on this single call.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        CompletionClient {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Reads credential and endpoint configuration from the environment.
    /// A missing API key is logged but does not prevent startup; requests
    /// will then fail at the provider.
    pub fn from_env() -> Self {
        let api_key = env::var(OPENAI_API_KEY_ENV).unwrap_or_else(|_| {
            error!("{OPENAI_API_KEY_ENV} not found in environment variables.");
            String::new()
        });
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or(String::from(DEFAULT_OPENAI_BASE_URL));
        let model = env::var("OPENAI_MODEL").unwrap_or(String::from(DEFAULT_OPENAI_MODEL));

        Self::new(&base_url, &api_key, &model)
    }

    /// Issues a single chat-completion call and returns the first choice's
    /// content, trimmed.
    pub async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let completion = response.json::<ChatCompletionResponse>().await?;
        let Some(choice) = completion.choices.into_iter().next() else {
            return Err(Error::NoCompletionChoices);
        };

        Ok(choice.message.content.trim().to_string())
    }
}
