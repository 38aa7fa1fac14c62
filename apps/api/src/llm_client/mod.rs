/// Generation backend adapter — the single point of entry for all
/// text-completion calls.
///
/// ARCHITECTURAL RULE: no other module may call the completion API directly.
/// Backend trouble never crosses this boundary as an error: the outcome enum
/// is the whole contract, and the caller falls back to template rendering.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod prompts;

use crate::models::employee::EmployeeRequest;
use crate::settings::GenerationPrompts;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// The completion model used for all document generation calls.
pub const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 2000;
/// Low temperature biases toward repeatable phrasing.
const TEMPERATURE: f32 = 0.3;
/// A slow backend is treated the same as a failed one. One attempt, no retries.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "You are an HR document generator. Generate professional, \
    complete documents based on the provided template and employee data.";

/// Outcome of one generation attempt. `Unavailable` (no backend configured)
/// and `Failed` both mean the caller renders deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    Unavailable,
    Failed(String),
}

/// Pluggable text-completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        doc_type: &str,
        employee: &EmployeeRequest,
        template_text: &str,
    ) -> Generation;
}

/// Demo-mode backend: no credential configured, every document falls through
/// to deterministic template rendering.
pub struct NoopGenerator;

#[async_trait]
impl TextGenerator for NoopGenerator {
    async fn generate(&self, _: &str, _: &EmployeeRequest, _: &str) -> Generation {
        Generation::Unavailable
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Chat-completions backend.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    prompts: GenerationPrompts,
    company_name: String,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: String,
        base_url: String,
        prompts: GenerationPrompts,
        company_name: String,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            api_key,
            base_url,
            prompts,
            company_name,
        }
    }

    async fn call(&self, prompt: &str) -> Result<String, String> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("backend returned {status}: {detail}"));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| format!("malformed backend response: {e}"))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| "backend returned no content".to_string())
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        doc_type: &str,
        employee: &EmployeeRequest,
        template_text: &str,
    ) -> Generation {
        let prompt = prompts::build_prompt(
            &self.prompts,
            doc_type,
            employee,
            &self.company_name,
            template_text,
        );
        debug!(
            "requesting {doc_type} generation ({} prompt chars)",
            prompt.len()
        );
        match self.call(&prompt).await {
            Ok(text) => Generation::Text(text),
            Err(reason) => Generation::Failed(reason),
        }
    }
}
