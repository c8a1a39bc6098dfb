/// LLM Client — the single point of entry for completion-service calls.
///
/// ARCHITECTURAL RULE: no other module talks to the completion API directly.
/// The pipeline consumes the `SkillEnricher` trait, never this client's
/// concrete type, so tests substitute a deterministic stub.
///
/// Model: mixtral-8x7b-32768 on the Groq OpenAI-compatible endpoint
/// (hardcoded — do not make configurable to prevent drift).
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all enrichment calls.
pub const MODEL: &str = "mixtral-8x7b-32768";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// External collaborator that proposes additional skills for a resume.
///
/// Injected into `ProfileExtractor` at construction time; failures of any
/// kind trigger the rule-based fallback upstream, never a pipeline error.
#[async_trait]
pub trait SkillEnricher: Send + Sync {
    async fn enrich(&self, instruction: &str, resume_text: &str) -> Result<Vec<String>, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Strict response schema. A response missing any of these fields is an
/// enrichment failure, never a partially-trusted value.
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
    content: String,
}

/// HTTP-backed enricher. No retry or backoff here: a failed call degrades
/// the current pass, and a caller wishing to retry issues a new pass.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Makes a single chat-completion call and returns the message content.
    async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("Enrichment call succeeded ({} chars)", content.len());
        Ok(content)
    }
}

#[async_trait]
impl SkillEnricher for LlmClient {
    async fn enrich(&self, instruction: &str, resume_text: &str) -> Result<Vec<String>, LlmError> {
        let prompt = format!("{instruction}\n\nResume:\n{resume_text}");
        let content = self
            .call(&prompt, crate::extraction::prompts::SKILL_EXTRACT_SYSTEM)
            .await?;

        parse_skill_list(&content)
    }
}

/// Parses the model output as a JSON array of strings. Anything else —
/// objects, mixed types, prose — is a parse failure.
pub(crate) fn parse_skill_list(content: &str) -> Result<Vec<String>, LlmError> {
    let text = strip_json_fences(content);
    let skills: Vec<String> = serde_json::from_str(text)?;
    Ok(skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
