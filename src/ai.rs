//! AI assistant bridge
//!
//! Sends a single chat-completion request asking a language model for help
//! with a regex, and classifies whatever comes back. The call is synchronous
//! and is never retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model identifier sent with every request
pub const DEFAULT_MODEL: &str = "google/gemini-flash-1.5";

/// Token cap for the answer
const MAX_TOKENS: u32 = 500;

/// Sampling temperature
const TEMPERATURE: f32 = 0.5;

/// Instruction placed in front of every question
const PROMPT_PREAMBLE: &str = "Please fulfill the request by providing only the regex code snippet \
unless asked otherwise. Patterns must use the syntax of the Rust `regex` crate: no look-around and \
no backreferences inside the pattern; replacements refer to groups as $1 or ${name}. \
If it involves a regular expression, provide only the regex pattern unless asked otherwise.";

/// Why a question could not be answered
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("API key missing. Please enter your OpenRouter API key.")]
    MissingApiKey,

    #[error("Input missing. Please enter your question for the AI assistant.")]
    MissingQuery,

    #[error("API authentication error: invalid API key or insufficient permissions. {0}")]
    Authentication(String),

    #[error("API connection error: failed to connect to the AI service. {0}")]
    Connection(String),

    #[error("API rate limit error: rate limit exceeded. {0}")]
    RateLimited(String),

    #[error("AI service error: {0}")]
    Service(String),

    #[error("An unexpected error occurred: {0}")]
    Unknown(String),
}

impl AiError {
    /// Whether the input was rejected before any request was made
    pub fn is_validation(&self) -> bool {
        matches!(self, AiError::MissingApiKey | AiError::MissingQuery)
    }
}

/// A successful reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiAnswer {
    /// Trimmed response text
    Text(String),
    /// The service answered but with no content
    Empty,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
    code: Option<serde_json::Value>,
}

/// Check the inputs without touching the network
pub fn validate_input(api_key: &str, query: &str) -> Result<(), AiError> {
    if api_key.trim().is_empty() {
        return Err(AiError::MissingApiKey);
    }
    if query.trim().is_empty() {
        return Err(AiError::MissingQuery);
    }
    Ok(())
}

/// Build the prompt sent for a question
pub fn build_prompt(query: &str) -> String {
    format!("{}\n\nRequest: {}\n\nResponse:", PROMPT_PREAMBLE, query)
}

/// Client for the chat-completion service
pub struct AiClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
}

impl Default for AiClient {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }
}

impl AiClient {
    /// A client talking to `endpoint` instead of the default service
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Ask the model a question; blocks until the service answers
    pub fn ask(&self, api_key: &str, query: &str) -> Result<AiAnswer, AiError> {
        validate_input(api_key, query)?;
        let api_key = api_key.trim();
        let query = query.trim();

        let prompt = build_prompt(query);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let body = serde_json::to_string(&request).map_err(|e| AiError::Unknown(e.to_string()))?;

        log::info!("Sending AI request to {} (model {})", self.endpoint, self.model);
        let response = match self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", api_key))
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                let err = classify(code, error_message(&body));
                log::error!("AI request failed with HTTP {}: {}", code, err);
                return Err(err);
            }
            Err(ureq::Error::Transport(transport)) => {
                log::error!("AI request could not be sent: {}", transport);
                return Err(AiError::Connection(transport.to_string()));
            }
        };

        let text = response
            .into_string()
            .map_err(|e| AiError::Connection(format!("Failed to read response body: {}", e)))?;
        parse_completion(&text)
    }
}

/// Map an HTTP status to an error kind
fn classify(code: u16, message: String) -> AiError {
    match code {
        401 | 403 => AiError::Authentication(message),
        429 => AiError::RateLimited(message),
        _ => AiError::Service(format!("HTTP {}: {}", code, message)),
    }
}

/// Pull the message out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Extract the answer from a 200 response body
fn parse_completion(body: &str) -> Result<AiAnswer, AiError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| AiError::Unknown(format!("Could not decode response: {}", e)))?;

    // Some providers report failures inside a 200 body
    if let Some(error) = response.error {
        let code = error
            .code
            .as_ref()
            .and_then(|code| code.as_u64())
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(500);
        return Err(classify(code, error.message));
    }

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        Ok(AiAnswer::Empty)
    } else {
        Ok(AiAnswer::Text(content))
    }
}
