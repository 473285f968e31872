//! Blocking client for the chat completions service
//!
//! One request per consultation, no retries. Every failure is mapped into
//! the crate error taxonomy before it reaches the caller.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::{debug, warn};
use url::Url;

use super::curate;
use super::prompt::{self, Prompt};
use super::types::{ApiErrorResponse, ChatMessage, CompletionRequest, CompletionResponse};
use crate::config::ConsultantConfig;
use crate::core::parfum::CatalogDocument;
use crate::error::{Error, Result, TransportKind};

/// Temperature the comparison task always uses
pub const COMPARISON_TEMPERATURE: f32 = 0.7;

/// Consultation task, which fixes the output budget and temperature policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Recommendation,
    Question,
    Comparison,
}

impl Task {
    pub fn max_tokens(&self) -> u32 {
        match self {
            Task::Recommendation | Task::Comparison => 1500,
            Task::Question => 1200,
        }
    }

    /// `None` means the client's configured default applies
    pub fn pinned_temperature(&self) -> Option<f32> {
        match self {
            Task::Comparison => Some(COMPARISON_TEMPERATURE),
            Task::Recommendation | Task::Question => None,
        }
    }
}

/// AI consultant backed by a chat completions endpoint
#[derive(Debug, Clone)]
pub struct ConsultationClient {
    client: Client,
    api_url: Url,
    api_key: String,
    model: String,
    temperature: f32,
    language: String,
}

impl ConsultationClient {
    /// Create a client from explicit settings. A missing API key is fatal here.
    pub fn new(config: &ConsultantConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("DEEPSEEK_API_KEY is not set".to_string()))?
            .to_string();

        let api_url = Url::parse(&config.api_url)
            .map_err(|e| Error::Config(format!("invalid API URL '{}': {}", config.api_url, e)))?;

        if config.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            language: config.language.clone(),
        })
    }

    /// Suggest 2-3 catalog parfums for the given preferences
    pub fn recommend(&self, preferences: &str, catalog: &CatalogDocument) -> Result<String> {
        let context = curate::recommendation_context(catalog);
        let prompt = prompt::recommendation(&context, preferences, &self.language)?;
        self.complete(Task::Recommendation, prompt)
    }

    /// Answer a free-form fragrance question with the catalog as background
    pub fn answer(&self, question: &str, catalog: &CatalogDocument) -> Result<String> {
        let summary = curate::summary_lines(catalog);
        let prompt = prompt::question(&summary, question, &self.language);
        self.complete(Task::Question, prompt)
    }

    /// Compare two parfums by exact name. Unknown names fail before any request.
    pub fn compare(&self, first: &str, second: &str, catalog: &CatalogDocument) -> Result<String> {
        let (a, b) = curate::comparison_pair(catalog, first, second)?;
        let prompt = prompt::comparison(&a, &b, &self.language);
        self.complete(Task::Comparison, prompt)
    }

    /// Build the request body for a rendered prompt
    pub fn build_request(&self, task: Task, prompt: Prompt) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(prompt.system), ChatMessage::user(prompt.user)],
            max_tokens: task.max_tokens(),
            temperature: task.pinned_temperature().unwrap_or(self.temperature),
            stream: false,
        }
    }

    fn complete(&self, task: Task, prompt: Prompt) -> Result<String> {
        let request = self.build_request(task, prompt);
        debug!(
            ?task,
            url = %self.api_url,
            model = %request.model,
            max_tokens = request.max_tokens,
            "sending completion request"
        );

        let result = self.send(&request);
        if let Err(ref e) = result {
            warn!(?task, error = %e, "completion request failed");
        }
        result
    }

    fn send(&self, request: &CompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(classify_transport)?;

        handle_response(response)
    }
}

fn handle_response(response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_else(|e| {
            warn!(status = status.as_u16(), error = %e, "failed to read error body");
            String::new()
        });
        return Err(Error::Service {
            status: status.as_u16(),
            message: extract_error(&body),
        });
    }

    let body = response.text().map_err(classify_transport)?;
    let parsed: CompletionResponse = serde_json::from_str(&body)
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| Error::MalformedResponse("response has no choices".to_string()))
}

/// Extract the service-provided message from an error body
fn extract_error(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => err
            .error
            .message
            .unwrap_or_else(|| "Unknown error".to_string()),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().chars().take(200).collect(),
    }
}

fn classify_transport(err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        TransportKind::Timeout
    } else if err.is_connect() {
        TransportKind::Connect
    } else {
        TransportKind::Other
    };

    Error::Transport {
        kind,
        message: err.to_string(),
    }
}
