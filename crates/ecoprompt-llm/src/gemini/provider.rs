//! Gemini provider implementation

use super::config::{downgrade_model, GeminiConfig, MODELS};
use super::convert::{candidate_text, convert_messages, convert_usage, parse_retry_delay};
use super::security::sanitize_api_error;
use super::types::*;
use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::provider::LlmProvider;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};

/// Same-model retries before downgrading or giving up
const MAX_RETRIES: u32 = 2;

/// Retry hints at or above this many seconds are not waited out
const MAX_RETRY_WAIT_SECS: u64 = 30;

/// Google Gemini provider
pub struct GeminiProvider {
    client: Client,
    pub(crate) config: GeminiConfig,
    /// Last retry-after delay reported by Gemini (seconds)
    last_retry_after: AtomicU64,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            client,
            config,
            last_retry_after: AtomicU64::new(0),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Send request to Gemini API (with retry on 429/5xx + automatic model downgrade)
    ///
    /// Returns `(GeminiResponse, actual_model_used)`; the model may differ from
    /// the requested one if a 429 triggered a downgrade.
    pub(crate) async fn send_request(
        &self,
        model: &str,
        request: GeminiRequest,
    ) -> Result<(GeminiResponse, String)> {
        let mut current_model = model.to_string();

        loop {
            for attempt in 0..=MAX_RETRIES {
                match self.send_request_once(&current_model, &request).await {
                    Ok(resp) => return Ok((resp, current_model)),
                    Err(Error::RateLimit) => {
                        let hint = self.last_retry_after.load(Ordering::Relaxed);
                        if hint >= MAX_RETRY_WAIT_SECS {
                            tracing::warn!(
                                gemini_hint_secs = hint,
                                "Gemini rate limit retry_after too long, giving up"
                            );
                            return Err(Error::RateLimit);
                        }
                        if attempt == MAX_RETRIES {
                            break;
                        }

                        let delay_secs = if hint > 0 {
                            hint
                        } else {
                            2 + u64::from(attempt) * 2
                        };
                        tracing::info!(
                            attempt = attempt + 1,
                            model = %current_model,
                            delay_secs,
                            "Gemini rate limited, retrying same model"
                        );
                        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                    }
                    Err(Error::ServerError(ref msg)) if attempt < MAX_RETRIES => {
                        let delay_secs = 2 + u64::from(attempt) * 3;
                        tracing::warn!(
                            attempt = attempt + 1,
                            model = %current_model,
                            delay_secs,
                            error = %msg,
                            "Gemini server error, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                    }
                    Err(e) => return Err(e),
                }
            }

            match downgrade_model(&current_model) {
                Some(cheaper) => {
                    tracing::warn!(
                        from = %current_model,
                        to = %cheaper,
                        "Gemini rate limited, downgrading model"
                    );
                    current_model = cheaper.to_string();
                }
                None => return Err(Error::RateLimit),
            }
        }
    }

    /// Single attempt to send request to Gemini API
    async fn send_request_once(
        &self,
        model: &str,
        request: &GeminiRequest,
    ) -> Result<GeminiResponse> {
        // SECURITY: Don't log the full URL (contains API key)
        debug!(model, "Sending request to Gemini");

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if status.is_success() {
            self.last_retry_after.store(0, Ordering::Relaxed);
            return serde_json::from_str(&body).map_err(|e| {
                Error::InvalidResponse(format!("{}: {}", e, truncate_body(&body)))
            });
        }

        tracing::warn!(status = %status, "Gemini API error response");

        if let Ok(error) = serde_json::from_str::<GeminiError>(&body) {
            tracing::warn!(
                error_status = %error.error.status,
                error_code = error.error.code,
                "Gemini API error detail"
            );

            if status.as_u16() == 429 {
                self.last_retry_after
                    .store(parse_retry_delay(&error.error), Ordering::Relaxed);
                return Err(Error::RateLimit);
            }

            let message = sanitize_api_error(&format!(
                "{}: {}",
                error.error.status, error.error.message
            ));
            if status.is_server_error() {
                return Err(Error::ServerError(message));
            }
            return Err(Error::Api(message));
        }

        if status.as_u16() == 429 {
            self.last_retry_after.store(0, Ordering::Relaxed);
            return Err(Error::RateLimit);
        }
        if status.is_server_error() {
            return Err(Error::ServerError(sanitize_api_error(&format!(
                "HTTP {}",
                status
            ))));
        }
        // Unstructured bodies are logged at debug level only, never returned
        debug!(body = %truncate_body(&body), "Unrecognized Gemini error body");
        Err(Error::Api(format!("HTTP {}", status)))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            let ms = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
            Error::Timeout(ms)
        } else {
            // SECURITY: reqwest errors embed the URL, which carries the key
            Error::Network(e.without_url().to_string())
        }
    }
}

fn truncate_body(body: &str) -> &str {
    crate::util::truncate_safe(body, 200)
}

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn available_models(&self) -> Vec<String> {
        MODELS.iter().map(|s| (*s).to_string()).collect()
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = if request.model.is_empty() {
            &self.config.default_model
        } else {
            &request.model
        };

        let (system_instruction, contents) = convert_messages(&request.messages);
        if contents.is_empty() {
            return Err(Error::Api("request has no user content".to_string()));
        }

        let gemini_request = GeminiRequest {
            contents,
            system_instruction,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens.or(Some(self.config.default_max_tokens)),
            }),
        };

        let (response, actual_model) = self.send_request(model, gemini_request).await?;

        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| Error::InvalidResponse("No candidates in response".to_string()))?;

        let mut content = candidate_text(candidate);
        if content.is_empty() {
            if candidate.finish_reason.as_deref() == Some("MAX_TOKENS") {
                tracing::warn!("Gemini response empty (MAX_TOKENS)");
            }
            content = "(empty response)".to_string();
        }

        Ok(CompletionResponse {
            content,
            usage: response.usage_metadata.as_ref().map(convert_usage),
            finish_reason: candidate.finish_reason.clone(),
            model: actual_model,
        })
    }
}
