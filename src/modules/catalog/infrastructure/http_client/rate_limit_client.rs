//! HTTP client with rate limiting and retry logic for the TMDB API

use super::retry_policy::{is_retryable_error, is_retryable_status, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "cinedex/0.1";

/// Error body returned by TMDB on failed requests
#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    status_message: Option<String>,
}

/// HTTP client that handles rate limiting and retries
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    user_agent: String,
    provider_name: String,
}

impl RateLimitClient {
    /// Create a new client for the TMDB API
    pub fn for_tmdb() -> Self {
        Self::new(
            "TMDB",
            RetryPolicy::tmdb(),
            // TMDB: ~40 req/sec per IP; stay well below with 10 req/sec and a burst of 20
            Self::create_rate_limiter(10.0, 20),
            USER_AGENT.to_string(),
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        // Convert rate to duration between requests
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(u64::from(u32::MAX))
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Create a custom client
    pub fn new(
        provider_name: &str,
        retry_policy: RetryPolicy,
        rate_limiter: DirectRateLimiter,
        user_agent: String,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap_or_else(|_| Client::new()),
            rate_limiter,
            retry_policy,
            user_agent,
            provider_name: provider_name.to_string(),
        }
    }

    /// Make a GET request with rate limiting and retries
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request_with_retries(Method::GET, url, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T>(&self, url: &str, body: &Value) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request_with_retries(Method::POST, url, Some(body)).await
    }

    async fn request_with_retries<T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let attempts = self.retry_policy.max_retries + 1;
        let mut attempt = 0;

        loop {
            // Wait for rate limiter before attempting request
            self.rate_limiter.until_ready().await;

            let can_retry = attempt < self.retry_policy.max_retries;

            match self.build_and_send_request(&method, url, body).await {
                Ok(response) if response.status().is_success() => {
                    return self.parse_response(response).await;
                }
                Ok(response) => {
                    let status = response.status();

                    if can_retry && is_retryable_status(status.as_u16()) {
                        let info = RateLimitInfo::from_headers(response.headers());
                        let delay = self.calculate_retry_delay(attempt, &info);
                        log::warn!(
                            "{} API returned {} (attempt {}/{}). Retrying in {:?}",
                            self.provider_name,
                            status,
                            attempt + 1,
                            attempts,
                            delay
                        );
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(self.status_error(status, &body, attempt + 1));
                }
                Err(e) => {
                    if can_retry && is_retryable_error(&e) {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} API request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.provider_name,
                            attempt + 1,
                            attempts,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(AppError::from(e));
                }
            }
        }
    }

    async fn build_and_send_request(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, reqwest::Error> {
        let mut request_builder = self
            .client
            .request(method.clone(), url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        request_builder.send().await
    }

    /// Turn a non-success status into the matching error kind
    fn status_error(&self, status: StatusCode, body: &str, attempts: u32) -> AppError {
        let detail = serde_json::from_str::<TmdbErrorBody>(body)
            .ok()
            .and_then(|b| {
                b.status_message
                    .map(|m| match b.status_code {
                        Some(code) => format!("{} (code {})", m, code),
                        None => m,
                    })
            })
            .unwrap_or_else(|| status.to_string());

        match status.as_u16() {
            401 | 403 => AppError::Unauthorized(format!("{}: {}", self.provider_name, detail)),
            404 => AppError::NotFound(format!("{}: {}", self.provider_name, detail)),
            429 => AppError::RateLimitError(format!(
                "{} API rate limit exceeded after {} attempts",
                self.provider_name, attempts
            )),
            _ => AppError::ApiError(format!(
                "{} API returned error {}: {}",
                self.provider_name, status, detail
            )),
        }
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        Self::decode(&self.provider_name, &response_text)
    }

    /// Decode a JSON body, keeping a short excerpt of it in the error
    pub(crate) fn decode<T>(provider_name: &str, text: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(text).map_err(|e| {
            let excerpt: String = text.chars().take(200).collect();
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                provider_name, e, excerpt
            ))
        })
    }

    /// Calculate delay for retry based on rate limit info and policy
    fn calculate_retry_delay(&self, attempt: u32, rate_limit_info: &RateLimitInfo) -> Duration {
        self.retry_policy
            .calculate_delay(attempt, rate_limit_info.recommended_delay())
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
