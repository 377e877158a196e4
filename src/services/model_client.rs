use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

// Sent as a header so the key never appears in a request URL or its errors.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("provider returned no text")]
    EmptyResponse,
}

/// Single-call text generation primitive. Implementations own transport,
/// auth and any retry policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Joined text parts of the first candidate.
    fn into_text(self) -> Result<String, ModelError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ModelError::EmptyResponse);
        }
        Ok(text)
    }
}

impl GeminiClient {
    pub fn new(
        client: Client,
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn invoke(&self, prompt: &str) -> Result<String, ModelError> {
        let payload = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let res = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ModelError::Provider { status, body });
        }

        let body: GenerateResponse = res.json().await?;
        body.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode, Uri},
        response::{IntoResponse, Json},
        Router,
    };
    use tokio::net::TcpListener;

    const KEY: &str = "SECRET-KEY-123";

    fn client_for(base_url: &str) -> GeminiClient {
        GeminiClient::new(
            Client::new(),
            KEY.into(),
            "gemini-1.5-flash".into(),
            base_url.into(),
            Duration::from_secs(5),
        )
    }

    async fn serve_stub(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn parse(raw: &str) -> GenerateResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn endpoint_includes_model_and_ignores_trailing_slash() {
        let client = client_for("https://example.test/");
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let body = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"[1,"},{"inlineData":{}},{"text":"2]"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        );
        assert_eq!(body.into_text().unwrap(), "[1,2]");
    }

    #[test]
    fn missing_or_blank_text_is_empty_response() {
        for raw in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{"finishReason":"SAFETY"}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#,
        ] {
            assert!(
                matches!(parse(raw).into_text(), Err(ModelError::EmptyResponse)),
                "{raw}"
            );
        }
    }

    #[tokio::test]
    async fn invoke_sends_key_as_header_and_returns_text() {
        let app = Router::new().fallback(|headers: HeaderMap, uri: Uri| async move {
            let keyed = headers
                .get(API_KEY_HEADER)
                .is_some_and(|v| v.as_bytes() == KEY.as_bytes());
            if !keyed || uri.query().is_some() {
                return StatusCode::UNAUTHORIZED.into_response();
            }
            Json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "[]"}]}}]
            }))
            .into_response()
        });
        let base = serve_stub(app).await;

        assert_eq!(client_for(&base).invoke("hi").await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn invoke_maps_non_success_status_to_provider_error() {
        let app = Router::new()
            .fallback(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exhausted") });
        let base = serve_stub(app).await;

        match client_for(&base).invoke("hi").await {
            Err(ModelError::Provider { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exhausted");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn invoke_maps_empty_candidates_to_empty_response() {
        let app = Router::new()
            .fallback(|| async { Json(serde_json::json!({ "candidates": [] })) });
        let base = serve_stub(app).await;

        assert!(matches!(
            client_for(&base).invoke("hi").await,
            Err(ModelError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn transport_errors_do_not_expose_api_key() {
        let err = client_for("http://127.0.0.1:1")
            .invoke("hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Transport(_)));
        assert!(!err.to_string().contains(KEY), "{}", err);
        assert!(!format!("{:?}", err).contains(KEY));
    }
}
