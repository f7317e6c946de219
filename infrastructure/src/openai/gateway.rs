//! OpenAI Oracle Gateway implementation

use super::error::OpenAiError;
use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, error_message};
use async_trait::async_trait;
use delegator_application::{GatewayError, OracleGateway};
use delegator_domain::{Message, Model};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for [`OpenAiOracleGateway`]
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Base URL without the `/v1/...` path, e.g. `https://api.openai.com`.
    pub base_url: String,
    /// Bearer token. Requests are sent unauthenticated when `None`.
    pub api_key: Option<String>,
    /// Per-request timeout, covering connect through body read.
    pub timeout: Duration,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Oracle gateway backed by an OpenAI-compatible chat-completions endpoint
pub struct OpenAiOracleGateway {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiOracleGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/v1/chat/completions",
            settings.base_url.trim_end_matches('/')
        );
        info!("OpenAiOracleGateway initialized ({})", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, model: &Model, messages: &[Message]) -> Result<String, OpenAiError> {
        let body = ChatCompletionRequest::new(model.as_str(), messages);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let text = response.text().await?;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| OpenAiError::Decode(e.to_string()))?;
        parsed.into_first_content()
    }
}

#[async_trait]
impl OracleGateway for OpenAiOracleGateway {
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        debug!(
            "POST {} (model {}, {} messages)",
            self.endpoint,
            model,
            messages.len()
        );
        self.send(model, messages).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(String::from_utf8_lossy(&raw).to_string());
        });

        (format!("http://{}", addr), rx)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn gateway(base_url: String, api_key: Option<&str>) -> OpenAiOracleGateway {
        OpenAiOracleGateway::new(OpenAiSettings {
            base_url,
            api_key: api_key.map(str::to_string),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gw = gateway("https://example.test/".to_string(), None);
        assert_eq!(gw.endpoint(), "https://example.test/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_complete_sends_messages_and_returns_first_choice() {
        let (base_url, request_rx) = serve_once(
            "200 OK",
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"historyExpert"}}]}"#,
        )
        .await;
        let gw = gateway(base_url, Some("sk-test"));

        let reply = gw
            .complete(
                &Model::Gpt4oMini,
                &[Message::system("pick one"), Message::user("User Query: Rome?")],
            )
            .await
            .unwrap();

        assert_eq!(reply, "historyExpert");
        let raw_request = request_rx.await.unwrap();
        assert!(raw_request.starts_with("POST /v1/chat/completions"));
        assert!(
            raw_request
                .to_ascii_lowercase()
                .contains("authorization: bearer sk-test")
        );
        assert!(raw_request.contains(r#""model":"gpt-4o-mini""#));
        assert!(raw_request.contains(r#"{"role":"user","content":"User Query: Rome?"}"#));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_failure() {
        let (base_url, _rx) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )
        .await;
        let gw = gateway(base_url, Some("bad"));

        let err = gw
            .complete(&Model::Gpt4o, &[Message::user("q")])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::AuthenticationFailed("Incorrect API key provided".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let (base_url, _rx) = serve_once("200 OK", r#"{"unexpected": true"#).await;
        let gw = gateway(base_url, None);

        let err = gw
            .complete(&Model::Gpt4o, &[Message::user("q")])
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_reported() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let gw = gateway(format!("http://{}", addr), None);

        let err = gw
            .complete(&Model::Gpt4o, &[Message::user("q")])
            .await
            .unwrap_err();

        assert!(err.is_transient());
    }
}
