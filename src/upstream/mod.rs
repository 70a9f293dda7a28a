pub mod retry;
pub mod transport;

use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::UpstreamConfig,
    error::GeneratorError,
    models::{GenerationRequest, GenerationResult},
};

pub use retry::{retry_transport, retry_transport_with_sleep, RetryPolicy};
pub use transport::{HttpTransport, UpstreamResponse, UpstreamTransport};

/// Number of body characters quoted back in an HTTP error detail.
const BODY_CONTEXT_CHARS: usize = 200;

/// Client for the guest account generation service.
///
/// Stateless across calls: each generation pass runs its own timeout and
/// retry budget, so any number of passes may be in flight concurrently.
#[derive(Clone)]
pub struct GuestClient {
    transport: Arc<dyn UpstreamTransport>,
    config: UpstreamConfig,
}

impl GuestClient {
    /// Builds a client over the real HTTP transport.
    pub fn new(config: UpstreamConfig) -> crate::error::Result<Self> {
        let transport = Arc::new(HttpTransport::new(config.timeout)?);
        Ok(Self { transport, config })
    }

    /// Builds a client over a caller-supplied transport, which is how the
    /// retry and classification paths are exercised without a network.
    pub fn with_transport(config: UpstreamConfig, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self { transport, config }
    }

    /// One full generation pass: request construction, bounded retry on
    /// transport failures, then status and body classification.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let url = self.config.endpoint();
        let query = [
            ("name", request.name_prefix.clone()),
            ("count", request.count.to_string()),
            ("region", request.region.as_str().to_string()),
        ];

        log::info!(
            "Requesting {} account(s) for region {} from {}",
            request.count,
            request.region,
            url
        );

        let policy = self.config.retry_policy();
        let response =
            retry::retry_transport(&policy, || self.transport.fetch(&url, &query)).await?;

        if !response.is_success() {
            log::warn!("Upstream answered HTTP {} for {}", response.status, url);
            let snippet: String = response.body.chars().take(BODY_CONTEXT_CHARS).collect();
            return Err(GeneratorError::UpstreamStatus(format!(
                "HTTP {} from {}: {}",
                response.status, url, snippet
            )));
        }

        serde_json::from_str::<Value>(&response.body).map_err(|e| {
            log::warn!("Upstream body is not valid JSON: {}", e);
            GeneratorError::InvalidResponse(e.to_string())
        })
    }
}

/// Turns an outcome into the text the rendering layer displays: the payload
/// pretty-printed with stable key order, or the user-facing error line.
pub fn render_outcome(outcome: &GenerationResult) -> String {
    match outcome {
        Ok(payload) => {
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
        }
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::Region;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays a scripted sequence of exchanges and counts the calls.
    struct ScriptedTransport {
        script: Mutex<Vec<Result<UpstreamResponse>>>,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Result<UpstreamResponse>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UpstreamTransport for ScriptedTransport {
        async fn fetch(&self, _url: &str, _query: &[(&str, String)]) -> Result<UpstreamResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script.lock().unwrap().remove(0)
        }
    }

    /// Records the URL and query of every exchange, always answering 200.
    struct CapturingTransport {
        seen: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    #[async_trait]
    impl UpstreamTransport for CapturingTransport {
        async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<UpstreamResponse> {
            let pairs = query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            self.seen.lock().unwrap().push((url.to_string(), pairs));
            Ok(ok_response("{}"))
        }
    }

    fn test_config() -> UpstreamConfig {
        UpstreamConfig::new().with_retries(3, Duration::ZERO)
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            region: Region::Eu,
            name_prefix: "Bob".to_string(),
            count: 3,
        }
    }

    fn ok_response(body: &str) -> UpstreamResponse {
        UpstreamResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    fn network_error() -> Result<UpstreamResponse> {
        Err(GeneratorError::Network("connection refused".into()))
    }

    #[tokio::test]
    async fn recovers_from_transient_transport_failures() {
        let transport = ScriptedTransport::new(vec![
            network_error(),
            network_error(),
            Ok(ok_response(r#"{"accounts":["guest1","guest2","guest3"]}"#)),
        ]);
        let client = GuestClient::with_transport(test_config(), transport.clone());

        let payload = client.generate(&request()).await.ok();

        assert_eq!(transport.calls(), 3);
        assert_eq!(
            payload,
            Some(json!({"accounts": ["guest1", "guest2", "guest3"]}))
        );
    }

    #[tokio::test]
    async fn surfaces_network_error_after_the_budget() {
        let transport =
            ScriptedTransport::new(vec![network_error(), network_error(), network_error()]);
        let client = GuestClient::with_transport(test_config(), transport.clone());

        let outcome = client.generate(&request()).await;

        assert_eq!(transport.calls(), 3);
        assert!(matches!(outcome, Err(GeneratorError::Network(_))));
    }

    #[tokio::test]
    async fn http_error_status_is_terminal() {
        let transport = ScriptedTransport::new(vec![Ok(UpstreamResponse {
            status: 500,
            body: "internal failure".to_string(),
        })]);
        let client = GuestClient::with_transport(test_config(), transport.clone());

        let outcome = client.generate(&request()).await;

        assert_eq!(transport.calls(), 1);
        match outcome {
            Err(GeneratorError::UpstreamStatus(detail)) => {
                assert!(detail.contains("HTTP 500"));
                assert!(detail.contains("internal failure"));
            }
            other => panic!("expected an upstream status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_terminal() {
        let transport = ScriptedTransport::new(vec![Ok(ok_response("<html>maintenance</html>"))]);
        let client = GuestClient::with_transport(test_config(), transport.clone());

        let outcome = client.generate(&request()).await;

        assert_eq!(transport.calls(), 1);
        assert!(matches!(outcome, Err(GeneratorError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn sends_the_documented_query_parameters() {
        let transport = Arc::new(CapturingTransport {
            seen: Mutex::new(Vec::new()),
        });
        let client = GuestClient::with_transport(test_config(), transport.clone());

        client.generate(&request()).await.ok();

        let seen = transport.seen.lock().unwrap();
        let (url, query) = &seen[0];
        assert!(url.ends_with("/gen"));
        assert_eq!(
            query,
            &vec![
                ("name".to_string(), "Bob".to_string()),
                ("count".to_string(), "3".to_string()),
                ("region".to_string(), "EU".to_string()),
            ]
        );
    }

    #[test]
    fn successful_outcome_is_pretty_printed() {
        let outcome: GenerationResult = Ok(json!({"region": "EU", "accounts": ["guest1"]}));
        let text = render_outcome(&outcome);

        assert!(text.contains("\"accounts\": [\n"));
        // Keys come out sorted, so the display is stable across calls.
        assert!(text.find("\"accounts\"").unwrap() < text.find("\"region\"").unwrap());
    }

    #[test]
    fn failed_outcome_renders_the_contract_strings() {
        let outcome: GenerationResult = Err(GeneratorError::Network("timed out".into()));
        assert_eq!(render_outcome(&outcome), "⚠️ API Request Error: timed out");

        let outcome: GenerationResult = Err(GeneratorError::InvalidResponse("bad body".into()));
        assert_eq!(render_outcome(&outcome), "⚠️ API Response is not valid JSON.");
    }
}
