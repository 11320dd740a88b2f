//! Callable HTTP server
//!
//! Routes:
//! - `POST /generateQuizAnalysis` runs the quiz analysis use case
//! - `GET /health` answers `ok`

use super::callable::{CallableResponse, caller_identity, parse_request};
use crate::config::EndpointConfig;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::InvalidHeaderName;
use axum::http::{HeaderMap, HeaderName};
use axum::routing::{get, post};
use nakkla_application::{AnalyzeQuizError, AnalyzeQuizInput, AnalyzeQuizUseCase};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

pub const ANALYZE_ROUTE: &str = "/generateQuizAnalysis";
pub const HEALTH_ROUTE: &str = "/health";

struct EndpointState {
    use_case: AnalyzeQuizUseCase,
    identity_header: HeaderName,
}

/// The callable endpoint wrapping one [`AnalyzeQuizUseCase`]
#[derive(Clone)]
pub struct CallableServer {
    state: Arc<EndpointState>,
}

impl CallableServer {
    pub fn new(
        use_case: AnalyzeQuizUseCase,
        config: &EndpointConfig,
    ) -> Result<Self, InvalidHeaderName> {
        let identity_header = HeaderName::try_from(config.identity_header.trim())?;
        Ok(Self {
            state: Arc::new(EndpointState {
                use_case,
                identity_header,
            }),
        })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(ANALYZE_ROUTE, post(generate_quiz_analysis))
            .route(HEALTH_ROUTE, get(health))
            .with_state(Arc::clone(&self.state))
    }
}

async fn generate_quiz_analysis(
    State(state): State<Arc<EndpointState>>,
    headers: HeaderMap,
    body: Bytes,
) -> CallableResponse {
    let caller = caller_identity(&headers, &state.identity_header);

    let payload = match parse_request(&body) {
        Ok(payload) => payload,
        // Authentication is checked before the payload shape
        Err(_) if caller.is_none() => serde_json::Value::Null,
        Err(e) => {
            debug!(error = %e, "Malformed callable request body");
            return CallableResponse::Failure(AnalyzeQuizError::malformed_payload(e.to_string()));
        }
    };

    state
        .use_case
        .execute(AnalyzeQuizInput::new(caller, payload))
        .await
        .into()
}

async fn health() -> &'static str {
    "ok"
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Callable endpoint listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Callable endpoint stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nakkla_application::{GatewayError, LlmGateway, LlmSession};
    use nakkla_domain::{Model, SystemPersona};
    use serde_json::{Value, json};
    use std::net::SocketAddr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    type Responder = Arc<dyn Fn(&str) -> Result<String, GatewayError> + Send + Sync>;

    struct MockGateway {
        responder: Responder,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    struct MockSession {
        responder: Responder,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for MockSession {
        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(content.to_string());
            (self.responder)(content)
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session_with_system_prompt(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockSession {
                responder: Arc::clone(&self.responder),
                prompts: Arc::clone(&self.prompts),
            }))
        }
    }

    struct Harness {
        addr: SocketAddr,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
        shutdown: Option<oneshot::Sender<()>>,
        client: reqwest::Client,
    }

    impl Harness {
        async fn start(
            config: EndpointConfig,
            responder: impl Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static,
        ) -> Self {
            let calls = Arc::new(AtomicUsize::new(0));
            let prompts = Arc::new(Mutex::new(Vec::new()));
            let gateway = MockGateway {
                responder: Arc::new(responder),
                calls: Arc::clone(&calls),
                prompts: Arc::clone(&prompts),
            };
            let use_case = AnalyzeQuizUseCase::new(Arc::new(gateway), SystemPersona::builtin());
            let server = CallableServer::new(use_case, &config).unwrap();

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let (tx, rx) = oneshot::channel::<()>();
            tokio::spawn(serve(listener, server.router(), async {
                let _ = rx.await;
            }));

            Self {
                addr,
                calls,
                prompts,
                shutdown: Some(tx),
                client: reqwest::Client::new(),
            }
        }

        fn url(&self, path: &str) -> String {
            format!("http://{}{}", self.addr, path)
        }

        async fn call(&self, token: Option<&str>, body: &str) -> (u16, Value) {
            let mut request = self
                .client
                .post(self.url(ANALYZE_ROUTE))
                .header("content-type", "application/json")
                .body(body.to_string());
            if let Some(token) = token {
                request = request.header("authorization", format!("Bearer {}", token));
            }
            let response = request.send().await.unwrap();
            let status = response.status().as_u16();
            (status, response.json().await.unwrap())
        }
    }

    impl Drop for Harness {
        fn drop(&mut self) {
            if let Some(tx) = self.shutdown.take() {
                let _ = tx.send(());
            }
        }
    }

    fn reply(
        text: &'static str,
    ) -> impl Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static {
        move |_| Ok(text.to_string())
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let harness = Harness::start(EndpointConfig::default(), reply("**Qat**\n\nYou are...")).await;

        let (status, body) = harness
            .call(
                Some("token"),
                r#"{"data":{"userAnswers":["Fight","Steal","Laugh"]}}"#,
            )
            .await;

        assert_eq!(status, 200);
        assert_eq!(body, json!({ "result": { "analysis": "**Qat**\n\nYou are..." } }));
        assert_eq!(
            harness.prompts.lock().unwrap().as_slice(),
            ["My answers to the quiz are:\n\n1. Fight\n2. Steal\n3. Laugh"]
        );
    }

    #[tokio::test]
    async fn test_unauthenticated() {
        let harness = Harness::start(EndpointConfig::default(), reply("unused")).await;

        let (status, body) = harness
            .call(None, r#"{"data":{"userAnswers":["Fight"]}}"#)
            .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["status"], "UNAUTHENTICATED");
        assert_eq!(
            body["error"]["message"],
            "The function must be called while authenticated."
        );
        assert_eq!(harness.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_without_caller_is_unauthenticated() {
        let harness = Harness::start(EndpointConfig::default(), reply("unused")).await;

        let (status, body) = harness.call(None, "{not json").await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["status"], "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn test_invalid_argument() {
        let harness = Harness::start(EndpointConfig::default(), reply("unused")).await;

        for payload in [
            r#"{"data":{}}"#,
            r#"{"data":{"userAnswers":"Fight"}}"#,
            r#"{"data":{"userAnswers":[]}}"#,
            "{not json",
        ] {
            let (status, body) = harness.call(Some("token"), payload).await;
            assert_eq!(status, 400, "payload {}", payload);
            assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
            assert_eq!(
                body["error"]["message"],
                "The function must be called with an array of userAnswers."
            );
        }
        assert_eq!(harness.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_internal() {
        let harness = Harness::start(EndpointConfig::default(), |_: &str| {
            Err(GatewayError::RequestFailed("HTTP 503: unavailable".to_string()))
        })
        .await;

        let (status, body) = harness
            .call(Some("token"), r#"{"data":{"userAnswers":["Fight"]}}"#)
            .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["status"], "INTERNAL");
        assert_eq!(
            body["error"]["message"],
            "Failed to analyze quiz results. Please try again later."
        );
        assert_eq!(
            body["error"]["details"],
            "Request failed: HTTP 503: unavailable"
        );
        assert_eq!(harness.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_model_text_is_internal() {
        let harness = Harness::start(EndpointConfig::default(), reply("")).await;

        let (status, body) = harness
            .call(Some("token"), r#"{"data":{"userAnswers":["Fight"]}}"#)
            .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["status"], "INTERNAL");
        assert_eq!(
            body["error"]["message"],
            "Failed to analyze quiz results. Please try again later."
        );
        assert_eq!(
            body["error"]["details"],
            "Failed to retrieve text from Gemini API response."
        );
    }

    #[tokio::test]
    async fn test_whitespace_model_text_is_returned() {
        let harness = Harness::start(EndpointConfig::default(), reply(" \n")).await;

        let (status, body) = harness
            .call(Some("token"), r#"{"data":{"userAnswers":["Fight"]}}"#)
            .await;

        assert_eq!(status, 200);
        assert_eq!(body, json!({ "result": { "analysis": " \n" } }));
    }

    #[tokio::test]
    async fn test_custom_identity_header() {
        let config = EndpointConfig::default().with_identity_header("x-caller-id");
        let harness = Harness::start(config, reply("**Bell**")).await;

        let response = harness
            .client
            .post(harness.url(ANALYZE_ROUTE))
            .header("x-caller-id", "uid-1")
            .body(r#"{"data":{"userAnswers":["Laugh"]}}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        // The default header is no longer consulted
        let (status, _) = harness
            .call(Some("token"), r#"{"data":{"userAnswers":["Laugh"]}}"#)
            .await;
        assert_eq!(status, 401);
    }

    #[tokio::test]
    async fn test_health() {
        let harness = Harness::start(EndpointConfig::default(), reply("unused")).await;

        let response = harness
            .client
            .get(harness.url(HEALTH_ROUTE))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "ok");
    }

    #[test]
    fn test_rejects_invalid_identity_header() {
        let gateway = MockGateway {
            responder: Arc::new(|_: &str| Ok(String::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        };
        let use_case = AnalyzeQuizUseCase::new(Arc::new(gateway), SystemPersona::builtin());
        let config = EndpointConfig::default().with_identity_header("bad header");
        assert!(CallableServer::new(use_case, &config).is_err());
    }
}
