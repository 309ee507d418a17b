use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::config::Polling;
use crate::homework::PollError;

const USER_AGENT: &str = concat!("homework_bot/", env!("CARGO_PKG_VERSION"));

pub trait HomeworkSource {
    /// Issues one request for review updates since `from_date` (unix seconds).
    async fn fetch(&mut self, from_date: i64) -> Result<Value, PollError>;
}

pub struct PracticumClient {
    client: Client,
    endpoint: String,
    authorization: String,
}

impl PracticumClient {
    pub fn new(token: &str, polling: &Polling) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(polling.connect_timeout())
            .timeout(polling.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: polling.endpoint.clone(),
            authorization: format!("OAuth {}", token),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl HomeworkSource for PracticumClient {
    async fn fetch(&mut self, from_date: i64) -> Result<Value, PollError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Remote {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
pub(crate) struct MockSource {
    responses: std::collections::VecDeque<Result<Value, PollError>>,
    pub(crate) requested: Vec<i64>,
}

#[cfg(test)]
impl MockSource {
    pub(crate) fn new(responses: Vec<Result<Value, PollError>>) -> Self {
        Self {
            responses: responses.into(),
            requested: Vec::new(),
        }
    }
}

#[cfg(test)]
impl HomeworkSource for MockSource {
    async fn fetch(&mut self, from_date: i64) -> Result<Value, PollError> {
        self.requested.push(from_date);
        self.responses
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({ "homeworks": [] })))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{HomeworkSource, PracticumClient};
    use crate::config::Polling;
    use crate::homework::PollError;

    const STATUS_PATH: &str = "/api/user_api/homework_statuses/";

    fn polling_for(server: &MockServer) -> Polling {
        Polling {
            endpoint: format!("{}{}", server.uri(), STATUS_PATH),
            request_timeout_secs: 1,
            connect_timeout_secs: 1,
            ..Polling::default()
        }
    }

    #[tokio::test]
    async fn sends_oauth_header_and_from_date() {
        let server = MockServer::start().await;
        let body = json!({
            "homeworks": [{"homework_name": "diff1", "status": "approved"}],
            "current_date": 1700000100,
        });
        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .and(header("Authorization", "OAuth practicum-secret"))
            .and(query_param("from_date", "1700000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = PracticumClient::new("practicum-secret", &polling_for(&server))
            .expect("client should build");
        let raw = client.fetch(1700000000).await.expect("fetch should succeed");

        assert_eq!(raw, body);
    }

    #[tokio::test]
    async fn returns_body_without_interpreting_it() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut client =
            PracticumClient::new("t", &polling_for(&server)).expect("client should build");
        let raw = client.fetch(0).await.expect("any json body is returned");

        assert_eq!(raw, json!([]));
    }

    #[tokio::test]
    async fn non_success_status_is_a_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let mut client =
            PracticumClient::new("t", &polling_for(&server)).expect("client should build");
        let error = client.fetch(0).await.unwrap_err();

        match error {
            PollError::Remote { endpoint, status } => {
                assert_eq!(status, 503);
                assert_eq!(endpoint, client.endpoint());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let mut client =
            PracticumClient::new("t", &polling_for(&server)).expect("client should build");
        let error = client.fetch(0).await.unwrap_err();

        assert!(matches!(error, PollError::Transport(_)));
        assert!(error.to_string().starts_with("Ошибка при запросе к API: "));
    }

    #[tokio::test]
    async fn slow_response_times_out_as_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_millis(2500))
                    .set_body_json(json!({"homeworks": []})),
            )
            .mount(&server)
            .await;

        let mut client =
            PracticumClient::new("t", &polling_for(&server)).expect("client should build");
        let error = client.fetch(0).await.unwrap_err();

        match error {
            PollError::Transport(source) => assert!(source.is_timeout()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let polling = Polling {
            endpoint: format!("http://127.0.0.1:1{}", STATUS_PATH),
            request_timeout_secs: 1,
            connect_timeout_secs: 1,
            ..Polling::default()
        };

        let mut client = PracticumClient::new("t", &polling).expect("client should build");
        let error = client.fetch(0).await.unwrap_err();

        assert_eq!(error.kind(), "transport");
    }
}
