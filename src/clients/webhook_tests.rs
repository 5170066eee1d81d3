//! Tests for `WebhookClient`.

use super::WebhookClient;
use crate::api::Error;
use crate::config::{ConfigError, WebhookClientConfig};
use crate::test_support::MockClient;
use crate::transport::HttpError;
use serde::Serialize;
use serde_json::json;

const URL: &str = "https://hooks.slack.com/services/T/B/X";

fn client(mock: MockClient) -> WebhookClient<MockClient> {
    WebhookClient::with_http_client(mock, URL).unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn keeps_webhook_url() {
        let client = client(MockClient::new(vec![]));

        assert_eq!(client.webhook_url(), URL);
    }

    #[test]
    fn accepts_config_struct() {
        let client = WebhookClient::with_http_client(
            MockClient::new(vec![]),
            WebhookClientConfig::new("XXX"),
        )
        .unwrap();

        assert_eq!(client.webhook_url(), "XXX");
    }

    #[test]
    fn debug_redacts_url() {
        let debug = format!("{:?}", client(MockClient::new(vec![])));

        assert!(debug.contains("WebhookClient"));
        assert!(!debug.contains("hooks.slack.com"));
    }

    #[test]
    fn empty_url_fails() {
        let result = WebhookClient::with_http_client(MockClient::new(vec![]), "");

        assert!(matches!(result, Err(ConfigError::MissingRequired { .. })));
    }
}

mod send {
    use super::*;

    #[test]
    fn body_is_url_encoded_json_payload() {
        let client = client(MockClient::new(vec![]));

        let req = client.build_request(&json!({"text": "hi"})).unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, URL);
        assert!(req.query.is_empty());
        assert_eq!(
            req.body.raw_bytes(),
            Some(&b"payload=%7B%22text%22%3A%22hi%22%7D"[..])
        );
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn typed_payloads_serialize() {
        #[derive(Serialize)]
        struct Message<'a> {
            text: &'a str,
            channel: &'a str,
        }

        let client = client(MockClient::new(vec![]));
        let req = client
            .build_request(&Message {
                text: "hi",
                channel: "#ops",
            })
            .unwrap();

        assert_eq!(
            req.body.raw_bytes(),
            Some(&b"payload=%7B%22text%22%3A%22hi%22%2C%22channel%22%3A%22%23ops%22%7D"[..])
        );
    }

    #[tokio::test]
    async fn ok_reply_is_success() {
        let client = client(MockClient::replying("ok"));

        client.send(&json!({"text": "hi"})).await.unwrap();

        assert_eq!(client.http_client().calls(), 1);
        assert_eq!(client.http_client().single_request().url, URL);
    }

    #[tokio::test]
    async fn other_reply_is_protocol_error() {
        let client = client(MockClient::replying("no_text"));

        let err = client.send(&json!({})).await.unwrap_err();
        let slack = err.as_protocol().unwrap();

        assert_eq!(slack.message, "no_text");
        assert_eq!(slack.request_url.as_deref(), Some(URL));
        assert_eq!(slack.response_body.as_deref(), Some("no_text"));
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        let client = client(MockClient::failing(HttpError::Timeout));

        let err = client.send(&json!({"text": "hi"})).await.unwrap_err();

        assert!(matches!(err, Error::Transport(HttpError::Timeout)));
    }
}
