//! Tests for `ApiClient`.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::ApiClient;
use crate::api::{Error, MethodArgs};
use crate::config::{ApiClientConfig, ConfigError, field};
use crate::test_support::MockClient;
use crate::transport::{HttpError, HttpRequest, HttpResponse, RequestBody};
use serde_json::json;

fn client_with(mock: MockClient) -> ApiClient<MockClient> {
    ApiClient::with_http_client(mock, ApiClientConfig::new("XXX").with_api_url("YYY")).unwrap()
}

fn ok_client() -> ApiClient<MockClient> {
    client_with(MockClient::replying_json(&json!({"ok": true})))
}

mod construction {
    use super::*;

    #[test]
    fn keeps_token_and_api_url() {
        let client = ok_client();

        assert_eq!(client.token(), "XXX");
        assert_eq!(client.api_url(), "YYY");
    }

    #[test]
    fn defaults_api_url() {
        let client = ApiClient::with_http_client(MockClient::new(vec![]), "XXX").unwrap();

        assert_eq!(client.api_url(), "https://slack.com/api/");
    }

    #[test]
    fn empty_token_fails_before_any_request() {
        let mock = Arc::new(MockClient::new(vec![]));
        let result = ApiClient::with_http_client(Arc::clone(&mock), "");

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: f, .. }) if f == field::TOKEN
        ));
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn default_transport_constructs() {
        let client = ApiClient::new("xoxb-1").unwrap();

        assert_eq!(client.token(), "xoxb-1");
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", ok_client());

        assert!(debug.contains("YYY"));
        assert!(!debug.contains("XXX"));
    }
}

mod call {
    use super::*;

    fn sent(client: &ApiClient<MockClient>) -> HttpRequest {
        client.http_client().single_request()
    }

    #[tokio::test]
    async fn url_is_api_url_plus_method() {
        let client = ok_client();

        client.call("TEST_METHOD", None).await.unwrap();

        assert_eq!(sent(&client).url, "YYYTEST_METHOD");
    }

    #[tokio::test]
    async fn omitted_args_send_only_the_token() {
        let client = ok_client();

        client.call("TEST_METHOD", None).await.unwrap();

        let req = sent(&client);
        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.query, vec![("token".to_string(), "XXX".to_string())]);
    }

    #[tokio::test]
    async fn args_and_token_go_to_query() {
        let client = ok_client();
        let args = MethodArgs::new().with("a", 1).with("b", 2);

        client.call("TEST_METHOD", Some(&args)).await.unwrap();

        let query: BTreeMap<String, String> = sent(&client).query.into_iter().collect();
        assert_eq!(
            query,
            BTreeMap::from([
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("token".to_string(), "XXX".to_string()),
            ])
        );
        assert_eq!(args.len(), 2);
    }

    #[tokio::test]
    async fn message_post_uses_form_body() {
        let client = ok_client();
        let args = MethodArgs::new().with("attachments", vec![json!({"text": "foobar"})]);

        client.call("chat.postMessage", Some(&args)).await.unwrap();

        let req = sent(&client);
        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.body,
            RequestBody::Form(vec![
                (
                    "attachments".to_string(),
                    r#"[{"text":"foobar"}]"#.to_string()
                ),
                ("token".to_string(), "XXX".to_string()),
            ])
        );
    }

    #[tokio::test]
    async fn file_upload_sends_file_as_multipart() {
        let client = ok_client();
        let args = MethodArgs::new().with("file", b"123".to_vec());

        client.call("files.upload", Some(&args)).await.unwrap();

        let req = sent(&client);
        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.body.multipart_parts().unwrap()[0].data, b"123".to_vec());
        assert_eq!(req.query_param("token"), Some("XXX"));
    }

    #[tokio::test]
    async fn success_body_omits_ok() {
        let client = client_with(MockClient::replying_json(
            &json!({"ok": true, "foo": "bar"}),
        ));

        let body = client.call("TEST_METHOD", None).await.unwrap();

        assert_eq!(serde_json::Value::Object(body), json!({"foo": "bar"}));
    }

    #[tokio::test]
    async fn not_ok_is_protocol_error() {
        let client = client_with(MockClient::replying_json(
            &json!({"ok": false, "error": "invalid_auth"}),
        ));

        let err = client.call("auth.test", None).await.unwrap_err();

        assert_eq!(err.as_protocol().unwrap().message, "invalid_auth");
    }

    #[tokio::test]
    async fn transport_error_is_not_retried() {
        let client = client_with(MockClient::new(vec![
            Err(HttpError::Timeout),
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                br#"{"ok":true}"#.to_vec(),
            )),
        ]));

        let err = client.call("auth.test", None).await.unwrap_err();

        assert!(matches!(err, Error::Transport(HttpError::Timeout)));
        assert_eq!(client.http_client().calls(), 1);
    }

    #[tokio::test]
    async fn invalid_argument_sends_nothing() {
        let client = ok_client();
        let args = MethodArgs::new().with("blob", vec![0_u8]);

        let err = client.call("TEST_METHOD", Some(&args)).await.unwrap_err();

        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(client.http_client().calls(), 0);
    }
}
