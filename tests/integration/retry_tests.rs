//! Downstream failures as callers see them

#[cfg(test)]
mod tests {
    use crate::common::assertions::RelayBodyAssertions;
    use crate::common::{GroqReplyFactory, config_for, relay_state};
    use actix_web::{http::StatusCode, test};
    use groq_relay::server::server::HttpServer;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[actix_web::test]
    async fn test_persistent_503_exhausts_retries() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
            .expect(4)
            .mount(&mock_server)
            .await;

        let app = test::init_service(HttpServer::create_app(relay_state(config_for(
            &mock_server.uri(),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        body.assert_failure("Server error: 503 Service Unavailable - upstream overloaded");
    }

    #[actix_web::test]
    async fn test_transient_failure_recovers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(2)
            .expect(2)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(GroqReplyFactory::reply("ok", 3)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = test::init_service(HttpServer::create_app(relay_state(config_for(
            &mock_server.uri(),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        body.assert_success_with("ok");
    }

    #[actix_web::test]
    async fn test_client_error_reported_as_500() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(GroqReplyFactory::error("Invalid API Key")),
            )
            .expect(4)
            .mount(&mock_server)
            .await;

        let app = test::init_service(HttpServer::create_app(relay_state(config_for(
            &mock_server.uri(),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        body.assert_failure_starting_with("Client error: 401 Unauthorized - ");
        assert!(body["error"].as_str().unwrap().contains("Invalid API Key"));
    }

    #[actix_web::test]
    async fn test_client_error_not_retried_when_disabled() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = config_for(&mock_server.uri());
        config.groq.retry_client_errors = false;
        let app = test::init_service(HttpServer::create_app(relay_state(config))).await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        body.assert_failure("Client error: 400 Bad Request - bad request");
    }

    #[actix_web::test]
    async fn test_undecodable_reply_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .expect(4)
            .mount(&mock_server)
            .await;

        let app = test::init_service(HttpServer::create_app(relay_state(config_for(
            &mock_server.uri(),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        body.assert_failure_starting_with("Failed to call Groq API: invalid response body: ");
    }

    #[actix_web::test]
    async fn test_timeouts_exhaust_retries() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(GroqReplyFactory::reply("too late", 3))
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(4)
            .mount(&mock_server)
            .await;

        let mut config = config_for(&mock_server.uri());
        config.groq.timeout = 1;
        let app = test::init_service(HttpServer::create_app(relay_state(config))).await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        body.assert_failure_starting_with("Failed to call Groq API: request timed out");
    }

    #[actix_web::test]
    async fn test_unreachable_provider_reported() {
        let config = config_for("http://127.0.0.1:1");
        assert_eq!(config.groq.max_retries, 3);
        let app = test::init_service(HttpServer::create_app(relay_state(config))).await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        body.assert_failure_starting_with("Failed to call Groq API: ");
    }
}
