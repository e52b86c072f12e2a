//! Live round trips through the relay

#[cfg(test)]
mod tests {
    use crate::common::relay_state;
    use crate::skip_without_env;
    use actix_web::{http::StatusCode, test};
    use groq_relay::Config;
    use groq_relay::server::server::HttpServer;
    use serde_json::{Value, json};

    fn live_config() -> Config {
        let mut config = Config::default();
        config.groq.api_base = Some("https://api.groq.com/openai/v1".to_string());
        config.apply_env().expect("environment overrides should parse");
        config
    }

    #[actix_web::test]
    #[ignore]
    async fn test_live_simple_chat() {
        skip_without_env!("GROQ_API_KEY");

        let app = test::init_service(HttpServer::create_app(relay_state(live_config()))).await;

        let req = test::TestRequest::post()
            .uri("/api/chat/simple")
            .set_json(json!({"message": "Say 'test passed' and nothing else"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["response"].as_str().is_some_and(|text| !text.is_empty()));
        assert!(body["tokensUsed"].as_u64().unwrap_or_default() > 0);
    }

    #[actix_web::test]
    #[ignore]
    async fn test_live_chat_with_history() {
        skip_without_env!("GROQ_API_KEY");

        let app = test::init_service(HttpServer::create_app(relay_state(live_config()))).await;

        let req = test::TestRequest::post()
            .uri("/api/chat/with-history")
            .set_json(json!({
                "message": "What is my name? Answer with the name only.",
                "history": [
                    {"role": "user", "content": "My name is Ada."},
                    {"role": "assistant", "content": "Nice to meet you, Ada."}
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let text = body["response"].as_str().unwrap_or_default();
        assert!(text.contains("Ada"), "unexpected reply: {}", text);
    }
}
