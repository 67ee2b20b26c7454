#![allow(dead_code)]

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_models::{Client, ModelLister};

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub async fn mount_models_list(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(query_param("key", "test-key"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_models_json(server: &MockServer, status: u16, body: Value) {
    mount_models_list(server, ResponseTemplate::new(status).set_body_json(body)).await;
}

pub async fn run_lister(server: &MockServer) -> (gemini_models::Result<()>, String) {
    let lister = ModelLister::new(build_gemini_client(&server.uri()));
    let mut buf = Vec::new();
    let result = lister.run(&mut buf).await;
    (result, String::from_utf8(buf).unwrap())
}
