//! End-to-end tests over HTTP with a mock model behind the run endpoint.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine as _;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use critique_core::ModelError;
use critique_llm::{FixedFactory, MockModel};
use critique_server::{start, AppState, ServerConfig, SessionStore};

struct TestServer {
    base: String,
    client: reqwest::Client,
    mock: Arc<MockModel>,
}

impl TestServer {
    async fn boot(responses: Vec<Result<String, ModelError>>) -> Self {
        let mock = Arc::new(MockModel::new(responses));
        let state = AppState {
            store: Arc::new(SessionStore::new()),
            factory: Arc::new(FixedFactory::new(mock.clone())),
        };
        let handle = start(
            ServerConfig {
                port: 0,
                ..Default::default()
            },
            state,
        )
        .await
        .unwrap();

        Self {
            base: format!("http://127.0.0.1:{}", handle.port),
            client: reqwest::Client::new(),
            mock,
        }
    }

    async fn create_session(&self) -> String {
        let resp = self
            .client
            .post(format!("{}/api/sessions", self.base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        let body: Value = resp.json().await.unwrap();
        body["session_id"].as_str().unwrap().to_string()
    }

    async fn set_credential(&self, session: &str, key: &str) -> Value {
        let resp = self
            .client
            .put(format!("{}/api/sessions/{session}/credential", self.base))
            .json(&serde_json::json!({ "api_key": key }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    async fn run(&self, session: &str, form: Form) -> reqwest::Response {
        self.client
            .post(format!("{}/api/sessions/{session}/runs", self.base))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }
}

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([12, 34, 56, 255]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn png_part(name: &str) -> Part {
    Part::bytes(tiny_png()).file_name(name.to_string())
}

fn base_form() -> Form {
    Form::new()
        .text("categories", "User Experience")
        .text("focus_areas", "Interactions")
        .text("context", "a mobile banking app")
}

#[tokio::test]
async fn empty_credential_blocks_run_with_zero_calls() {
    let server = TestServer::boot(vec![Ok("unused".to_string())]).await;
    let session = server.create_session().await;

    let resp = server
        .run(&session, base_form().part("image", png_part("shot.png")))
        .await;

    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["warning"], "Please enter your API key to proceed");
    assert!(body["hint"].as_str().unwrap().contains("Google AI Studio"));
    assert_eq!(server.mock.call_count(), 0);
}

#[tokio::test]
async fn zero_assets_warns_with_zero_calls() {
    let server = TestServer::boot(vec![Ok("unused".to_string())]).await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-test").await;

    let resp = server.run(&session, base_form()).await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["warning"], "Please upload at least one design to analyze.");
    assert_eq!(server.mock.call_count(), 0);
}

#[tokio::test]
async fn single_category_makes_one_bound_call() {
    let server = TestServer::boot(vec![Ok("the visual critique".to_string())]).await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-test").await;

    let form = Form::new()
        .text("categories", "Visual Design")
        .text("focus_areas", "Typography")
        .text("context", "")
        .part("image", png_part("shot.png"));
    let resp = server.run(&session, form).await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["sections"][0]["heading"], "Visual Design Analysis");
    assert_eq!(body["sections"][0]["body"], "the visual critique");
    assert!(body.get("summary").is_none());

    assert_eq!(server.mock.call_count(), 1);
    let requests = server.mock.requests();
    assert_eq!(requests[0].system[0], "You are a visual analysis expert that:");
    assert_eq!(requests[0].images.len(), 1);
}

#[tokio::test]
async fn both_categories_run_in_order_with_summary() {
    let server = TestServer::boot(vec![
        Ok("visual".to_string()),
        Ok("ux".to_string()),
    ])
    .await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-test").await;

    let form = base_form()
        .text("categories", "Visual Design")
        .part("image", png_part("shot.png"));
    let resp = server.run(&session, form).await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["sections"][0]["category"], "visual_design");
    assert_eq!(body["sections"][1]["category"], "user_experience");
    assert!(body["summary"].as_str().unwrap().contains("specialized AI agents"));

    assert_eq!(server.mock.call_count(), 2);
    let requests = server.mock.requests();
    assert_eq!(requests[0].system[0], "You are a visual analysis expert that:");
    assert_eq!(requests[1].system[0], "You are a UX analysis expert that:");
}

#[tokio::test]
async fn broken_asset_is_skipped_and_run_proceeds() {
    let server = TestServer::boot(vec![Ok("critique".to_string())]).await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-test").await;

    let form = base_form()
        .part("image", png_part("good.png"))
        .part("image", Part::bytes(vec![0u8; 24]).file_name("broken.png"));
    let resp = server.run(&session, form).await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["skipped_assets"][0]["name"], "broken.png");
    assert_eq!(body["sections"][0]["body"], "critique");

    assert_eq!(server.mock.call_count(), 1);
    assert_eq!(server.mock.requests()[0].images.len(), 1);
}

#[tokio::test]
async fn remote_error_aborts_run_with_credential_hint() {
    let server = TestServer::boot(vec![
        Err(ModelError::AuthenticationFailed("API key not valid".to_string())),
        Ok("never reached".to_string()),
    ])
    .await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-bad").await;

    let form = base_form()
        .text("categories", "Visual Design")
        .part("image", png_part("shot.png"));
    let resp = server.run(&session, form).await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["aborted"]["error"]
        .as_str()
        .unwrap()
        .contains("An error occurred during analysis"));
    assert_eq!(
        body["aborted"]["hint"],
        "Please check your API key and try again."
    );
    // Whole-run abort: the second category is never attempted.
    assert_eq!(server.mock.call_count(), 1);
}

#[tokio::test]
async fn pasted_data_url_becomes_an_asset() {
    let server = TestServer::boot(vec![Ok("critique".to_string())]).await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-test").await;

    let payload = base64::engine::general_purpose::STANDARD.encode(tiny_png());
    let form = base_form().text("pasted_image", format!("data:image/png;base64,{payload}"));
    let resp = server.run(&session, form).await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["sections"][0]["body"], "critique");
    assert_eq!(server.mock.requests()[0].images.len(), 1);
}

#[tokio::test]
async fn unknown_session_is_404() {
    let server = TestServer::boot(vec![]).await;

    let resp = server.run("sess_does_not_exist", base_form()).await;
    assert_eq!(resp.status(), 404);

    let resp = server
        .client
        .put(format!("{}/api/sessions/sess_nope/credential", server.base))
        .json(&serde_json::json!({ "api_key": "k" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unknown_category_is_400_with_zero_calls() {
    let server = TestServer::boot(vec![Ok("unused".to_string())]).await;
    let session = server.create_session().await;
    server.set_credential(&session, "AIzaSy-test").await;

    let form = Form::new()
        .text("categories", "Branding")
        .part("image", png_part("shot.png"));
    let resp = server.run(&session, form).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(server.mock.call_count(), 0);
}

#[tokio::test]
async fn credential_update_never_echoes_the_key() {
    let server = TestServer::boot(vec![]).await;
    let session = server.create_session().await;

    let body = server.set_credential(&session, "AIzaSy-secret-value").await;
    assert_eq!(body["credential_present"], true);
    assert!(!body.to_string().contains("AIzaSy-secret-value"));

    let cleared = server.set_credential(&session, "").await;
    assert_eq!(cleared["credential_present"], false);
}
