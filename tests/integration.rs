use ai_image_generator::{
    config::Config,
    controller::{PromptController, View, EMPTY_PROMPT_MESSAGE, ERROR_TITLE},
    generator::{GeneratorClient, FALLBACK_MESSAGE},
    notify::{RecordingNotifier, Severity},
    page, Error,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(base_url: String) -> (PromptController, RecordingNotifier) {
    let config = Config::default().with_base_url(base_url);
    let notifier = RecordingNotifier::new();
    let controller = PromptController::new(
        Box::new(GeneratorClient::new(&config).unwrap()),
        Box::new(notifier.clone()),
    );
    (controller, notifier)
}

#[tokio::test]
async fn test_empty_prompts_never_reach_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (controller, notifier) = controller_for(server.uri());

    for prompt in ["", " ", "\n\t  "] {
        let outcome = controller.submit(prompt).await;
        assert!(matches!(assert_err!(outcome.into_result()), Error::Validation(_)));
    }

    let notes = notifier.notifications();
    assert_eq!(notes.len(), 3);
    assert!(notes
        .iter()
        .all(|n| n.title == ERROR_TITLE && n.message == EMPTY_PROMPT_MESSAGE));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_prompt_is_sent_once_and_untrimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(serde_json::json!({ "prompt": "  misty forest at dawn  " })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "imageUrl": "https://x/forest.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (controller, _notifier) = controller_for(server.uri());

    let url = assert_ok!(controller.submit("  misty forest at dawn  ").await.into_result());
    assert_eq!(url, "https://x/forest.png");
}

#[tokio::test]
async fn test_success_shows_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "imageUrl": "https://x/y.png"
        })))
        .mount(&server)
        .await;

    let (controller, notifier) = controller_for(server.uri());
    controller.submit("a paper boat").await;

    let state = controller.state();
    assert_eq!(state.image.as_deref(), Some("https://x/y.png"));
    assert!(!state.busy);
    assert_eq!(state.view(), View::Image("https://x/y.png"));
    assert_eq!(notifier.get_call_count(), 0);
    assert!(page::render(&state, 0).contains("Generated AI Image: https://x/y.png"));
}

#[tokio::test]
async fn test_success_without_image_url_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let (controller, notifier) = controller_for(server.uri());
    let outcome = controller.submit("a paper boat").await;

    assert!(!outcome.is_generated());
    let state = controller.state();
    assert!(state.image.is_none());
    assert!(!state.busy);
    let note = notifier.last().unwrap();
    assert_eq!(note.message, FALLBACK_MESSAGE);
    assert_eq!(note.severity, Severity::Destructive);
}

#[tokio::test]
async fn test_error_status_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": "bad prompt"
        })))
        .mount(&server)
        .await;

    let (controller, notifier) = controller_for(server.uri());
    controller.submit("???").await;

    assert_eq!(notifier.last().unwrap().message, "bad prompt");
    assert!(!controller.state().busy);
    assert_eq!(controller.state().view(), View::Idle);
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    // Nothing listens on the discard port.
    let (controller, notifier) = controller_for("http://127.0.0.1:9".to_string());

    let outcome = controller.submit("a paper boat").await;

    assert!(matches!(assert_err!(outcome.into_result()), Error::Generation(_)));
    let note = notifier.last().unwrap();
    assert!(!note.message.is_empty());
    assert!(!controller.state().busy);
}

#[tokio::test]
async fn test_same_state_renders_the_same_regardless_of_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(serde_json::json!({ "prompt": "fail" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(serde_json::json!({ "prompt": "ok" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "imageUrl": "https://x/y.png"
        })))
        .mount(&server)
        .await;

    // One session fails first, the other goes straight to the image.
    let (first, _) = controller_for(server.uri());
    first.submit("fail").await;
    first.submit("ok").await;

    let (second, _) = controller_for(server.uri());
    second.submit("ok").await;

    assert_eq!(first.state(), second.state());
    assert_eq!(
        page::render(&first.state(), 0),
        page::render(&second.state(), 0)
    );
}
