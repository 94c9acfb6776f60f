use axum::{
    Form, Json, Router,
    extract::Multipart,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chat_composer::composer::{ChatComposer, ComposerElements, ComposerOptions, SubmitOutcome};
use chat_composer::dom::memory::{
    MemoryButton, MemoryForm, MemoryMessageList, MemoryTextArea, RecordingNotifier,
};
use chat_composer::dom::TextArea;
use chat_composer::error::{FailureKind, SendError};
use chat_composer::message::FormPayload;
use chat_composer::transport::{FormEncoding, HttpTransport, MessageTransport};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::rc::Rc;

// Answers like the chat endpoint: echoes the content with a display time.
async fn post_chat(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    let (Some(_chat_id), Some(content)) = (form.get("chatID"), form.get("content")) else {
        return (StatusCode::BAD_REQUEST, "chatID and content are required").into_response();
    };
    Json(sent(content)).into_response()
}

async fn post_chat_multipart(mut multipart: Multipart) -> impl IntoResponse {
    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.insert(name, value);
    }
    match fields.get("content") {
        Some(content) => Json(sent(content)).into_response(),
        None => (StatusCode::BAD_REQUEST, "content is required").into_response(),
    }
}

fn sent(content: &str) -> Value {
    json!({
        "id": "msg_1",
        "content": content,
        "sender_id": "u1",
        "sender_name": "Alice",
        "created_at": chrono::Local::now().format("%H:%M").to_string(),
        "is_read": false,
    })
}

async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok(format!("http://{addr}/chat"))
}

fn payload(content: &str) -> FormPayload {
    let mut payload = FormPayload::new();
    payload.push("chatID", "chat-1");
    payload.push("content", content);
    payload
}

#[tokio::test]
async fn test_urlencoded_post_returns_sent_message() -> anyhow::Result<()> {
    let url = spawn(Router::new().route("/chat", post(post_chat))).await?;
    let transport = HttpTransport::new(&url)?;

    let sent = transport.send(&payload("hello & <bye>")).await?;

    assert_eq!(sent.content, "hello & <bye>");
    assert_eq!(sent.id.as_deref(), Some("msg_1"));
    assert_eq!(sent.created_at.len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_multipart_post_returns_sent_message() -> anyhow::Result<()> {
    let url = spawn(Router::new().route("/chat", post(post_chat_multipart))).await?;
    let transport = HttpTransport::new(&url)?.with_encoding(FormEncoding::Multipart);

    let sent = transport.send(&payload("multi\nline")).await?;

    assert_eq!(sent.content, "multi\nline");
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_rejection() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let url = spawn(app).await?;
    let transport = HttpTransport::new(&url)?;

    let err = transport.send(&payload("hi")).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::ServerRejection);
    match err {
        SendError::Rejected { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_rejection() -> anyhow::Result<()> {
    let url = spawn(Router::new().route("/chat", post(post_chat))).await?;
    let transport = HttpTransport::new(&url)?;

    let mut without_chat = FormPayload::new();
    without_chat.push("content", "hi");
    let err = transport.send(&without_chat).await.unwrap_err();

    assert!(matches!(err, SendError::Rejected { status: 400, .. }));
    Ok(())
}

#[tokio::test]
async fn test_unexpected_body_is_malformed() -> anyhow::Result<()> {
    let app = Router::new().route("/chat", post(|| async { "<html>login</html>" }));
    let url = spawn(app).await?;
    let transport = HttpTransport::new(&url)?;

    let err = transport.send(&payload("hi")).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
    assert!(matches!(err, SendError::Malformed(_)));
    Ok(())
}

#[tokio::test]
async fn test_json_without_content_is_malformed() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/chat",
        post(|| async { Json(json!({ "created_at": "12:00" })) }),
    );
    let url = spawn(app).await?;
    let transport = HttpTransport::new(&url)?;

    let err = transport.send(&payload("hi")).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    let transport = HttpTransport::new(format!("http://{addr}/chat"))?;

    let err = transport.send(&payload("hi")).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Transport);
    assert!(matches!(err, SendError::Http(_)));
    Ok(())
}

#[tokio::test]
async fn test_composer_against_endpoint() -> anyhow::Result<()> {
    let url = spawn(Router::new().route("/chat", post(post_chat))).await?;

    let input = Rc::new(MemoryTextArea::new("<script>alert('x')</script>"));
    let list = Rc::new(MemoryMessageList::default());
    let notifier = Rc::new(RecordingNotifier::new());
    let elements = ComposerElements {
        form: Rc::new(MemoryForm::new().with_field("chatID", "chat-1")),
        input: Rc::clone(&input) as _,
        list: Rc::clone(&list) as _,
        submit: Rc::new(MemoryButton::new("Send")),
        notifier: Rc::clone(&notifier) as _,
    };
    let composer = ChatComposer::mount(
        elements,
        Rc::new(HttpTransport::new(&url)?),
        ComposerOptions::default(),
    );

    assert_eq!(composer.on_submit().await, SubmitOutcome::Delivered);

    let items = list.items();
    assert_eq!(items.len(), 1);
    assert!(items[0].contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    assert!(!items[0].contains("<script>"));
    assert_eq!(input.value(), "");
    assert!(notifier.alerts().is_empty());
    Ok(())
}
