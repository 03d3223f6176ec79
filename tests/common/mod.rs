//! Stub Ollama server shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// How the stub answers `POST /api/generate`.
#[derive(Clone)]
pub enum Behavior {
    Reply(String),
    Status(u16),
    /// Sleep, then reply.
    Slow(Duration, String),
    /// Sleep, then reply with text derived from the question inside the prompt.
    Echo(Duration),
    /// 200 with this exact body.
    Raw(String),
}

pub struct StubOllama {
    behavior: Behavior,
    calls: AtomicUsize,
    bodies: Mutex<Vec<Value>>,
}

impl StubOllama {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// Start a stub on an ephemeral port and return its base URL.
pub async fn spawn_stub(behavior: Behavior) -> (String, Arc<StubOllama>) {
    let stub = Arc::new(StubOllama {
        behavior,
        calls: AtomicUsize::new(0),
        bodies: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/api/generate", post(generate))
        .with_state(stub.clone());
    (serve(app).await, stub)
}

pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// The question embedded in a generated prompt.
pub fn question_in(prompt: &str) -> String {
    let start = prompt.find("User Question:\n").map(|i| i + "User Question:\n".len());
    let end = prompt.rfind("\n\nAnswer in detail:");
    match (start, end) {
        (Some(s), Some(e)) if s <= e => prompt[s..e].to_string(),
        _ => String::new(),
    }
}

async fn generate(State(stub): State<Arc<StubOllama>>, Json(body): Json<Value>) -> Response {
    stub.calls.fetch_add(1, Ordering::SeqCst);
    stub.bodies.lock().unwrap().push(body.clone());

    match &stub.behavior {
        Behavior::Reply(text) => {
            Json(json!({ "model": "llama3", "response": text, "done": true })).into_response()
        }
        Behavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            "ollama: model overloaded",
        )
            .into_response(),
        Behavior::Slow(delay, text) => {
            tokio::time::sleep(*delay).await;
            Json(json!({ "response": text })).into_response()
        }
        Behavior::Echo(delay) => {
            tokio::time::sleep(*delay).await;
            let prompt = body["prompt"].as_str().unwrap_or_default();
            let reply = format!("  answer to: {}  ", question_in(prompt));
            Json(json!({ "response": reply })).into_response()
        }
        Behavior::Raw(raw) => {
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], raw.clone()).into_response()
        }
    }
}
