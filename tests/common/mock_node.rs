//! Mock JSON-RPC node for exercising the HTTP wallet provider.

#![allow(dead_code)]

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub enum Reply {
    Result(Value),
    Error { code: i64, message: String },
}

#[derive(Default)]
struct NodeState {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<Value>>,
}

/// Replies per method are consumed in order; the last one repeats.
/// Methods without replies answer `-32601 method not found`.
pub struct MockNode {
    addr: SocketAddr,
    state: Arc<NodeState>,
}

impl MockNode {
    pub async fn start() -> Self {
        let state = Arc::new(NodeState::default());
        let app = Router::new()
            .route("/", post(handle))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock node");
        let addr = listener.local_addr().expect("mock node addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock node serve");
        });
        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn reply(&self, method: &str, reply: Reply) {
        self.state
            .replies
            .lock()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn result(&self, method: &str, result: Value) {
        self.reply(method, Reply::Result(result));
    }

    pub fn error(&self, method: &str, code: i64, message: &str) {
        self.reply(
            method,
            Reply::Error {
                code,
                message: message.to_string(),
            },
        );
    }

    /// Request bodies received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|r| r["method"].as_str().map(String::from))
            .collect()
    }
}

async fn handle(State(state): State<Arc<NodeState>>, Json(body): Json<Value>) -> Json<Value> {
    state.requests.lock().push(body.clone());
    let method = body["method"].as_str().unwrap_or_default().to_string();
    let id = body["id"].clone();

    let reply = {
        let mut replies = state.replies.lock();
        match replies.get_mut(&method) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        }
    };

    Json(match reply {
        Some(Reply::Result(result)) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Some(Reply::Error { code, message }) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message },
        }),
        None => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "method not found" },
        }),
    })
}
