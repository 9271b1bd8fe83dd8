//! In-process fake of the interop server, bound to an ephemeral loopback port.

#![allow(dead_code)]

use axum::{
    extract::{Form, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub const USERNAME: &str = "testuser";
pub const PASSWORD: &str = "testpass";
pub const SERVER_TIME: &str = "2016-06-15 12:00:00.000000";
const SESSION_COOKIE: &str = "sessionid=fake-session";

#[derive(Default)]
pub struct FakeInterop {
    pub telemetry: Mutex<Vec<HashMap<String, String>>>,
    pub targets: Mutex<Vec<Value>>,
    pub next_id: AtomicI64,
    pub fail_server_info: AtomicBool,
    pub expire_session: AtomicBool,
}

impl FakeInterop {
    pub fn telemetry(&self) -> Vec<HashMap<String, String>> {
        self.telemetry.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<Value> {
        self.targets.lock().unwrap().clone()
    }
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains(SESSION_COOKIE))
        .unwrap_or(false)
}

async fn login(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    let ok = form.get("username").map(String::as_str) == Some(USERNAME)
        && form.get("password").map(String::as_str) == Some(PASSWORD);
    if ok {
        (
            StatusCode::OK,
            [(header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE))],
            "Login Successful.",
        )
            .into_response()
    } else {
        (StatusCode::BAD_REQUEST, "Invalid Credentials.").into_response()
    }
}

async fn post_telemetry(
    State(fake): State<Arc<FakeInterop>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    if !has_session(&headers) {
        return (StatusCode::FORBIDDEN, "User not logged in.").into_response();
    }
    fake.telemetry.lock().unwrap().push(form);
    (StatusCode::OK, "UAS Telemetry Successfully Posted.").into_response()
}

async fn post_target(
    State(fake): State<Arc<FakeInterop>>,
    headers: HeaderMap,
    Json(mut target): Json<Value>,
) -> impl IntoResponse {
    if !has_session(&headers) {
        return (StatusCode::FORBIDDEN, "User not logged in.").into_response();
    }
    let id = fake.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    target["id"] = json!(id);
    target["user"] = json!(1);
    fake.targets.lock().unwrap().push(target.clone());
    (StatusCode::CREATED, Json(target)).into_response()
}

async fn get_targets(State(fake): State<Arc<FakeInterop>>, headers: HeaderMap) -> impl IntoResponse {
    if !has_session(&headers) {
        return (StatusCode::FORBIDDEN, "User not logged in.").into_response();
    }
    Json(Value::Array(fake.targets())).into_response()
}

async fn server_info(State(fake): State<Arc<FakeInterop>>, headers: HeaderMap) -> impl IntoResponse {
    if !has_session(&headers) {
        return (StatusCode::FORBIDDEN, "User not logged in.").into_response();
    }
    if fake.expire_session.load(Ordering::SeqCst) {
        return (StatusCode::UNAUTHORIZED, "Session expired.").into_response();
    }
    if fake.fail_server_info.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }
    Json(json!({
        "message": "Fly safe",
        "message_timestamp": "2016-06-15 11:00:00.000000",
        "server_time": SERVER_TIME
    }))
    .into_response()
}

/// Start a fake interop server and return its base URL.
pub async fn start_fake_interop() -> (String, Arc<FakeInterop>) {
    let fake = Arc::new(FakeInterop::default());
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/telemetry", post(post_telemetry))
        .route("/api/targets", get(get_targets).post(post_target))
        .route("/api/server_info", get(server_info))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), fake)
}
