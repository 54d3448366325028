//! End-to-end tests against a server bound to a real socket.
//!
//! # Design
//! The server runs on its own current-thread runtime in a background thread,
//! bound to port 0. Requests go through ureq with status-as-error disabled so
//! 4xx responses come back as data and can be asserted on.

use std::net::SocketAddr;
use std::thread::{self, JoinHandle};

use serde_json::{json, Value};

struct Reply {
    status: u16,
    body: Value,
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn read(mut response: ureq::http::Response<ureq::Body>) -> Reply {
    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);
    Reply { status, body }
}

fn get(base: &str, path: &str) -> Reply {
    read(agent().get(&format!("{base}{path}")).call().expect("HTTP transport error"))
}

fn delete(base: &str, path: &str) -> Reply {
    read(agent().delete(&format!("{base}{path}")).call().expect("HTTP transport error"))
}

fn post(base: &str, path: &str, body: &Value) -> Reply {
    read(
        agent()
            .post(&format!("{base}{path}"))
            .content_type("application/json")
            .send(body.to_string().as_bytes())
            .expect("HTTP transport error"),
    )
}

fn std_listener() -> (std::net::TcpListener, SocketAddr) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();
    (listener, addr)
}

fn spawn_server() -> String {
    let (std_listener, addr) = std_listener();

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            item_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle_over_http() {
    let base = spawn_server();

    let reply = get(&base, "/health");
    assert_eq!(reply.status, 200);

    let reply = get(&base, "/items");
    assert_eq!(reply.body, json!([]));

    let item = json!({"name": "测试商品", "price": 99.99, "description": "d"});
    let reply = post(&base, "/items", &item);
    assert_eq!(reply.status, 201);
    assert_eq!(reply.body, item);

    let reply = get(&base, "/items/1");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, item);

    let reply = post(&base, "/items", &json!({"price": 99.99}));
    assert_eq!(reply.status, 422);

    let reply = delete(&base, "/items/1");
    assert_eq!(reply.status, 200);
    assert!(reply.body["message"].as_str().unwrap().contains('1'));

    let reply = delete(&base, "/items/1");
    assert_eq!(reply.status, 404);

    let reply = get(&base, "/items/1");
    assert_eq!(reply.status, 404);
}

#[test]
fn serve_stops_on_shutdown_signal() {
    let (std_listener, addr) = std_listener();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server: JoinHandle<Result<(), std::io::Error>> = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            item_server::serve(listener, async {
                rx.await.ok();
            })
            .await
        })
    });

    let reply = get(&format!("http://{addr}"), "/");
    assert_eq!(reply.status, 200);

    tx.send(()).unwrap();
    server.join().unwrap().unwrap();
}
