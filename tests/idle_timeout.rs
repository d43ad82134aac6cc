//! Idle-timeout shutdown behavior.

use std::time::Duration;

use filedrop::config::Limits;

mod common;

use common::{send_payload, start_server, ACK_RECEIVED};

#[tokio::test]
async fn idle_server_shuts_down_and_frees_the_port() {
    let limits = Limits {
        idle_timeout: Duration::from_millis(200),
        ..Limits::default()
    };
    let server = start_server(29811, limits).await;

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop on its own")
        .unwrap();
    assert!(result.is_ok(), "idle timeout is a successful shutdown");

    // Port is free again once the listener is closed.
    let rebound = tokio::net::TcpListener::bind("0.0.0.0:29811").await;
    assert!(rebound.is_ok());
}

#[tokio::test]
async fn idle_timer_restarts_after_each_connection() {
    let limits = Limits {
        idle_timeout: Duration::from_millis(400),
        ..Limits::default()
    };
    let server = start_server(29812, limits).await;

    // Keep the server busy past the first idle window; each completed
    // transfer re-arms the timer.
    tokio::time::sleep(Duration::from_millis(250)).await;
    let ack = send_payload(server.addr, b"one").await;
    assert_eq!(ack, ACK_RECEIVED);

    tokio::time::sleep(Duration::from_millis(250)).await;
    let ack = send_payload(server.addr, b"two").await;
    assert_eq!(ack, ACK_RECEIVED);

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop after the final idle window")
        .unwrap();
    assert!(result.is_ok());

    let one = tokio::fs::read_to_string(server.dir.join("1.file")).await.unwrap();
    let two = tokio::fs::read_to_string(server.dir.join("2.file")).await.unwrap();
    assert_eq!(one, "one");
    assert_eq!(two, "two");
}
