//! The transport refuses to negotiate below TLS 1.2.

use api_client::{Client, ClientError, RequestContext};

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A TLS record carrying a ServerHello that selects TLS 1.0
/// (`TLS_RSA_WITH_AES_128_CBC_SHA`, no extensions).
fn tls10_server_hello() -> Vec<u8> {
    let mut hello = vec![
        0x02, // handshake type: server_hello
        0x00, 0x00, 0x26, // length: 38
        0x03, 0x01, // server_version: TLS 1.0
    ];
    hello.extend_from_slice(&[0x42; 32]); // random
    hello.push(0x00); // session id length
    hello.extend_from_slice(&[0x00, 0x2f]); // cipher suite
    hello.push(0x00); // compression: null

    let mut record = vec![0x16, 0x03, 0x01]; // handshake record, TLS 1.0
    record.extend_from_slice(&(hello.len() as u16).to_be_bytes());
    record.extend_from_slice(&hello);
    record
}

/// **VALUE**: A server that only speaks TLS 1.0 gets no request at all.
///
/// **WHY THIS MATTERS**: Downgraded TLS would expose the bearer token to
/// well-known protocol attacks.
///
/// **BUG THIS CATCHES**: The minimum TLS version being dropped from the
/// transport builder, or a TLS backend that silently negotiates 1.0.
#[tokio::test]
async fn given_tls10_only_server_when_requesting_then_handshake_fails_as_transport_error() {
    // GIVEN: A raw TCP server that answers any ClientHello with a TLS 1.0 ServerHello
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut client_hello = [0u8; 4096];
        let read = socket.read(&mut client_hello).await.unwrap();
        socket.write_all(&tls10_server_hello()).await.unwrap();
        let _ = socket.flush().await;
        // Keep the socket open until the client gives up.
        let _ = socket.read(&mut client_hello).await;
        read
    });

    let client = Client::new(
        "sk-tls-floor-test",
        &format!("https://127.0.0.1:{port}"),
        "",
    )
    .unwrap();

    // WHEN: Making any request
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        client.get_project(&RequestContext::background(), "p-1"),
    )
    .await
    .expect("handshake should fail fast, not hang");

    // THEN: The client sent a ClientHello but never completed a request
    let err = result.unwrap_err();
    assert!(
        matches!(err, ClientError::Transport { .. }),
        "expected a transport error, got {err}"
    );
    assert!(err.is_transport());
    assert!(err.api_error().is_none());

    let client_hello_len = server.await.unwrap();
    assert!(client_hello_len > 0, "client should have started a handshake");
}
