//! Tests for the streaming gateway client against a local HTTP stub.

use futures::StreamExt;
use taleweaver_core::{GenerateRequest, Message, SamplingParams};
use taleweaver_error::{GatewayErrorKind, TaleweaverErrorKind};
use taleweaver_interface::{StoryDriver, Streaming};
use taleweaver_models::{ApiToken, GatewayConfig, HuggingFaceClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves one canned response and reports the raw request it received.
async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let _ = tx.send(request);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/event-stream\r\nConnection: close\r\n\r\n{}",
            status_line, body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{}/v1", addr), rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&raw);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let lower = l.to_ascii_lowercase();
                    lower
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap())
                })
                .unwrap_or(0);
            if raw.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8(raw).unwrap()
}

fn request() -> GenerateRequest {
    GenerateRequest::new(
        vec![Message::system("rules"), Message::user("a lighthouse")],
        SamplingParams::new(0.9, 128, 0.5).unwrap(),
    )
}

#[tokio::test]
async fn test_streams_deltas_and_sends_bearer_token() {
    let body = concat!(
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\"}}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"The lamp \"}}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"flickered.\"},\"finish_reason\":\"stop\"}]}\n\n",
        "data: [DONE]\n\n",
    )
    .to_string();
    let (base_url, received) = serve_once("200 OK", body).await;
    let client = HuggingFaceClient::new(
        GatewayConfig::new(base_url, "tiny-model"),
        ApiToken::new("hf_test"),
    );

    let stream = client.generate_stream(&request()).await.unwrap();
    let chunks: Vec<_> = stream.collect().await;
    let text: String = chunks
        .iter()
        .map(|c| c.as_ref().unwrap().text().clone())
        .collect();

    assert_eq!(text, "The lamp flickered.");
    assert!(chunks.last().unwrap().as_ref().unwrap().is_final());

    let raw = received.await.unwrap();
    assert!(raw.starts_with("POST /v1/chat/completions"));
    let head = &raw[..raw.find("\r\n\r\n").unwrap()];
    let content_types = head
        .lines()
        .filter(|l| l.to_ascii_lowercase().starts_with("content-type:"))
        .count();
    assert_eq!(content_types, 1);
    assert!(head.to_ascii_lowercase().contains("accept: text/event-stream"));
    assert!(raw.to_ascii_lowercase().contains("authorization: bearer hf_test"));
    let json_start = raw.find("\r\n\r\n").unwrap() + 4;
    let sent: serde_json::Value = serde_json::from_str(&raw[json_start..]).unwrap();
    assert_eq!(sent["stream"], true);
    assert_eq!(sent["model"], "tiny-model");
    assert_eq!(sent["max_tokens"], 128);
    assert_eq!(sent["top_p"], 0.5);
    assert_eq!(sent["messages"][1]["content"], "a lighthouse");
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let (base_url, _received) =
        serve_once("401 Unauthorized", "{\"error\":\"Invalid token\"}".into()).await;
    let client = HuggingFaceClient::new(GatewayConfig::new(base_url, "m"), ApiToken::new("bad"));

    let err = match client.generate_stream(&request()).await {
        Ok(_) => panic!("expected authentication failure"),
        Err(e) => e,
    };

    match err.kind() {
        TaleweaverErrorKind::Gateway(g) => {
            assert!(matches!(g.kind, GatewayErrorKind::Authentication(_)))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_api_error_with_status() {
    let (base_url, _received) =
        serve_once("503 Service Unavailable", "model loading".into()).await;
    let client = HuggingFaceClient::new(GatewayConfig::new(base_url, "m"), ApiToken::new("t"));

    let err = match client.generate_stream(&request()).await {
        Ok(_) => panic!("expected api failure"),
        Err(e) => e,
    };

    match err.kind() {
        TaleweaverErrorKind::Gateway(g) => match &g.kind {
            GatewayErrorKind::Api { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "model loading");
            }
            other => panic!("unexpected gateway error: {:?}", other),
        },
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = HuggingFaceClient::new(
        GatewayConfig::new(format!("http://{}/v1", addr), "m"),
        ApiToken::new("t"),
    );

    let err = match client.generate_stream(&request()).await {
        Ok(_) => panic!("expected connection failure"),
        Err(e) => e,
    };

    assert!(matches!(
        err.kind(),
        TaleweaverErrorKind::Gateway(g) if matches!(g.kind, GatewayErrorKind::Http(_))
    ));
}

#[test]
fn test_driver_identity() {
    let client = HuggingFaceClient::new(GatewayConfig::default(), ApiToken::new("t"));

    assert_eq!(client.provider_name(), "huggingface");
    assert_eq!(client.model_name(), "HuggingFaceH4/zephyr-7b-beta");
}
