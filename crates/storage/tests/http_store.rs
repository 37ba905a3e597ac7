use std::net::SocketAddr;

use prep_core::model::{AnswerKind, SetRef};
use storage::repository::{QuestionStore, StoreError};
use storage::static_files::HttpQuestionStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SET_ONE: &str = r#"[
    {
        "question_id": 1,
        "question_text": "What does Amazon EC2 provide?",
        "options": [
            {"option_id": 1, "option_text": "Resizable compute capacity"},
            {"option_id": 2, "option_text": "Object storage"}
        ],
        "correct_answer_id": 1
    },
    {
        "question_id": 2,
        "question_text": "Which are pillars of the Well-Architected Framework? (Choose two.)",
        "options": [
            {"option_id": 1, "option_text": "Reliability"},
            {"option_id": 2, "option_text": "Elasticity"},
            {"option_id": 3, "option_text": "Security"}
        ],
        "correct_answer_id": [1, 3]
    }
]"#;

/// Serves `/data/set_1.json`, fails `/data/module_1.json` with a 500 and 404s the rest.
async fn serve_question_files() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = vec![0_u8; 4096];
                let mut read = 0;
                while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => read += n,
                    }
                }
                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = match path {
                    "/data/set_1.json" => ("200 OK", SET_ONE),
                    "/data/module_1.json" => ("500 Internal Server Error", "boom"),
                    _ => ("404 Not Found", "missing"),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

fn local_store(addr: SocketAddr) -> HttpQuestionStore {
    // Loopback requests must not go through a proxy from the environment.
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client");
    HttpQuestionStore::with_client(&format!("http://{addr}/data"), client).expect("store")
}

#[tokio::test]
async fn decodes_served_question_file() {
    let addr = serve_question_files().await;
    let store = local_store(addr);

    let questions = store.load_set(SetRef::question_set(1)).await.expect("load");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].kind(), AnswerKind::Single);
    assert_eq!(questions[1].kind(), AnswerKind::Multi { required: 2 });
}

#[tokio::test]
async fn missing_file_maps_to_not_found() {
    let addr = serve_question_files().await;
    let store = local_store(addr);

    let err = store.load_set(SetRef::question_set(9)).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound), "{err:?}");
}

#[tokio::test]
async fn server_error_keeps_status_code() {
    let addr = serve_question_files().await;
    let store = local_store(addr);

    let err = store.load_set(SetRef::module(1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Status(500)), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let store = local_store(addr);

    let err = store.load_set(SetRef::question_set(1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)), "{err:?}");
}
