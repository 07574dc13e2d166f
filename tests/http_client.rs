use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use match_simulator::{
    MatchBoard, MatchClient, MatchListObserver, MatchSource, RefreshStatus, SimulationEngine,
    SimulatorError,
};

const MATCHES_JSON: &str = r#"[
    {
        "place": {"name": "Allianz Parque", "image": "https://example.com/allianz.png"},
        "description": "Derby day.",
        "homeTeam": {"name": "Palmeiras", "image": "https://example.com/pal.png", "stars": 3, "score": null},
        "visitorTeam": {"name": "Corinthians", "image": "https://example.com/cor.png", "stars": 5, "score": null}
    },
    {
        "place": {"name": "Morumbi", "image": "https://example.com/morumbi.png"},
        "description": "League match.",
        "homeTeam": {"name": "São Paulo", "image": "https://example.com/spfc.png", "stars": 4, "score": null},
        "visitorTeam": {"name": "Santos", "image": "https://example.com/san.png", "stars": 2, "score": null}
    }
]"#;

/// Serve canned HTTP responses, one per connection, and return the URL to
/// fetch them from.
async fn serve(responses: Vec<(&'static str, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        for (status_line, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}/matches.json")
}

async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    serve(vec![(status_line, body)]).await
}

/// Client that ignores proxy settings from the environment.
fn local_client(url: impl Into<String>) -> MatchClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    MatchClient::with_client(http).with_endpoint(url)
}

#[derive(Debug, Default)]
struct Screen {
    list_changes: usize,
    item_changes: Vec<usize>,
    errors: usize,
}

impl MatchListObserver for Screen {
    fn on_list_changed(&mut self) {
        self.list_changes += 1;
    }

    fn on_item_changed(&mut self, index: usize) {
        self.item_changes.push(index);
    }

    fn on_fetch_failed(&mut self, error: &SimulatorError) {
        assert!(error.is_fetch_error());
        self.errors += 1;
    }
}

#[tokio::test]
async fn test_fetch_matches_over_http() {
    let url = serve_once("200 OK", MATCHES_JSON).await;
    let client = local_client(url);

    let matches = client.fetch_matches().await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].place.name, "Allianz Parque");
    assert_eq!(matches[0].home_team.name, "Palmeiras");
    assert_eq!(matches[0].visitor_team.stars, 5);
    assert_eq!(matches[1].description, "League match.");
    assert_eq!(matches[1].visitor_team.image, "https://example.com/san.png");
    assert!(matches.iter().all(|m| m.scores().is_none()));
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let url = serve_once("500 Internal Server Error", "").await;
    let client = local_client(url.clone());

    let err = client.get_matches().await.unwrap_err();

    match err {
        SimulatorError::UnexpectedStatus { url: failed, status } => {
            assert_eq!(failed, url);
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let url = serve_once("200 OK", r#"{"matches": []}"#).await;
    let client = local_client(url);

    let err = client.get_matches().await.unwrap_err();

    assert!(matches!(err, SimulatorError::Decode { .. }));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = local_client(format!("http://{addr}/matches.json"));

    let err = client.get_matches().await.unwrap_err();

    assert!(matches!(err, SimulatorError::Http { .. }));
}

#[tokio::test]
async fn test_board_refresh_and_simulate() {
    let url = serve_once("200 OK", MATCHES_JSON).await;
    let mut board = MatchBoard::new(
        local_client(url),
        SimulationEngine::from_entropy(),
        Screen::default(),
    );

    assert_eq!(board.refresh().await, RefreshStatus::Applied { count: 2 });
    assert_eq!(board.simulate(), 2);

    let screen = board.matches().observer();
    assert_eq!(screen.list_changes, 1);
    assert_eq!(screen.item_changes, vec![0, 1]);

    let derby = board.select(0).unwrap();
    assert!(derby.home_team.score.unwrap() <= 3);
    assert!(derby.visitor_team.score.unwrap() <= 5);
    assert_eq!(derby.place.name, "Allianz Parque");
}

#[tokio::test]
async fn test_board_keeps_list_when_server_fails() {
    let url = serve(vec![
        ("200 OK", MATCHES_JSON),
        ("500 Internal Server Error", ""),
        ("200 OK", "not json"),
    ])
    .await;
    let mut board = MatchBoard::new(
        local_client(url),
        SimulationEngine::seeded(8),
        Screen::default(),
    );
    assert_eq!(board.refresh().await, RefreshStatus::Applied { count: 2 });
    let before = board.select(1).unwrap();

    assert_eq!(board.refresh().await, RefreshStatus::Failed);
    assert_eq!(board.refresh().await, RefreshStatus::Failed);

    let screen = board.matches().observer();
    assert_eq!(screen.list_changes, 1);
    assert_eq!(screen.errors, 2);
    assert_eq!(board.matches().len(), 2);
    assert_eq!(board.select(1).unwrap(), before);
}
