//! One-shot fetch of the user list.
//!
//! [`load_users`] wraps the request in a `bubbletea_rs::Cmd`; its outcome
//! arrives in `update` as a [`UsersLoadedMsg`].

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::user::User;
use bubbletea_rs::{Cmd, Msg};
use std::time::Instant;

/// Outcome of the fetch.
#[derive(Debug)]
pub struct UsersLoadedMsg(pub Result<Vec<User>>);

/// Decodes a members payload.
pub fn parse_users(body: &[u8]) -> Result<Vec<User>> {
    Ok(serde_json::from_slice(body)?)
}

/// Performs the GET and decodes the body.
pub async fn fetch_users(config: &Config) -> Result<Vec<User>> {
    let url = config.url.as_str();
    let transport = |source| DashboardError::Transport {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(transport)?;

    let started = Instant::now();
    let response = client.get(url).send().await.map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DashboardError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(transport)?;
    let users = parse_users(&body)?;
    tracing::info!(
        url,
        count = users.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "users fetched"
    );
    Ok(users)
}

/// Command that fetches the users once and reports back.
pub fn load_users(config: Config) -> Cmd {
    Box::pin(async move {
        tracing::debug!(url = %config.url, "fetching users");
        let result = fetch_users(&config).await;
        Some(Box::new(UsersLoadedMsg(result)) as Msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_users() {
        let body = br#"[{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}]"#;
        let users = parse_users(body).unwrap();
        assert_eq!(users, vec![User::new("1", "Aaron Miles", "aaron@mailinator.com", "member")]);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_users(br#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, DashboardError::Decode(_)));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(parse_users(br#"[{"id":"1","name":"x"}]"#).is_err());
    }

    /// Serves one canned HTTP response on a local port and returns its URL.
    async fn serve_once(response: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/members.json")
    }

    #[tokio::test]
    async fn test_server_error_status_is_reported() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let config = Config {
            url,
            timeout: Duration::from_secs(5),
        };
        let err = fetch_users(&config).await.unwrap_err();
        match err {
            DashboardError::Status { status, .. } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_status_decodes_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 69\r\nconnection: close\r\n\r\n[{\"id\":\"1\",\"name\":\"Aaron\",\"email\":\"a@mailinator.com\",\"role\":\"admin\"}]",
        )
        .await;
        let config = Config {
            url,
            timeout: Duration::from_secs(5),
        };
        let users = fetch_users(&config).await.unwrap();
        assert_eq!(users, vec![User::new("1", "Aaron", "a@mailinator.com", "admin")]);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_transport_error() {
        let config = Config {
            url: "http://127.0.0.1:9/members.json".to_string(),
            timeout: Duration::from_secs(2),
        };
        let msg = load_users(config).await.unwrap();
        let loaded = msg.downcast::<UsersLoadedMsg>().unwrap();
        assert!(matches!(loaded.0, Err(DashboardError::Transport { .. })));
    }
}
