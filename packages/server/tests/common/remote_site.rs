//! A throwaway "remote" website on a loopback port, for exercising the real
//! HTTP fetcher end to end.

use std::time::Duration;

use axum::{
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{GUIDE_PAGE, SLEEP_PAGE};

pub struct RemoteSite {
    base_url: String,
    handle: JoinHandle<()>,
}

impl RemoteSite {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/sleep", get(|| async { Html(SLEEP_PAGE) }))
            .route("/guide", get(|| async { Html(GUIDE_PAGE) }))
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, "no such page") }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/moved", get(|| async { Redirect::temporary("/sleep") }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Html(SLEEP_PAGE)
                }),
            )
            .route(
                "/echo-agent",
                get(|headers: HeaderMap| async move {
                    let agent = headers
                        .get(USER_AGENT)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("none")
                        .to_string();
                    Html(format!(
                        "<title>Agent echo</title><main><p>User agent header received: {agent}</p></main>"
                    ))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for RemoteSite {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A loopback URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
