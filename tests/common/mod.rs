//! Shared utilities for integration testing.

use tempfile::TempDir;
use tokio::net::TcpListener;

use kas_server::config::AppConfig;
use kas_server::{HttpServer, Shutdown};

/// A running server bound to an ephemeral port, with its collections
/// stored in a private temp directory.
pub struct TestServer {
    pub base_url: String,
    pub config: AppConfig,
    shutdown: Shutdown,
    _data_dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a real server instance for one test.
pub async fn start_server() -> TestServer {
    let data_dir = tempfile::tempdir().unwrap();

    let mut config = AppConfig::default();
    config.storage.users_path = data_dir.path().join("data.xlsx");
    config.storage.news_path = data_dir.path().join("berita.xlsx");
    config.storage.dashboard_path = data_dir.path().join("saved.xlsx");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config.clone());
    let server_shutdown = shutdown.clone();
    tokio::spawn(async move {
        let _ = server.run(listener, &server_shutdown).await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        config,
        shutdown,
        _data_dir: data_dir,
    }
}
