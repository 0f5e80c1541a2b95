//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;
use tronics::config::TronicsConfig;
use tronics::http::HttpServer;
use tronics::lifecycle::Shutdown;
use tronics::registry::Registry;
use tronics_sdk::ProductClient;

/// Start a server on `addr` around `registry`.
///
/// The returned handle stops the server when triggered.
pub async fn start_server(addr: SocketAddr, registry: Registry) -> Shutdown {
    let mut config = TronicsConfig::default();
    config.listener.host = addr.ip().to_string();
    config.listener.port = addr.port();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_registry(config, registry);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

#[allow(dead_code)]
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

/// SDK client that bypasses any system proxy.
pub fn client(addr: SocketAddr) -> ProductClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ProductClient::with_client(http, &base_url(addr))
}
