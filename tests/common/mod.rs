//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use wellness_site::{pages, HttpServer, RouteTable, Shutdown, SiteConfig};

/// Start the site server on an OS-assigned port.
///
/// Returns the bound address and the shutdown coordinator; trigger it at
/// the end of the test to stop the server.
pub async fn start_site(config: SiteConfig) -> (SocketAddr, Shutdown) {
    let table = RouteTable::build(pages::routes().unwrap()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, table);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
