//! The sidebar dashboard served over a real socket.

use dashboard::apps::sidebar_app;
use relay::{Server, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_get_page_renders_route_and_sets_cookie() {
    let config = ServerConfig::new().with_port(0);
    let server = Server::new(sidebar_app().unwrap(), config).bind().await.unwrap();
    let addr = server.local_addr();
    let cancel = CancellationToken::new();
    tokio::spawn(server.serve(cancel.clone()));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /page-2/1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    let response = String::from_utf8(buf).unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.to_ascii_lowercase().contains("set-cookie: relay_session="));
    assert!(response.contains("Oh cool, this is page 2.1!"));
    assert!(response.contains("<title>Dashboard</title>"));
    assert!(response.contains("data-relay-click=\"submenu-1\""));

    cancel.cancel();
}
