// tienda-client/tests/client_integration.rs
// Integration tests against an unreachable server

use tienda_client::{ClientConfig, ClientError};

#[tokio::test]
async fn test_unreachable_server_reports_http_error() {
    let client = ClientConfig::new("http://127.0.0.1:9")
        .with_timeout(2)
        .build_http_client()
        .unwrap();

    let result = client.get_store(1).await;
    assert!(matches!(result, Err(ClientError::Http(_))));

    let result = client.get_master_categories().await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn test_client_keeps_config() {
    let client = ClientConfig::new("http://localhost:5000")
        .with_token("tok")
        .build_http_client()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(client.token(), Some("tok"));
}
