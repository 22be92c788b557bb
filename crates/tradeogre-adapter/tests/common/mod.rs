/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tradeogre-adapter tests

use std::sync::Arc;

use tradeogre_adapter::{DEFAULT_BASE_URL, MockTransport, TradeOgreClient};
use wiremock::MockServer;

#[allow(dead_code)]
pub const API_KEY: &str = "key";
#[allow(dead_code)]
pub const API_SECRET: &str = "secret";
/// `Basic base64("key:secret")`
#[allow(dead_code)]
pub const BASIC_AUTH: &str = "Basic a2V5OnNlY3JldA==";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Public client pointed at the mock server under `/api/v1/`
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> TradeOgreClient {
    TradeOgreClient::with_base_url(&format!("{}/api/v1/", server.uri())).expect("client init")
}

/// Public client whose transport replies `body` to every request
#[allow(dead_code)]
pub fn mock_client(body: &str) -> (TradeOgreClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::with_body(body));
    let client =
        TradeOgreClient::with_transport(DEFAULT_BASE_URL, transport.clone()).expect("client init");
    (client, transport)
}
