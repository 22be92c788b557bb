/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod public;
pub mod trade;
pub mod transport;
pub mod user;

pub use error::{Result, TradeOgreError};

pub use auth::Credentials;
pub use client::{AuthenticatedClient, ClientConfig, DEFAULT_BASE_URL, TradeOgreClient};
pub use transport::{HttpRequest, MockTransport, ReqwestTransport, Transport};
