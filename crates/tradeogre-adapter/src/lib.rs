/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public TradeOgre adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod codec;
pub mod http;
pub mod types;

pub use codec::{EnumCodec, UnknownEnumToken, WireEnum};

// Re-export commonly used types from http
pub use http::{
    AuthenticatedClient,
    ClientConfig,
    Credentials,
    DEFAULT_BASE_URL,
    HttpRequest,
    MockTransport,
    ReqwestTransport,
    Result,
    TradeOgreClient,
    TradeOgreError,
    Transport,
};

// Re-export all types
pub use types::*;
