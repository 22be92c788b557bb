/*
[INPUT]:  TradeOgre API schema and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod account;
pub mod enums;
pub mod market;
pub mod requests;

pub use account::*;
pub use enums::*;
pub use market::*;
pub use requests::*;
