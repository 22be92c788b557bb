/*
[INPUT]:  Wire string tokens and closed Rust enums
[OUTPUT]: Exact token <-> variant mapping and serde adapters
[POS]:    Codec layer - shared by market and account type hierarchies
[UPDATE]: When adding a new wire-encoded enum or changing token matching
*/

use std::fmt;

use thiserror::Error;

/// Raised when a wire token is not registered in a codec table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {label} token {token:?}")]
pub struct UnknownEnumToken {
    pub label: &'static str,
    pub token: String,
}

/// Table-driven bidirectional mapping between wire tokens and enum values
///
/// Matching is exact and case-sensitive. The label only appears in error
/// messages, so the same enum can be decoded under different labels.
#[derive(Clone, Copy)]
pub struct EnumCodec<T: 'static> {
    label: &'static str,
    table: &'static [(&'static str, T)],
}

impl<T> EnumCodec<T>
where
    T: Copy + PartialEq + 'static,
{
    pub const fn new(label: &'static str, table: &'static [(&'static str, T)]) -> Self {
        Self { label, table }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn decode(&self, token: &str) -> Result<T, UnknownEnumToken> {
        self.table
            .iter()
            .find(|(candidate, _)| *candidate == token)
            .map(|(_, value)| *value)
            .ok_or_else(|| UnknownEnumToken {
                label: self.label,
                token: token.to_string(),
            })
    }

    /// Canonical token for `value`.
    ///
    /// Every variant of a closed enum must appear in the table; the first
    /// registered token wins when a value is listed twice. A missing entry
    /// panics in debug builds and encodes as `""` in release builds.
    pub fn encode(&self, value: T) -> &'static str {
        let token = self
            .table
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(token, _)| *token);
        debug_assert!(token.is_some(), "no {} token registered for value", self.label);
        token.unwrap_or("")
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.iter().map(|(token, _)| *token)
    }
}

impl<T: 'static> fmt::Debug for EnumCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.table.iter().map(|(token, _)| *token).collect();
        f.debug_struct("EnumCodec")
            .field("label", &self.label)
            .field("tokens", &tokens)
            .finish()
    }
}

/// A closed enum with a registered wire vocabulary
pub trait WireEnum: Copy + PartialEq + Sized + 'static {
    const LABEL: &'static str;
    const TOKENS: &'static [(&'static str, Self)];

    fn codec() -> EnumCodec<Self> {
        EnumCodec::new(Self::LABEL, Self::TOKENS)
    }
}

/// Serde adapter for `#[serde(with = "crate::codec::wire")]` fields
pub mod wire {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    use super::WireEnum;

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: WireEnum,
    {
        serializer.serialize_str(T::codec().encode(*value))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: WireEnum,
    {
        deserializer.deserialize_str(TokenVisitor(PhantomData))
    }

    struct TokenVisitor<T>(PhantomData<T>);

    impl<T: WireEnum> Visitor<'_> for TokenVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a {} token", T::LABEL)
        }

        fn visit_str<E>(self, token: &str) -> Result<T, E>
        where
            E: de::Error,
        {
            T::codec().decode(token).map_err(E::custom)
        }
    }
}
