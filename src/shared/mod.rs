//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod envelope;
pub mod serde_util;

pub use envelope::Envelope;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Exchange-qualified ticker (e.g. `"NSE:SBIN-EQ"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the ticker into exchange, underlying and expiry parts.
    pub fn parse(&self) -> Result<crate::symbol::SymbolInfo, crate::error::DecodeError> {
        crate::symbol::parse_symbol(&self.0)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── Bool sentinels ──────────────────────────────────────────────────────────

/// `"True"` / `"False"`, as the order endpoints expect.
pub fn true_false(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// `"1"` / `"0"`, as the data endpoints expect.
pub fn one_zero(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Comma-join symbols for query parameters and control frames.
pub fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_serde() {
        let symbol = Symbol::from("NSE:SBIN-EQ");
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"NSE:SBIN-EQ\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, back);
    }

    #[test]
    fn test_symbol_parse() {
        let info = Symbol::from("NSE:NIFTY22NOVFUT").parse().unwrap();
        assert_eq!(info.underlying, "NIFTY");
    }

    #[test]
    fn test_bool_sentinels() {
        assert_eq!(true_false(true), "True");
        assert_eq!(true_false(false), "False");
        assert_eq!(one_zero(true), "1");
        assert_eq!(one_zero(false), "0");
    }

    #[test]
    fn test_join_symbols() {
        let symbols = vec![Symbol::from("NSE:SBIN-EQ"), Symbol::from("NSE:TCS-EQ")];
        assert_eq!(join_symbols(&symbols), "NSE:SBIN-EQ,NSE:TCS-EQ");
        assert_eq!(join_symbols(&[]), "");
    }
}
