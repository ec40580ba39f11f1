//! Enum codec tables — wire codes ↔ domain tags.
//!
//! Every categorical field the API sends as a bare number or short string
//! has one table here. The table is the single source of truth: decoding is
//! an exact-key lookup, encoding and descriptions are generated from the same
//! rows so the two directions cannot drift apart.
//!
//! Unknown wire codes decode to `None`. Callers treat that as "unrecognized
//! category", never as a failure.
//!
//! Some fields can also be recovered from prose ([`FromDescription`]). That
//! path is heuristic and lossy; see [`rules`].

/// A categorical field with a fixed wire-code table.
pub trait WireCode: Sized + Copy + Eq + 'static {
    /// The wire representation (`i32` or `&'static str`).
    type Wire: Copy + PartialEq + std::fmt::Debug + 'static;

    /// One `(wire code, tag, description)` row per tag.
    const TABLE: &'static [(Self::Wire, Self, &'static str)];

    /// Decode a wire code. Unknown codes yield `None`.
    ///
    /// Accepts anything the wire type compares against, so string codes can
    /// be looked up straight from a borrowed `&str`.
    fn from_wire<W: Copy>(code: W) -> Option<Self>
    where
        Self::Wire: PartialEq<W>,
    {
        Self::TABLE
            .iter()
            .find(|(wire, _, _)| *wire == code)
            .map(|(_, tag, _)| *tag)
    }

    /// Encode back to the wire code.
    fn to_wire(self) -> Self::Wire;

    /// Human readable description.
    fn describe(self) -> &'static str;

    /// Every defined tag, in table order.
    fn all() -> Vec<Self> {
        Self::TABLE.iter().map(|(_, tag, _)| *tag).collect()
    }
}

/// Best-effort recovery of a tag from free text.
///
/// Rules are evaluated in order and the first match wins; unmatched text
/// falls back to [`FromDescription::DEFAULT`].
pub trait FromDescription: WireCode {
    const RULES: &'static [Rule<Self>];
    const DEFAULT: Self;

    fn parse_description(text: &str) -> Self {
        first_match(text, Self::RULES).unwrap_or(Self::DEFAULT)
    }

    /// Shortcut for `parse_description(text).to_wire()`.
    fn wire_from_description(text: &str) -> Self::Wire {
        Self::parse_description(text).to_wire()
    }
}

/// Declares a domain enum together with its wire table.
///
/// Each row is `Variant = wire_code, "TAG", "description";`. The tag is the
/// serde representation of the domain enum.
macro_rules! wire_codec {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $wire:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:expr, $tag:literal, $desc:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $crate::codes::WireCode for $name {
            type Wire = $wire;

            const TABLE: &'static [($wire, Self, &'static str)] = &[
                $( ($code, $name::$variant, $desc), )+
            ];

            fn to_wire(self) -> $wire {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn describe(self) -> &'static str {
                match self {
                    $( $name::$variant => $desc, )+
                }
            }
        }

        impl $name {
            /// Stable domain tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_codec;

pub mod exchange;
pub mod holding;
pub mod instrument;
pub mod order;
pub mod rules;
pub mod segment;

pub use exchange::Exchange;
pub use holding::{HoldingType, ProductType};
pub use instrument::{InstrumentType, OptionType};
pub use order::{OrderSide, OrderSource, OrderStatus, OrderType, OrderValidity, PositionSide};
pub use rules::{first_match, Pattern, Rule};
pub use segment::Segment;
