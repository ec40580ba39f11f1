//! Market segment codes.

use super::rules::{Pattern, Rule};
use super::{wire_codec, FromDescription};

wire_codec! {
    /// Market segment.
    pub enum Segment: i32 {
        Cm = 10, "CM", "Capital Market";
        Fo = 11, "FO", "Equity Derivatives";
        Cd = 12, "CD", "Currency Derivatives";
        Com = 20, "COM", "Commodity Derivatives";
    }
}

const COMMODITY: &[Pattern] = &[
    Pattern::Contains("commodit"),
    Pattern::Word("mcx"),
    Pattern::Word("com"),
];

const CURRENCY: &[Pattern] = &[
    Pattern::Contains("currenc"),
    Pattern::Word("cd"),
    Pattern::Word("cds"),
];

const DERIVATIVE: &[Pattern] = &[
    Pattern::Contains("derivative"),
    Pattern::Contains("future"),
    Pattern::Contains("option"),
    Pattern::Word("f&o"),
    Pattern::Word("fo"),
    Pattern::Word("fno"),
];

impl FromDescription for Segment {
    // Commodity and currency are checked before the generic derivative
    // keywords: "commodity futures" is a COM instrument, not FO.
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            all_of: &[COMMODITY],
            result: Segment::Com,
        },
        Rule {
            all_of: &[CURRENCY],
            result: Segment::Cd,
        },
        Rule {
            all_of: &[DERIVATIVE],
            result: Segment::Fo,
        },
    ];

    const DEFAULT: Self = Segment::Cm;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::WireCode;

    #[test]
    fn test_wire_codes() {
        assert_eq!(Segment::from_wire(20), Some(Segment::Com));
        assert_eq!(Segment::from_wire(13), None);
        assert_eq!(Segment::Cd.to_wire(), 12);
    }

    #[test]
    fn test_commodity_wins_over_future() {
        assert_eq!(Segment::parse_description("Gold future on commodity"), Segment::Com);
        assert_eq!(Segment::parse_description("future"), Segment::Fo);
    }

    #[test]
    fn test_currency_wins_over_option() {
        assert_eq!(Segment::parse_description("USDINR currency option"), Segment::Cd);
    }

    #[test]
    fn test_default_is_cash_market() {
        assert_eq!(Segment::parse_description("Reliance Industries Ltd"), Segment::Cm);
        assert_eq!(Segment::wire_from_description(""), 10);
    }

    #[test]
    fn test_descriptions_recover_their_own_tag() {
        for tag in Segment::all() {
            assert_eq!(Segment::parse_description(tag.describe()), tag);
        }
    }
}
