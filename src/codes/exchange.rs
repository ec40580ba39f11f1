//! Exchange codes.

use super::rules::{Pattern, Rule};
use super::{wire_codec, FromDescription};

wire_codec! {
    /// Exchange an instrument is listed on.
    pub enum Exchange: i32 {
        Nse = 10, "NSE", "National Stock Exchange";
        Mcx = 11, "MCX", "Multi Commodity Exchange";
        Bse = 12, "BSE", "Bombay Stock Exchange";
    }
}

impl FromDescription for Exchange {
    const RULES: &'static [Rule<Self>] = &[
        Rule {
            all_of: &[&[Pattern::Word("mcx"), Pattern::Contains("multi commodity")]],
            result: Exchange::Mcx,
        },
        Rule {
            all_of: &[&[Pattern::Word("bse"), Pattern::Contains("bombay")]],
            result: Exchange::Bse,
        },
        Rule {
            all_of: &[&[Pattern::Word("nse"), Pattern::Contains("national")]],
            result: Exchange::Nse,
        },
    ];

    const DEFAULT: Self = Exchange::Nse;
}

impl Exchange {
    /// Prefix used in symbol tickers (`"NSE:SBIN-EQ"`).
    pub fn from_symbol_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "NSE" => Some(Exchange::Nse),
            "MCX" => Some(Exchange::Mcx),
            "BSE" => Some(Exchange::Bse),
            _ => None,
        }
    }
}
