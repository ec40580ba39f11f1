//! Exchange-native ticker parsing.
//!
//! Tickers look like:
//!
//! - `NSE:SBIN-EQ`, `NSE:NIFTY50-INDEX` (cash market: underlying + series)
//! - `NSE:NIFTY22NOVFUT`, `NSE:NIFTY22NOV18000CE` (monthly expiry)
//! - `NSE:NIFTY22N1718000CE` (weekly expiry: year, month char, day)

use crate::appendix::dates;
use crate::codes::{Exchange, OptionType, WireCode};
use crate::error::DecodeError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What kind of contract a ticker names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Cash,
    Future,
    Option,
}

/// A ticker split into its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub ticker: String,
    pub exchange: Exchange,
    pub underlying: String,
    pub kind: SymbolKind,
    /// Series for cash tickers (`EQ`, `BE`, `INDEX`).
    pub series: Option<String>,
    pub expiry_year: Option<u32>,
    pub expiry_month: Option<u32>,
    /// Only weekly tickers carry the day.
    pub expiry_day: Option<u32>,
    pub strike: Option<Decimal>,
    pub option_type: Option<OptionType>,
}

impl SymbolInfo {
    /// Full expiry date, when the ticker spells out the day.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.expiry_year? as i32,
            self.expiry_month?,
            self.expiry_day?,
        )
    }

    pub fn is_weekly(&self) -> bool {
        self.expiry_day.is_some()
    }
}

/// Parse a full ticker (`EXCHANGE:REST`).
pub fn parse_symbol(ticker: &str) -> Result<SymbolInfo, DecodeError> {
    let invalid = || DecodeError::Symbol(ticker.to_string());

    if !ticker.is_ascii() {
        return Err(invalid());
    }
    let (prefix, rest) = ticker.split_once(':').ok_or_else(invalid)?;
    let exchange = Exchange::from_symbol_prefix(prefix).ok_or_else(invalid)?;

    if let Some(parts) = parse_derivative(rest) {
        return Ok(SymbolInfo {
            ticker: ticker.to_string(),
            exchange,
            underlying: parts.underlying.to_string(),
            kind: if parts.option_type.is_some() {
                SymbolKind::Option
            } else {
                SymbolKind::Future
            },
            series: None,
            expiry_year: Some(dates::year_to_full(parts.yy)),
            expiry_month: Some(parts.month),
            expiry_day: parts.day,
            strike: parts.strike,
            option_type: parts.option_type,
        });
    }

    let (underlying, series) = rest.rsplit_once('-').ok_or_else(invalid)?;
    if underlying.is_empty() || series.is_empty() {
        return Err(invalid());
    }
    Ok(SymbolInfo {
        ticker: ticker.to_string(),
        exchange,
        underlying: underlying.to_string(),
        kind: SymbolKind::Cash,
        series: Some(series.to_string()),
        expiry_year: None,
        expiry_month: None,
        expiry_day: None,
        strike: None,
        option_type: None,
    })
}

/// Build a weekly option ticker, e.g. `NSE:NIFTY22N1718000CE`.
pub fn weekly_option_symbol(
    exchange: Exchange,
    underlying: &str,
    expiry: NaiveDate,
    strike: Decimal,
    option_type: OptionType,
) -> Option<String> {
    use chrono::Datelike;

    let month = dates::month_from_number(expiry.month())?;
    let month_char = dates::month_to_char(month)?;
    Some(format!(
        "{}:{}{:02}{}{}{}{}",
        exchange.as_str(),
        underlying,
        dates::year_to_short(expiry.year() as u32),
        month_char,
        dates::day_padded(expiry.day()),
        strike.normalize(),
        option_type.to_wire(),
    ))
}

/// Build a monthly contract ticker, e.g. `NSE:NIFTY22NOVFUT` or
/// `NSE:NIFTY22NOV18000CE`.
pub fn monthly_symbol(
    exchange: Exchange,
    underlying: &str,
    year: u32,
    month: u32,
    option: Option<(Decimal, OptionType)>,
) -> Option<String> {
    let month = dates::month_from_number(month)?;
    let tail = match option {
        Some((strike, option_type)) => format!("{}{}", strike.normalize(), option_type.to_wire()),
        None => "FUT".to_string(),
    };
    Some(format!(
        "{}:{}{:02}{}{}",
        exchange.as_str(),
        underlying,
        dates::year_to_short(year),
        month,
        tail
    ))
}

struct DerivativeParts<'a> {
    underlying: &'a str,
    yy: u32,
    month: u32,
    day: Option<u32>,
    strike: Option<Decimal>,
    option_type: Option<OptionType>,
}

/// Try every split point; the first one that yields a valid date fragment
/// followed by a valid contract tail wins.
fn parse_derivative(rest: &str) -> Option<DerivativeParts<'_>> {
    (1..rest.len()).find_map(|i| {
        let (underlying, tail) = rest.split_at(i);
        parse_expiry_and_tail(tail).map(|(yy, month, day, strike, option_type)| DerivativeParts {
            underlying,
            yy,
            month,
            day,
            strike,
            option_type,
        })
    })
}

type ExpiryAndTail = (u32, u32, Option<u32>, Option<Decimal>, Option<OptionType>);

fn parse_expiry_and_tail(s: &str) -> Option<ExpiryAndTail> {
    if s.len() < 5 || !s.as_bytes()[..2].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let yy: u32 = s[..2].parse().ok()?;

    // Monthly: YY + MMM
    if let Some(month) = dates::month_number(&s[2..5]) {
        if s.as_bytes()[2].is_ascii_alphabetic() {
            if let Some((strike, option_type)) = parse_contract_tail(&s[5..]) {
                return Some((yy, month, None, strike, option_type));
            }
        }
    }

    // Weekly: YY + M + DD
    let month = dates::month_number_from_char(s.as_bytes()[2] as char)?;
    let day = s
        .get(3..5)
        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(dates::day_unpadded)?;
    let (strike, option_type) = parse_contract_tail(&s[5..])?;
    // Weekly expiries only exist for options.
    option_type?;
    Some((yy, month, Some(day), strike, option_type))
}

fn parse_contract_tail(tail: &str) -> Option<(Option<Decimal>, Option<OptionType>)> {
    if tail == "FUT" {
        return Some((None, None));
    }
    if tail.len() < 3 {
        return None;
    }
    let (strike, code) = tail.split_at(tail.len() - 2);
    let option_type = OptionType::from_wire(code)?;
    if !strike.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let strike = Decimal::from_str(strike).ok()?;
    Some((Some(strike), Some(option_type)))
}
