//! Query builders for the data endpoints.

use super::Resolution;
use crate::codes::WireCode;
use crate::error::SdkError;
use crate::shared::{join_symbols, one_zero, Symbol};
use chrono::NaiveDate;

/// Upper bound on symbols per `/quotes` call.
pub const MAX_QUOTE_SYMBOLS: usize = 50;

/// Candle range, either as epoch seconds or as calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    Epoch { from: i64, to: i64 },
    Dates { from: NaiveDate, to: NaiveDate },
}

impl HistoryRange {
    fn date_format(&self) -> &'static str {
        match self {
            HistoryRange::Epoch { .. } => "0",
            HistoryRange::Dates { .. } => "1",
        }
    }

    fn bounds(&self) -> (String, String) {
        match self {
            HistoryRange::Epoch { from, to } => (from.to_string(), to.to_string()),
            HistoryRange::Dates { from, to } => (
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string(),
            ),
        }
    }

    fn is_ordered(&self) -> bool {
        match self {
            HistoryRange::Epoch { from, to } => from <= to,
            HistoryRange::Dates { from, to } => from <= to,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub resolution: Resolution,
    pub range: HistoryRange,
    /// Continuous data for futures and options.
    pub continuous: bool,
}

impl HistoryRequest {
    pub fn new(symbol: impl Into<Symbol>, resolution: Resolution, range: HistoryRange) -> Self {
        Self {
            symbol: symbol.into(),
            resolution,
            range,
            continuous: false,
        }
    }

    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, SdkError> {
        if self.symbol.as_str().is_empty() {
            return Err(SdkError::Validation("history symbol is empty".to_string()));
        }
        if !self.range.is_ordered() {
            return Err(SdkError::Validation(format!(
                "history range ends before it starts: {:?}",
                self.range
            )));
        }
        let (from, to) = self.range.bounds();
        Ok(vec![
            ("symbol", self.symbol.as_str().to_string()),
            ("resolution", self.resolution.to_wire().to_string()),
            ("date_format", self.range.date_format().to_string()),
            ("range_from", from),
            ("range_to", to),
            ("cont_flag", one_zero(self.continuous).to_string()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotesRequest {
    pub symbols: Vec<Symbol>,
}

impl QuotesRequest {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, SdkError> {
        if self.symbols.is_empty() {
            return Err(SdkError::Validation("quotes need at least one symbol".to_string()));
        }
        if self.symbols.len() > MAX_QUOTE_SYMBOLS {
            return Err(SdkError::Validation(format!(
                "quotes take at most {} symbols, got {}",
                MAX_QUOTE_SYMBOLS,
                self.symbols.len()
            )));
        }
        Ok(vec![("symbols", join_symbols(&self.symbols))])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepthRequest {
    pub symbol: Symbol,
    /// Ask for the OHLCV fields alongside the book.
    pub include_ohlcv: bool,
}

impl DepthRequest {
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            include_ohlcv: true,
        }
    }

    pub fn with_ohlcv(mut self, include_ohlcv: bool) -> Self {
        self.include_ohlcv = include_ohlcv;
        self
    }

    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, SdkError> {
        if self.symbol.as_str().is_empty() {
            return Err(SdkError::Validation("depth symbol is empty".to_string()));
        }
        Ok(vec![
            ("symbol", self.symbol.as_str().to_string()),
            ("ohlcv_flag", one_zero(self.include_ohlcv).to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_query_epoch() {
        let req = HistoryRequest::new(
            "NSE:SBIN-EQ",
            Resolution::Minute5,
            HistoryRange::Epoch { from: 1700000000, to: 1700086400 },
        );
        let query = req.to_query().unwrap();
        assert_eq!(
            query,
            vec![
                ("symbol", "NSE:SBIN-EQ".to_string()),
                ("resolution", "5".to_string()),
                ("date_format", "0".to_string()),
                ("range_from", "1700000000".to_string()),
                ("range_to", "1700086400".to_string()),
                ("cont_flag", "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_history_query_dates() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let req = HistoryRequest::new("NSE:NIFTY24JANFUT", Resolution::Day, HistoryRange::Dates { from, to })
            .with_continuous(true);
        let query = req.to_query().unwrap();
        assert!(query.contains(&("resolution", "D".to_string())));
        assert!(query.contains(&("date_format", "1".to_string())));
        assert!(query.contains(&("range_from", "2024-01-01".to_string())));
        assert!(query.contains(&("cont_flag", "1".to_string())));
    }

    #[test]
    fn test_history_rejects_inverted_range() {
        let req = HistoryRequest::new(
            "NSE:SBIN-EQ",
            Resolution::Day,
            HistoryRange::Epoch { from: 10, to: 5 },
        );
        assert!(matches!(req.to_query(), Err(SdkError::Validation(_))));
    }

    #[test]
    fn test_quotes_query() {
        let req = QuotesRequest::new(["NSE:SBIN-EQ", "NSE:TCS-EQ"]);
        assert_eq!(
            req.to_query().unwrap(),
            vec![("symbols", "NSE:SBIN-EQ,NSE:TCS-EQ".to_string())]
        );
        assert!(QuotesRequest::new(Vec::<Symbol>::new()).to_query().is_err());
        let too_many = QuotesRequest::new((0..51).map(|i| format!("NSE:S{}-EQ", i)));
        assert!(too_many.to_query().is_err());
    }

    #[test]
    fn test_depth_query() {
        let req = DepthRequest::new("NSE:SBIN-EQ").with_ohlcv(false);
        assert_eq!(
            req.to_query().unwrap(),
            vec![
                ("symbol", "NSE:SBIN-EQ".to_string()),
                ("ohlcv_flag", "0".to_string()),
            ]
        );
    }
}
