//! Conversions: market wire types → market domain types.

use super::wire::{
    DepthResponse, HistoryResponse, MarketStatusResponse, QuotesResponse, RawCandle, RawDepth,
    RawDepthLevel, RawMarketStatus, RawQuote,
};
use super::{
    Candle, DepthLevel, HistoryOverall, MarketDepth, MarketHistory, MarketStatus, Quote,
    QuoteError, Quotes,
};
use crate::codes::{Exchange, Segment, WireCode};
use crate::error::{DecodeError, SdkError};
use crate::shared::{serde_util, Symbol};

impl From<RawMarketStatus> for MarketStatus {
    fn from(raw: RawMarketStatus) -> Self {
        MarketStatus {
            exchange: raw.exchange.and_then(Exchange::from_wire),
            segment: raw.segment.and_then(Segment::from_wire),
            market_type: raw.market_type,
            status: raw.status,
        }
    }
}

impl MarketStatus {
    pub(crate) fn list_from(resp: MarketStatusResponse) -> Result<Vec<Self>, SdkError> {
        resp.envelope.ensure_ok()?;
        let raw = resp
            .market_status
            .ok_or(DecodeError::MissingField("marketStatus"))?;
        Ok(raw.into_iter().map(MarketStatus::from).collect())
    }
}

// ─── History ─────────────────────────────────────────────────────────────────

impl TryFrom<RawCandle> for Candle {
    type Error = DecodeError;

    fn try_from(raw: RawCandle) -> Result<Self, Self::Error> {
        let RawCandle(ts, open, high, low, close, volume) = raw;
        Ok(Candle {
            timestamp: serde_util::from_epoch_secs(ts)?,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

impl HistoryOverall {
    pub fn from_raw(raw: &[RawCandle]) -> Self {
        let (Some(first), Some(last)) = (raw.first(), raw.last()) else {
            return HistoryOverall::default();
        };
        let seed = HistoryOverall {
            from_date: first.0,
            to_date: last.0,
            open: first.1,
            high: first.2,
            low: first.3,
            close: last.4,
            volume: 0,
        };
        raw.iter().fold(seed, |mut acc, c| {
            acc.high = acc.high.max(c.2);
            acc.low = acc.low.min(c.3);
            acc.volume += c.5;
            acc
        })
    }
}

impl TryFrom<HistoryResponse> for MarketHistory {
    type Error = SdkError;

    fn try_from(resp: HistoryResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp.candles.ok_or(DecodeError::MissingField("candles"))?;
        let overall = HistoryOverall::from_raw(&raw);
        let candles = raw
            .into_iter()
            .map(Candle::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MarketHistory { candles, overall })
    }
}

// ─── Quotes ──────────────────────────────────────────────────────────────────

fn split_quote(raw: RawQuote) -> Result<Result<Quote, QuoteError>, DecodeError> {
    let v = raw.v;
    if raw.s != "ok" || v.errmsg.is_some() {
        return Ok(Err(QuoteError {
            symbol: raw.n,
            code: v.code.unwrap_or_default(),
            message: v.errmsg.unwrap_or(raw.s),
        }));
    }
    let updated_at = match v.tt {
        0 => None,
        tt => Some(serde_util::from_epoch_secs(tt)?),
    };
    Ok(Ok(Quote {
        symbol: raw.n,
        short_name: v.short_name,
        description: v.description,
        exchange: v.exchange,
        ltp: v.lp,
        change: v.ch,
        change_percent: v.chp,
        open: v.open_price,
        high: v.high_price,
        low: v.low_price,
        prev_close: v.prev_close_price,
        bid: v.bid,
        ask: v.ask,
        spread: v.spread,
        volume: v.volume,
        fy_token: v.fy_token,
        updated_at,
    }))
}

impl TryFrom<QuotesResponse> for Quotes {
    type Error = SdkError;

    fn try_from(resp: QuotesResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp.d.ok_or(DecodeError::MissingField("d"))?;
        let mut quotes = Vec::with_capacity(raw.len());
        let mut errors = Vec::new();
        for entry in raw {
            match split_quote(entry)? {
                Ok(quote) => quotes.push(quote),
                Err(error) => errors.push(error),
            }
        }
        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "quotes returned per-symbol errors");
        }
        Ok(Quotes { quotes, errors })
    }
}

// ─── Depth ───────────────────────────────────────────────────────────────────

impl From<RawDepthLevel> for DepthLevel {
    fn from(raw: RawDepthLevel) -> Self {
        DepthLevel {
            price: raw.price,
            quantity: raw.volume,
            orders: raw.ord,
        }
    }
}

fn depth_from_raw(symbol: String, raw: RawDepth) -> Result<MarketDepth, DecodeError> {
    let last_traded_at = match raw.ltt {
        0 => None,
        ltt => Some(serde_util::from_epoch_secs(ltt)?),
    };
    Ok(MarketDepth {
        symbol: Symbol::new(symbol),
        total_buy_quantity: raw.totalbuyqty,
        total_sell_quantity: raw.totalsellqty,
        bids: raw.bids.into_iter().map(DepthLevel::from).collect(),
        asks: raw.ask.into_iter().map(DepthLevel::from).collect(),
        open: raw.o,
        high: raw.h,
        low: raw.l,
        close: raw.c,
        ltp: raw.ltp,
        last_traded_quantity: raw.ltq,
        last_traded_at,
        volume: raw.v,
        average_price: raw.atp,
        change: raw.ch,
        change_percent: raw.chp,
        lower_circuit: raw.lower_ckt,
        upper_circuit: raw.upper_ckt,
        open_interest: raw.oi,
        prev_open_interest: raw.pdoi,
    })
}

impl MarketDepth {
    /// An empty `d` means the symbol has no book; `Ok(None)`.
    pub(crate) fn from_response(resp: DepthResponse) -> Result<Option<Self>, SdkError> {
        resp.envelope.ensure_ok()?;
        let books = resp.d.ok_or(DecodeError::MissingField("d"))?;
        if books.len() > 1 {
            tracing::warn!(
                keys = books.len(),
                "depth response has several symbols, using the first"
            );
        }
        match books.into_iter().next() {
            Some((symbol, raw)) => Ok(Some(depth_from_raw(symbol, raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_market_status() {
        let resp: MarketStatusResponse = serde_json::from_value(json!({
            "s": "ok", "code": 200, "message": "",
            "marketStatus": [
                {"exchange": 10, "segment": 10, "market_type": "NORMAL", "status": "OPEN"},
                {"exchange": 12, "segment": 20, "market_type": "NORMAL", "status": "CLOSED"}
            ]
        }))
        .unwrap();
        let list = MarketStatus::list_from(resp).unwrap();
        assert_eq!(list[0].exchange, Some(Exchange::Nse));
        assert!(list[0].is_open());
        assert!(!list[1].is_open());
    }

    fn history(candles: serde_json::Value) -> HistoryResponse {
        serde_json::from_value(json!({"s": "ok", "code": 200, "message": "", "candles": candles}))
            .unwrap()
    }

    #[test]
    fn test_history_overall() {
        let resp = history(json!([
            [1700000000, 100.0, 105.5, 99.0, 104.0, 1000],
            [1700000060, 104.0, 110.0, 103.0, 108.0, 2500],
            [1700000120, 108.0, 109.0, 97.25, 98.0, 500]
        ]));
        let hist = MarketHistory::try_from(resp).unwrap();
        assert_eq!(hist.candles.len(), 3);
        assert_eq!(hist.candles[1].timestamp.timestamp(), 1700000060);
        let o = hist.overall;
        assert_eq!(o.from_date, 1700000000);
        assert_eq!(o.to_date, 1700000120);
        assert_eq!(o.open, Decimal::from(100));
        assert_eq!(o.high, Decimal::from(110));
        assert_eq!(o.low, Decimal::new(9725, 2));
        assert_eq!(o.close, Decimal::from(98));
        assert_eq!(o.volume, 4000);
    }

    #[test]
    fn test_single_candle_history_overall() {
        let resp = history(json!([[1700000000, 100.0, 105.5, 99.0, 104.0, 1000]]));
        let o = MarketHistory::try_from(resp).unwrap().overall;
        assert_eq!(o.from_date, o.to_date);
        assert_eq!(o.from_date, 1700000000);
        assert_eq!(o.open, Decimal::from(100));
        assert_eq!(o.close, Decimal::from(104));
        assert_eq!(o.high, Decimal::new(1055, 1));
        assert_eq!(o.low, Decimal::from(99));
        assert_eq!(o.volume, 1000);
    }

    #[test]
    fn test_history_empty_is_all_zero() {
        let hist = MarketHistory::try_from(history(json!([]))).unwrap();
        assert!(hist.candles.is_empty());
        assert_eq!(hist.overall, HistoryOverall::default());
    }

    #[test]
    fn test_history_no_data_status() {
        let resp: HistoryResponse = serde_json::from_value(json!({
            "s": "no_data", "code": 200, "message": ""
        }))
        .unwrap();
        assert!(MarketHistory::try_from(resp).is_err());
    }

    #[test]
    fn test_quotes_split_errors() {
        let resp: QuotesResponse = serde_json::from_value(json!({
            "s": "ok", "code": 200, "message": "",
            "d": [
                {"n": "NSE:SBIN-EQ", "s": "ok", "v": {
                    "short_name": "SBIN-EQ", "exchange": "NSE", "lp": 560.5, "ch": 2.5,
                    "chp": 0.45, "open_price": 558, "high_price": 562, "low_price": 557,
                    "prev_close_price": 558, "volume": 1234567, "fyToken": "10100000003045",
                    "tt": 1700000000
                }},
                {"n": "NSE:NOPE-EQ", "s": "error", "v": {"code": -300, "errmsg": "invalid symbol"}}
            ]
        }))
        .unwrap();
        let quotes = Quotes::try_from(resp).unwrap();
        assert_eq!(quotes.quotes.len(), 1);
        assert_eq!(quotes.quotes[0].ltp, Decimal::new(5605, 1));
        assert_eq!(quotes.quotes[0].volume, 1234567);
        assert!(quotes.quotes[0].updated_at.is_some());
        assert_eq!(quotes.errors.len(), 1);
        assert_eq!(quotes.errors[0].symbol.as_str(), "NSE:NOPE-EQ");
        assert_eq!(quotes.errors[0].code, -300);
    }

    fn depth(d: serde_json::Value) -> DepthResponse {
        serde_json::from_value(json!({"s": "ok", "code": 200, "message": "", "d": d})).unwrap()
    }

    #[test]
    fn test_depth_single_symbol() {
        let resp = depth(json!({
            "NSE:SBIN-EQ": {
                "totalbuyqty": 1200, "totalsellqty": 900,
                "bids": [{"price": 560.4, "volume": 100, "ord": 3}, {"price": 560.3, "volume": 50, "ord": 1}],
                "ask": [{"price": 560.6, "volume": 75, "ord": 2}],
                "o": 558, "h": 562, "l": 557, "c": 558, "ltp": 560.5, "ltq": 10,
                "ltt": 1700000000, "v": 1234567, "atp": 559.8
            }
        }));
        let book = MarketDepth::from_response(resp).unwrap().unwrap();
        assert_eq!(book.symbol.as_str(), "NSE:SBIN-EQ");
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.bids[0].price, Decimal::new(5604, 1));
        assert_eq!(book.asks[0].orders, 2);
        assert_eq!(book.total_buy_quantity, 1200);
    }

    #[test]
    fn test_depth_empty_is_none() {
        assert_eq!(MarketDepth::from_response(depth(json!({}))).unwrap(), None);
    }

    #[test]
    fn test_depth_several_keys_takes_first() {
        let resp = depth(json!({
            "NSE:TCS-EQ": {"ltp": 3500},
            "NSE:INFY-EQ": {"ltp": 1500}
        }));
        let book = MarketDepth::from_response(resp).unwrap().unwrap();
        assert_eq!(book.symbol.as_str(), "NSE:INFY-EQ");
    }
}
