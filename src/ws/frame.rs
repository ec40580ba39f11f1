//! Frame decoding for both sockets.
//!
//! Text frames are JSON, except the literal `"pong"` keep-alive reply which
//! is dropped here. Binary frames carry one or more packed market records
//! back to back, all big-endian:
//!
//! | part     | bytes | fields                                                        |
//! |----------|-------|---------------------------------------------------------------|
//! | header   | 24    | token u64, timestamp u32, fy_code u16, flag u16, packet_len u16, 6 reserved |
//! | common   | 48    | price_conv, ltp, open, high, low, close, min open/high/low/close (u32), min volume u64 |
//! | extended | 32    | ltq, ltt, atp, volume (u32), total buy qty, total sell qty (u64) |
//! | levels   | 120   | 10 × (price u32, qty u32, orders u32), 5 bids then 5 asks       |
//!
//! Index records (`7207`) stop after the common part. `packet_len` is the
//! whole record including the header, and is what the decoder advances by.

use crate::domain::market::DepthLevel;
use crate::domain::order::wire::RawOrder;
use crate::domain::order::Order;
use crate::error::{DecodeError, SdkError};
use crate::shared::serde_util;
use crate::ws::Notification;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

pub const HEADER_LEN: usize = 24;
pub const COMMON_LEN: usize = 48;
pub const EXTENDED_LEN: usize = 32;
pub const LEVEL_LEN: usize = 12;
pub const DEPTH_LEVELS: usize = 5;

pub const FY_CODE_INDEX: u16 = 7207;
pub const FY_CODE_QUOTE: u16 = 7208;
pub const FY_CODE_QUOTE_COMMODITY: u16 = 31038;

// ─── Decoded records ─────────────────────────────────────────────────────────

/// The current minute's bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteBar {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

/// Trade and book fields of a full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickDepth {
    pub last_traded_quantity: i64,
    pub last_traded_at: DateTime<Utc>,
    pub average_price: Decimal,
    pub volume: i64,
    pub total_buy_quantity: i64,
    pub total_sell_quantity: i64,
    pub bids: Vec<DepthLevel>,
    pub asks: Vec<DepthLevel>,
}

/// One binary market record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketTick {
    /// Instrument token (fyToken).
    pub token: u64,
    pub timestamp: DateTime<Utc>,
    pub fy_code: u16,
    pub flag: u16,
    pub ltp: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub minute: MinuteBar,
    /// `None` for index records.
    pub depth: Option<TickDepth>,
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Big-endian byte cursor. Every read is bounds-checked.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = self.pos + N;
        let bytes = self.buf.get(self.pos..end).ok_or_else(|| {
            DecodeError::Frame(format!(
                "need {} bytes at offset {}, record has {}",
                N,
                self.pos,
                self.buf.len()
            ))
        })?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos = end;
        Ok(out)
    }

    fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        if self.buf.len() < self.pos + n {
            return Err(DecodeError::Frame(format!(
                "cannot skip {} bytes at offset {}, record has {}",
                n,
                self.pos,
                self.buf.len()
            )));
        }
        self.pos += n;
        Ok(())
    }

    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.take()?))
    }

    fn read_i64_from_u64(&mut self) -> Result<i64, DecodeError> {
        let value = self.read_u64()?;
        i64::try_from(value)
            .map_err(|_| DecodeError::Frame(format!("quantity {} out of range", value)))
    }
}

// ─── Binary ──────────────────────────────────────────────────────────────────

struct Header {
    token: u64,
    timestamp: u32,
    fy_code: u16,
    flag: u16,
    packet_len: u16,
}

impl Header {
    fn read(cur: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let header = Header {
            token: cur.read_u64()?,
            timestamp: cur.read_u32()?,
            fy_code: cur.read_u16()?,
            flag: cur.read_u16()?,
            packet_len: cur.read_u16()?,
        };
        cur.skip(6)?;
        Ok(header)
    }
}

/// Scales raw integer prices by the record's `price_conv`.
struct Scale(Decimal);

impl Scale {
    fn new(price_conv: u32) -> Result<Self, DecodeError> {
        if price_conv == 0 {
            return Err(DecodeError::Frame("price_conv is zero".to_string()));
        }
        Ok(Scale(Decimal::from(price_conv)))
    }

    fn price(&self, cur: &mut Cursor<'_>) -> Result<Decimal, DecodeError> {
        Ok(Decimal::from(cur.read_u32()?) / self.0)
    }
}

fn read_levels(
    cur: &mut Cursor<'_>,
    scale: &Scale,
    count: usize,
) -> Result<Vec<DepthLevel>, DecodeError> {
    (0..count)
        .map(|_| {
            Ok(DepthLevel {
                price: scale.price(cur)?,
                quantity: i64::from(cur.read_u32()?),
                orders: i64::from(cur.read_u32()?),
            })
        })
        .collect()
}

fn decode_record(header: Header, record: &[u8], full: bool) -> Result<MarketTick, DecodeError> {
    let mut cur = Cursor::new(record);
    cur.skip(HEADER_LEN)?;

    let scale = Scale::new(cur.read_u32()?)?;
    let ltp = scale.price(&mut cur)?;
    let open = scale.price(&mut cur)?;
    let high = scale.price(&mut cur)?;
    let low = scale.price(&mut cur)?;
    let close = scale.price(&mut cur)?;
    let minute = MinuteBar {
        open: scale.price(&mut cur)?,
        high: scale.price(&mut cur)?,
        low: scale.price(&mut cur)?,
        close: scale.price(&mut cur)?,
        volume: cur.read_i64_from_u64()?,
    };

    let depth = if full {
        let last_traded_quantity = i64::from(cur.read_u32()?);
        let last_traded_at = serde_util::from_epoch_secs(i64::from(cur.read_u32()?))?;
        let average_price = scale.price(&mut cur)?;
        let volume = i64::from(cur.read_u32()?);
        let total_buy_quantity = cur.read_i64_from_u64()?;
        let total_sell_quantity = cur.read_i64_from_u64()?;
        let bids = read_levels(&mut cur, &scale, DEPTH_LEVELS)?;
        let asks = read_levels(&mut cur, &scale, DEPTH_LEVELS)?;
        Some(TickDepth {
            last_traded_quantity,
            last_traded_at,
            average_price,
            volume,
            total_buy_quantity,
            total_sell_quantity,
            bids,
            asks,
        })
    } else {
        None
    };

    Ok(MarketTick {
        token: header.token,
        timestamp: serde_util::from_epoch_secs(i64::from(header.timestamp))?,
        fy_code: header.fy_code,
        flag: header.flag,
        ltp,
        open,
        high,
        low,
        close,
        minute,
        depth,
    })
}

/// A frame cut short after at least one whole record keeps those records.
fn truncated_tail(
    ticks: Vec<MarketTick>,
    offset: usize,
    err: DecodeError,
) -> Result<Vec<MarketTick>, DecodeError> {
    if ticks.is_empty() {
        return Err(err);
    }
    tracing::warn!(offset, decoded = ticks.len(), error = %err, "dropping truncated market record");
    Ok(ticks)
}

/// Decode every record in a binary frame, in order.
///
/// Records with an unknown `fy_code` are skipped. A record that runs past
/// the end of the frame is dropped with a warning when records before it
/// decoded, and fails the frame when it is the first one.
pub fn decode_binary(buf: &[u8]) -> Result<Vec<MarketTick>, DecodeError> {
    let mut ticks = Vec::new();
    let mut start = 0;
    while start < buf.len() {
        let rest = &buf[start..];
        let header = match Header::read(&mut Cursor::new(rest)) {
            Ok(header) => header,
            Err(e) => return truncated_tail(ticks, start, e),
        };
        let len = usize::from(header.packet_len);
        if len < HEADER_LEN {
            return Err(DecodeError::Frame(format!(
                "packet_len {} at offset {} is shorter than the header",
                len, start
            )));
        }
        let Some(record) = rest.get(..len) else {
            let e = DecodeError::Frame(format!(
                "record at offset {} declares {} bytes, frame has {}",
                start,
                len,
                rest.len()
            ));
            return truncated_tail(ticks, start, e);
        };
        match header.fy_code {
            FY_CODE_INDEX => ticks.push(decode_record(header, record, false)?),
            FY_CODE_QUOTE | FY_CODE_QUOTE_COMMODITY => {
                ticks.push(decode_record(header, record, true)?)
            }
            other => tracing::warn!(fy_code = other, offset = start, "skipping unknown market record"),
        }
        start += len;
    }
    Ok(ticks)
}

// ─── Text ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderUpdateFrame {
    d: RawOrder,
}

fn is_order_update(value: &Value) -> bool {
    value.get("s").is_some()
        && value
            .get("d")
            .and_then(Value::as_object)
            .is_some_and(|d| d.contains_key("id"))
}

/// Decode a text frame. `Ok(None)` for the keep-alive reply.
pub fn decode_text(text: &str) -> Result<Option<Notification>, SdkError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("pong") {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(trimmed)?;
    if is_order_update(&value) {
        let frame: OrderUpdateFrame = serde_json::from_value(value)?;
        let order = Order::try_from(frame.d)?;
        return Ok(Some(Notification::Order(order)));
    }
    Ok(Some(Notification::Message(value)))
}
