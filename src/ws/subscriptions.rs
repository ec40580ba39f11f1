//! Subscriptions, control frames, and socket URLs.

use super::{ChannelKind, WsConfig};
use crate::error::WsError;
use crate::network::WS_USER_AGENT;
use crate::shared::Symbol;
use serde::Serialize;

/// What a socket can be asked to stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subscription {
    /// Order updates for the logged-in account (orders socket).
    OrderUpdates,
    /// Level-1 records for the listed symbols (data socket).
    Symbols(Vec<Symbol>),
    /// Level-2 records for the listed symbols (data socket).
    Depth(Vec<Symbol>),
}

impl Subscription {
    pub fn channel(&self) -> ChannelKind {
        match self {
            Subscription::OrderUpdates => ChannelKind::Orders,
            Subscription::Symbols(_) | Subscription::Depth(_) => ChannelKind::Data,
        }
    }

    /// Rejects subscriptions meant for the other socket.
    pub fn check_channel(&self, socket: ChannelKind) -> Result<(), WsError> {
        let expected = self.channel();
        if expected != socket {
            return Err(WsError::WrongChannel {
                expected: expected.as_str(),
                actual: socket.as_str(),
            });
        }
        Ok(())
    }

    pub fn to_frame(&self, subscribe: bool) -> ControlFrame {
        let sub_type = u8::from(subscribe);
        match self {
            Subscription::OrderUpdates => ControlFrame::Orders {
                slist: vec!["orderUpdate"],
                sub_type,
            },
            Subscription::Symbols(symbols) => ControlFrame::Data {
                tlist: symbols.clone(),
                sub_type,
            },
            Subscription::Depth(symbols) => ControlFrame::Depth {
                l2list: symbols.clone(),
                sub_type,
            },
        }
    }
}

/// Text control frame. `SUB_T` is 1 to subscribe, 0 to unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "T")]
pub enum ControlFrame {
    #[serde(rename = "SUB_ORD")]
    Orders {
        #[serde(rename = "SLIST")]
        slist: Vec<&'static str>,
        #[serde(rename = "SUB_T")]
        sub_type: u8,
    },
    #[serde(rename = "SUB_DATA")]
    Data {
        #[serde(rename = "TLIST")]
        tlist: Vec<Symbol>,
        #[serde(rename = "SUB_T")]
        sub_type: u8,
    },
    #[serde(rename = "SUB_L2")]
    Depth {
        #[serde(rename = "L2LIST")]
        l2list: Vec<Symbol>,
        #[serde(rename = "SUB_T")]
        sub_type: u8,
    },
}

/// Socket URL for `kind` with the credentials in the query string.
pub fn socket_url(kind: ChannelKind, config: &WsConfig) -> Result<String, WsError> {
    let auth = config
        .authorization
        .as_ref()
        .filter(|auth| auth.has_access_token())
        .ok_or_else(|| WsError::ConnectionFailed("no access token configured".to_string()))?;
    let token = auth.header_value();
    Ok(match kind {
        ChannelKind::Orders => format!(
            "{}?type=orderUpdate&access_token={}&user-agent={}",
            config.orders_url, token, WS_USER_AGENT
        ),
        ChannelKind::Data => format!(
            "{}?access_token={}&user-agent={}",
            config.data_url, token, WS_USER_AGENT
        ),
    })
}
