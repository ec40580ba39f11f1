//! Native WebSocket client — `tokio-tungstenite`.
//!
//! - `connect` awaits the handshake, then hands the socket to a background
//!   tokio task
//! - the task sends a text `"ping"` every `ping_interval_ms`
//! - every decoded frame is pushed, in arrival order, into a bounded event
//!   channel read through [`WsClient::events`]
//! - a lost connection is reported once and not re-established

use std::pin::Pin;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream, Stream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::WsError;
use crate::ws::frame::{decode_binary, decode_text};
use crate::ws::subscriptions::{socket_url, Subscription};
use crate::ws::{ChannelKind, Notification, ReadyState, WsConfig, WsEvent};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    Send(String),
    Disconnect,
}

// ─── Background task state ───────────────────────────────────────────────────

struct TaskState {
    kind: ChannelKind,
    ping_interval_ms: u64,
    event_tx: mpsc::Sender<WsEvent>,
    cmd_rx: mpsc::Receiver<Command>,
}

impl TaskState {
    async fn emit(&self, event: WsEvent) {
        // The receiver lives in WsClient; once it is gone nobody listens.
        let _ = self.event_tx.send(event).await;
    }
}

// ─── Public WsClient ─────────────────────────────────────────────────────────

/// Native WebSocket client for one of the two sockets.
///
/// Uses a background tokio task for the connection. The public API
/// communicates with it via mpsc channels.
pub struct WsClient {
    kind: ChannelKind,
    config: WsConfig,
    cmd_tx: Option<mpsc::Sender<Command>>,
    event_rx: tokio::sync::Mutex<mpsc::Receiver<WsEvent>>,
    event_tx: mpsc::Sender<WsEvent>,
    task_handle: Option<JoinHandle<()>>,
    ready_state: Arc<AtomicU16>,
}

impl WsClient {
    /// Create a new WS client. Does not connect yet.
    pub fn new(kind: ChannelKind, config: WsConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel(config.channel_capacity.max(1));
        Self {
            kind,
            config,
            cmd_tx: None,
            event_rx: tokio::sync::Mutex::new(event_rx),
            event_tx,
            task_handle: None,
            ready_state: Arc::new(AtomicU16::new(ReadyState::Closed as u16)),
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Open the socket.
    ///
    /// Returns once the handshake has completed; subscriptions are accepted
    /// from then on. Calling it on an open client is a no-op.
    pub async fn connect(&mut self) -> Result<(), WsError> {
        if self.cmd_tx.is_some() && self.is_connected() {
            return Ok(());
        }

        let url = socket_url(self.kind, &self.config)?;
        self.ready_state.store(ReadyState::Connecting as u16, Ordering::SeqCst);

        let timeout = Duration::from_millis(self.config.connect_timeout_ms);
        let (sink, stream) = match attempt_connect(&url, timeout).await {
            Ok(parts) => parts,
            Err(e) => {
                self.ready_state.store(ReadyState::Closed as u16, Ordering::SeqCst);
                tracing::error!(kind = %self.kind, "WebSocket connection failed: {}", e);
                return Err(WsError::ConnectionFailed(e));
            }
        };

        let (cmd_tx, cmd_rx) = mpsc::channel(64);
        self.cmd_tx = Some(cmd_tx);
        self.ready_state.store(ReadyState::Open as u16, Ordering::SeqCst);
        tracing::info!(kind = %self.kind, "WebSocket connected");
        let _ = self.event_tx.send(WsEvent::Connected).await;

        let state = TaskState {
            kind: self.kind,
            ping_interval_ms: self.config.ping_interval_ms,
            event_tx: self.event_tx.clone(),
            cmd_rx,
        };
        let ready_state = Arc::clone(&self.ready_state);
        self.task_handle = Some(tokio::spawn(async move {
            run_connected(state, sink, stream).await;
            ready_state.store(ReadyState::Closed as u16, Ordering::SeqCst);
        }));

        Ok(())
    }

    /// Close the socket and stop the background task.
    pub async fn disconnect(&mut self) -> Result<(), WsError> {
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(Command::Disconnect).await;
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        }

        self.ready_state.store(ReadyState::Closed as u16, Ordering::SeqCst);
        Ok(())
    }

    pub fn subscribe(&self, subscription: &Subscription) -> Result<(), WsError> {
        subscription.check_channel(self.kind)?;
        self.send_frame(&subscription.to_frame(true))
    }

    pub fn unsubscribe(&self, subscription: &Subscription) -> Result<(), WsError> {
        subscription.check_channel(self.kind)?;
        self.send_frame(&subscription.to_frame(false))
    }

    fn send_frame<T: serde::Serialize>(&self, frame: &T) -> Result<(), WsError> {
        if !self.is_connected() {
            return Err(WsError::NotConnected);
        }
        let json = serde_json::to_string(frame).map_err(|e| WsError::SendFailed(e.to_string()))?;
        match &self.cmd_tx {
            Some(tx) => tx.try_send(Command::Send(json)).map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => {
                    WsError::SendFailed("Command channel full".into())
                }
                mpsc::error::TrySendError::Closed(_) => WsError::NotConnected,
            }),
            None => Err(WsError::NotConnected),
        }
    }

    /// Whether the WebSocket is currently open.
    pub fn is_connected(&self) -> bool {
        self.ready_state() == ReadyState::Open
    }

    /// Current connection state.
    pub fn ready_state(&self) -> ReadyState {
        ReadyState::from(self.ready_state.load(Ordering::SeqCst))
    }

    /// Get a stream of events from the WebSocket connection.
    ///
    /// The returned stream borrows `self`, so it must be dropped
    /// before calling `disconnect()`.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = WsEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(
            &self.event_rx,
            |rx| async move {
                let mut guard = rx.lock().await;
                guard.recv().await.map(|event| (event, rx))
            },
        ))
    }
}

impl Drop for WsClient {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

/// Runs until the connection breaks or the client asks to close.
async fn run_connected(
    mut state: TaskState,
    mut sink: SplitSink<WsStream, Message>,
    mut stream: SplitStream<WsStream>,
) {
    let ping_dur = Duration::from_millis(state.ping_interval_ms.max(1));
    let mut ping_interval = tokio::time::interval(ping_dur);
    ping_interval.reset(); // skip immediate first tick

    loop {
        tokio::select! {
            // ── a) Incoming WS message ───────────────────────────────────
            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let text_str: &str = text.as_ref();
                        match decode_text(text_str) {
                            Ok(Some(notification)) => {
                                state.emit(WsEvent::Notification(notification)).await;
                            }
                            Ok(None) => {}
                            Err(e) => {
                                tracing::warn!(kind = %state.kind, "WS text decode error: {} — raw: {}", e, text_str);
                                state.emit(WsEvent::Error(e.to_string())).await;
                            }
                        }
                    }
                    Some(Ok(Message::Binary(data))) => {
                        match decode_binary(&data) {
                            Ok(ticks) => {
                                for tick in ticks {
                                    state.emit(WsEvent::Notification(Notification::Tick(tick))).await;
                                }
                            }
                            Err(e) => {
                                tracing::warn!(kind = %state.kind, len = data.len(), "WS binary decode error: {}", e);
                                state.emit(WsEvent::Error(e.to_string())).await;
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(frame))) => {
                        let (code, reason) = extract_close(frame.as_ref());
                        tracing::info!(kind = %state.kind, code, "WebSocket closed by server: {}", reason);
                        state.emit(WsEvent::Disconnected { code: Some(code), reason }).await;
                        return;
                    }
                    Some(Ok(_)) => {} // WS-level pong, raw frame
                    Some(Err(e)) => {
                        let reason = e.to_string();
                        tracing::error!(kind = %state.kind, "WebSocket error: {}", reason);
                        state.emit(WsEvent::Disconnected { code: None, reason }).await;
                        return;
                    }
                    None => {
                        state.emit(WsEvent::Disconnected {
                            code: None,
                            reason: "Stream ended".into(),
                        }).await;
                        return;
                    }
                }
            }

            // ── b) Command from public API ───────────────────────────────
            cmd = state.cmd_rx.recv() => {
                match cmd {
                    Some(Command::Send(json)) => {
                        tracing::debug!(kind = %state.kind, "sending control frame: {}", json);
                        if let Err(e) = sink.send(Message::Text(json.into())).await {
                            tracing::warn!("Send failed: {}", e);
                        }
                    }
                    Some(Command::Disconnect) | None => {
                        let _ = sink.send(Message::Close(Some(CloseFrame {
                            code: CloseCode::Normal,
                            reason: "Client disconnect".into(),
                        }))).await;
                        state.emit(WsEvent::Disconnected {
                            code: Some(1000),
                            reason: "Client disconnect".into(),
                        }).await;
                        return;
                    }
                }
            }

            // ── c) Keep-alive ────────────────────────────────────────────
            _ = ping_interval.tick() => {
                if let Err(e) = sink.send(Message::Text("ping".into())).await {
                    tracing::warn!("Failed to send ping: {}", e);
                }
            }
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

async fn attempt_connect(
    url: &str,
    timeout: Duration,
) -> Result<(SplitSink<WsStream, Message>, SplitStream<WsStream>), String> {
    let (ws_stream, _) = tokio::time::timeout(timeout, connect_async(url))
        .await
        .map_err(|_| "Connection timeout".to_string())?
        .map_err(|e| e.to_string())?;

    Ok(ws_stream.split())
}

/// Extract close code and reason from an optional CloseFrame.
fn extract_close(frame: Option<&CloseFrame>) -> (u16, String) {
    match frame {
        Some(f) => (f.code.into(), f.reason.to_string()),
        None => (1006, "No close frame".into()),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Symbol;

    #[test]
    fn test_ws_client_new() {
        let client = WsClient::new(ChannelKind::Data, WsConfig::default());
        assert!(client.cmd_tx.is_none());
        assert_eq!(client.ready_state(), ReadyState::Closed);
        assert_eq!(client.kind(), ChannelKind::Data);
    }

    #[test]
    fn test_subscribe_when_not_connected() {
        let client = WsClient::new(ChannelKind::Data, WsConfig::default());
        let sub = Subscription::Symbols(vec![Symbol::new("NSE:SBIN-EQ")]);
        assert!(matches!(client.subscribe(&sub), Err(WsError::NotConnected)));
        assert!(matches!(client.unsubscribe(&sub), Err(WsError::NotConnected)));
    }

    #[test]
    fn test_subscribe_wrong_channel() {
        let client = WsClient::new(ChannelKind::Orders, WsConfig::default());
        let sub = Subscription::Depth(vec![Symbol::new("NSE:SBIN-EQ")]);
        assert!(matches!(
            client.subscribe(&sub),
            Err(WsError::WrongChannel { .. })
        ));
    }

    #[tokio::test]
    async fn test_connect_without_token_fails() {
        let mut client = WsClient::new(ChannelKind::Orders, WsConfig::default());
        assert!(matches!(
            client.connect().await,
            Err(WsError::ConnectionFailed(_))
        ));
        assert_eq!(client.ready_state(), ReadyState::Closed);
    }

    #[test]
    fn test_extract_close_with_frame() {
        let frame = CloseFrame {
            code: CloseCode::Normal,
            reason: "goodbye".into(),
        };
        let (code, reason) = extract_close(Some(&frame));
        assert_eq!(code, 1000);
        assert_eq!(reason, "goodbye");
    }

    #[test]
    fn test_extract_close_no_frame() {
        let (code, reason) = extract_close(None);
        assert_eq!(code, 1006);
        assert_eq!(reason, "No close frame");
    }

    #[tokio::test]
    async fn test_disconnect_when_not_connected() {
        let mut client = WsClient::new(ChannelKind::Data, WsConfig::default());
        let result = client.disconnect().await;
        assert!(result.is_ok());
    }
}
