//! Websocket realtime gateway
//!
//! Connects to the backend's Phoenix-style channel socket, joins the posts
//! change channel for a scope, and forwards INSERT payloads as [`Post`]
//! values. Change payloads carry bare table columns, so forwarded posts
//! start with no like memberships and no author snapshot.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::domain::entities::{FeedScope, Post, PostId, PostMedia, UserId};
use crate::domain::ports::{FeedSubscription, RealtimeGateway};
use crate::error::{BackendError, DomainError};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

pub struct WsRealtimeGateway {
    url: String,
    api_key: String,
}

impl WsRealtimeGateway {
    pub fn new(base_url: String, api_key: String) -> Self {
        let base = base_url.trim_end_matches('/');
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };

        Self {
            url: format!("{ws_base}/realtime/v1/websocket"),
            api_key,
        }
    }

    fn channel_topic(scope: FeedScope) -> String {
        match scope {
            FeedScope::Global => "realtime:public:posts".to_string(),
            FeedScope::Author(author) => format!("realtime:public:posts:user_id=eq.{author}"),
        }
    }
}

/// Wire shape of a channel frame; payloads we don't care about stay opaque
#[derive(Deserialize)]
struct Frame {
    event: String,
    #[serde(default)]
    payload: serde_json::Value,
}

/// Columns of an INSERT change record
#[derive(Deserialize)]
struct InsertRecord {
    id: PostId,
    user_id: UserId,
    content: String,
    image_url: Option<String>,
    video_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<InsertRecord> for Post {
    fn from(record: InsertRecord) -> Self {
        Post {
            id: record.id,
            author_id: record.user_id,
            caption: record.content,
            media: PostMedia::from_columns(record.image_url, record.video_url),
            created_at: record.created_at,
            liked_by: HashSet::new(),
            author: None,
        }
    }
}

#[async_trait]
impl RealtimeGateway for WsRealtimeGateway {
    async fn subscribe(&self, scope: FeedScope) -> Result<FeedSubscription, DomainError> {
        let url = format!("{}?apikey={}&vsn=1.0.0", self.url, self.api_key);
        let (socket, _) = connect_async(url.as_str())
            .await
            .map_err(|e| BackendError::Realtime(e.to_string()))?;
        let (mut sink, mut stream) = socket.split();

        let topic = Self::channel_topic(scope);
        let join = json!({
            "topic": topic,
            "event": "phx_join",
            "payload": {},
            "ref": "1",
        });
        sink.send(Message::Text(join.to_string()))
            .await
            .map_err(|e| BackendError::Realtime(e.to_string()))?;
        tracing::debug!(%topic, "joined realtime channel");

        let (tx, rx) = mpsc::unbounded_channel();

        let reader = tokio::spawn(async move {
            while let Some(message) = stream.next().await {
                let text = match message {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Close(_)) | Err(_) => break,
                    Ok(_) => continue,
                };

                let frame: Frame = match serde_json::from_str(&text) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::debug!("ignoring undecodable realtime frame: {}", e);
                        continue;
                    }
                };
                if frame.event != "INSERT" {
                    continue;
                }

                let record = frame
                    .payload
                    .get("record")
                    .cloned()
                    .unwrap_or(frame.payload);
                match serde_json::from_value::<InsertRecord>(record) {
                    Ok(record) => {
                        if tx.send(record.into()).is_err() {
                            // subscriber went away
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("dropping malformed INSERT payload: {}", e),
                }
            }
        });

        let heartbeat = tokio::spawn(async move {
            let mut tick = tokio::time::interval(HEARTBEAT_INTERVAL);
            let mut reference: u64 = 1;
            loop {
                tick.tick().await;
                reference += 1;
                let message = json!({
                    "topic": "phoenix",
                    "event": "heartbeat",
                    "payload": {},
                    "ref": reference.to_string(),
                });
                if sink.send(Message::Text(message.to_string())).await.is_err() {
                    break;
                }
            }
        });

        Ok(FeedSubscription::new(
            rx,
            Box::new(move || {
                reader.abort();
                heartbeat.abort();
            }),
        ))
    }
}
