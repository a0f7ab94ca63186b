use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque channel identifier assigned by the host process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

/// Opaque message identifier assigned by the host process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

macro_rules! opaque_id {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

opaque_id!(ChannelId);
opaque_id!(MessageId);

/// A channel as announced by an `add_channel` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
}

/// One entry of a channel's message history.  `content` is markup the host
/// has already rendered; this layer never builds it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
}

/// Full payload of a `set_current_channel` event: the channel that became
/// current plus its complete message history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentChannel {
    pub channel: Channel,
    pub messages: Vec<ChatMessage>,
}

impl CurrentChannel {
    /// Header line shown above the message pane.
    pub fn header_text(&self) -> String {
        format!("{} # {}", self.channel.name, self.channel.id)
    }
}
