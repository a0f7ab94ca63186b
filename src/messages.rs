// src/messages.rs
//
// The events that can occur in the view layer, plus the commands the update
// loop hands back for execution against the host.
//
use crate::models::{Channel, ChannelId, CurrentChannel};

/// Inbound messages.  Host pushes arrive already decoded and validated; user
/// interaction enters through the same funnel so every DOM rewrite has a
/// single cause.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Host announced a new channel.
    ChannelAdded(Channel),

    /// Host switched the current channel; carries the full message history.
    CurrentChannelChanged(CurrentChannel),

    /// The user clicked a channel entry in the sidebar.
    ChannelClicked { id: ChannelId },
}

/// Outbound commands produced by `update`.  Executed after the render
/// completes, never during it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask the host to make `id` the current channel.  The host answers by
    /// pushing a fresh `set_current_channel` event, not through a reply.
    SelectChannel { id: ChannelId },
}
