// src/update.rs
//
use std::rc::Rc;

use crate::error::ViewError;
use crate::messages::{Command, Message};
use crate::state::ViewContext;
use crate::views;

/// Apply one inbound message to the DOM.
///
/// Each message maps to a single deterministic rewrite, processed to
/// completion in host-delivery order.  Side effects other than DOM mutation
/// are returned as commands and executed by the caller afterwards.
pub fn update(ctx: &Rc<ViewContext>, msg: Message) -> Result<Vec<Command>, ViewError> {
    match msg {
        Message::ChannelAdded(channel) => {
            views::append_channel(ctx, &channel)?;
            Ok(Vec::new())
        }
        Message::CurrentChannelChanged(current) => {
            views::render_current_channel(ctx, &current)?;
            Ok(Vec::new())
        }
        Message::ChannelClicked { id } => Ok(vec![Command::SelectChannel { id }]),
    }
}
