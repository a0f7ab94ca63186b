// src/views.rs
//
// Node constructors and region renderers.  All DOM writes for the channel
// list, the header, and the message pane live here.
//
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::constants::{CHANNEL_NODE_CLASS, MESSAGE_NODE_CLASS};
use crate::error::ViewError;
use crate::messages::Message;
use crate::models::{Channel, ChatMessage, CurrentChannel};
use crate::render::Content;
use crate::state::{dispatch, ViewContext};

/// Build a sidebar entry for `channel` and append it to the channel list.
///
/// Entries accumulate in arrival order.  There is no update or removal path,
/// and no de-duplication: a repeated announcement for an id yields a second
/// entry.
pub fn append_channel(ctx: &Rc<ViewContext>, channel: &Channel) -> Result<(), ViewError> {
    let node = channel_node(ctx, channel)?;
    ctx.channel_list.append_child(&node)?;
    Ok(())
}

fn channel_node(ctx: &Rc<ViewContext>, channel: &Channel) -> Result<Element, ViewError> {
    let node = ctx.document.create_element("div")?;
    node.set_class_name(CHANNEL_NODE_CLASS);
    node.set_id(channel.id.as_str());
    Content::Text(&format!("# {}", channel.name)).apply_to(&node);

    // The id travels with the closure; clicking any entry for a channel asks
    // the host to select that channel.
    let id = channel.id.clone();
    let click_ctx = Rc::clone(ctx);
    let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
        dispatch(&click_ctx, Message::ChannelClicked { id: id.clone() });
    }) as Box<dyn FnMut(_)>);
    node.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Entries live for the rest of the session, and so do their listeners.
    on_click.forget();

    Ok(node)
}

/// Replace the header text and rebuild the message pane from `current`.
///
/// The pane is cleared before anything is appended, so the result mirrors the
/// payload in full regardless of what was on screen before.
pub fn render_current_channel(
    ctx: &ViewContext,
    current: &CurrentChannel,
) -> Result<(), ViewError> {
    Content::Text(&current.header_text()).apply_to(&ctx.channel_info);

    crate::dom_utils::remove_children(&ctx.message_list);
    for message in &current.messages {
        let node = message_node(&ctx.document, message)?;
        ctx.message_list.append_child(&node)?;
    }

    Ok(())
}

fn message_node(document: &Document, message: &ChatMessage) -> Result<Element, ViewError> {
    let node = document.create_element("div")?;
    node.set_class_name(MESSAGE_NODE_CLASS);
    node.set_id(message.id.as_str());
    // Message bodies arrive pre-rendered by the host.
    Content::TrustedMarkup(&message.content).apply_to(&node);
    Ok(node)
}
