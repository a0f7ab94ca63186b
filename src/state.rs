use std::rc::Rc;

use web_sys::{Document, Element};

use crate::constants::{CHANNEL_INFO_ID, CHANNEL_LIST_ID, MESSAGE_LIST_ID};
use crate::error::ViewError;
use crate::host::CommandSink;
use crate::messages::Message;

/// Handles to the DOM regions this layer renders into, plus the sink used to
/// reach the host process.
///
/// Constructed once at startup and passed into every handler explicitly.  No
/// handler can observe an unset handle: if a region is missing, construction
/// fails and nothing is ever subscribed.
pub struct ViewContext {
    pub document: Document,
    pub channel_list: Element,
    pub channel_info: Element,
    pub message_list: Element,
    pub host: Rc<dyn CommandSink>,
}

impl ViewContext {
    /// Look up the three fixed regions in the host document.
    pub fn acquire(document: &Document, host: Rc<dyn CommandSink>) -> Result<Self, ViewError> {
        let region = |id: &'static str| {
            document
                .get_element_by_id(id)
                .ok_or(ViewError::MissingRegion(id))
        };

        Ok(Self {
            document: document.clone(),
            channel_list: region(CHANNEL_LIST_ID)?,
            channel_info: region(CHANNEL_INFO_ID)?,
            message_list: region(MESSAGE_LIST_ID)?,
            host,
        })
    }
}

/// Run one message through the update loop and execute whatever commands it
/// returns.
///
/// A failed update is logged and surfaced as a toast; later events are still
/// served.
pub fn dispatch(ctx: &Rc<ViewContext>, msg: Message) {
    match crate::update::update(ctx, msg) {
        Ok(commands) => {
            for command in commands {
                ctx.host.send(command);
            }
        }
        Err(err) => {
            log::warn!("view update failed: {err}");
            crate::toast::error(&format!("View update failed: {err}"));
        }
    }
}
