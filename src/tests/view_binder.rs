//! DOM behavior of the view binder: every inbound event maps to one
//! deterministic rewrite, and clicks surface as host commands.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use crate::constants::{CHANNEL_INFO_ID, CHANNEL_LIST_ID, MESSAGE_LIST_ID};
use crate::error::ViewError;
use crate::host::CommandSink;
use crate::messages::{Command, Message};
use crate::models::{Channel, ChatMessage, CurrentChannel};
use crate::render::Content;
use crate::state::{dispatch, ViewContext};

wasm_bindgen_test_configure!(run_in_browser);

/// Sink that records commands instead of reaching for the Tauri bridge.
#[derive(Default)]
struct RecordingSink {
    sent: RefCell<Vec<Command>>,
}

impl CommandSink for RecordingSink {
    fn send(&self, command: Command) {
        self.sent.borrow_mut().push(command);
    }
}

/// Recreate the three host-owned regions and build a fresh context.  Tests
/// share one page, so stale regions from a previous test are dropped first.
fn fixture() -> (Rc<ViewContext>, Rc<RecordingSink>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    for id in [CHANNEL_LIST_ID, CHANNEL_INFO_ID, MESSAGE_LIST_ID] {
        if let Some(stale) = document.get_element_by_id(id) {
            stale.remove();
        }
        let region = document.create_element("div").unwrap();
        region.set_id(id);
        body.append_child(&region).unwrap();
    }

    let sink = Rc::new(RecordingSink::default());
    let host: Rc<dyn CommandSink> = Rc::clone(&sink);
    let ctx = ViewContext::acquire(&document, host).unwrap();
    (Rc::new(ctx), sink)
}

fn channel(id: &str, name: &str) -> Channel {
    Channel {
        id: id.into(),
        name: name.into(),
    }
}

fn message(id: &str, content: &str) -> ChatMessage {
    ChatMessage {
        id: id.into(),
        content: content.into(),
    }
}

fn current(id: &str, name: &str, messages: Vec<ChatMessage>) -> CurrentChannel {
    CurrentChannel {
        channel: channel(id, name),
        messages,
    }
}

fn child_ids(region: &web_sys::Element) -> Vec<String> {
    let children = region.children();
    (0..children.length())
        .map(|i| children.item(i).unwrap().id())
        .collect()
}

#[wasm_bindgen_test]
fn channels_accumulate_in_arrival_order() {
    let (ctx, _sink) = fixture();

    dispatch(&ctx, Message::ChannelAdded(channel("c1", "general")));
    dispatch(&ctx, Message::ChannelAdded(channel("c2", "random")));

    assert_eq!(child_ids(&ctx.channel_list), vec!["c1", "c2"]);
    let first = ctx.channel_list.children().item(0).unwrap();
    assert_eq!(first.text_content().unwrap(), "# general");
    assert_eq!(first.class_name(), "channel");
}

#[wasm_bindgen_test]
fn repeated_announcement_appends_a_duplicate_entry() {
    let (ctx, _sink) = fixture();

    dispatch(&ctx, Message::ChannelAdded(channel("c1", "general")));
    dispatch(&ctx, Message::ChannelAdded(channel("c1", "general")));

    // Two nodes, not one: the layer does not de-duplicate.
    assert_eq!(child_ids(&ctx.channel_list), vec!["c1", "c1"]);
}

#[wasm_bindgen_test]
fn set_current_channel_rewrites_header_and_pane() {
    let (ctx, _sink) = fixture();

    dispatch(
        &ctx,
        Message::CurrentChannelChanged(current(
            "c1",
            "general",
            vec![message("m1", "hi"), message("m2", "<b>bold</b>")],
        )),
    );

    assert_eq!(ctx.channel_info.text_content().unwrap(), "general # c1");
    assert_eq!(child_ids(&ctx.message_list), vec!["m1", "m2"]);

    let second = ctx.message_list.children().item(1).unwrap();
    assert_eq!(second.class_name(), "message");
    // Host-rendered markup goes in as markup.
    assert_eq!(second.children().length(), 1);
    assert_eq!(second.text_content().unwrap(), "bold");
}

#[wasm_bindgen_test]
fn second_set_current_channel_discards_the_first_render() {
    let (ctx, _sink) = fixture();

    dispatch(
        &ctx,
        Message::CurrentChannelChanged(current(
            "c1",
            "general",
            vec![
                message("m1", "one"),
                message("m2", "two"),
                message("m3", "three"),
            ],
        )),
    );
    dispatch(
        &ctx,
        Message::CurrentChannelChanged(current("c2", "random", vec![message("m9", "only")])),
    );

    assert_eq!(ctx.channel_info.text_content().unwrap(), "random # c2");
    assert_eq!(child_ids(&ctx.message_list), vec!["m9"]);
}

#[wasm_bindgen_test]
fn empty_history_clears_the_pane() {
    let (ctx, _sink) = fixture();

    dispatch(
        &ctx,
        Message::CurrentChannelChanged(current("c1", "general", vec![message("m1", "hi")])),
    );
    dispatch(
        &ctx,
        Message::CurrentChannelChanged(current("c1", "general", vec![])),
    );

    assert_eq!(ctx.message_list.children().length(), 0);
}

#[wasm_bindgen_test]
fn clicking_a_channel_entry_sends_one_select_command() {
    let (ctx, sink) = fixture();

    // The same id rendered twice still yields one command per click.
    dispatch(&ctx, Message::ChannelAdded(channel("c42", "dups")));
    dispatch(&ctx, Message::ChannelAdded(channel("c42", "dups")));

    let entry: HtmlElement = ctx
        .channel_list
        .children()
        .item(0)
        .unwrap()
        .dyn_into()
        .unwrap();
    entry.click();

    assert_eq!(
        *sink.sent.borrow(),
        vec![Command::SelectChannel { id: "c42".into() }]
    );
}

#[wasm_bindgen_test]
fn text_content_never_renders_as_markup() {
    let (ctx, _sink) = fixture();
    let el = ctx.document.create_element("div").unwrap();

    Content::Text("<b>hi</b>").apply_to(&el);
    assert_eq!(el.children().length(), 0);
    assert_eq!(el.text_content().unwrap(), "<b>hi</b>");

    Content::TrustedMarkup("<b>hi</b>").apply_to(&el);
    assert_eq!(el.children().length(), 1);
}

#[wasm_bindgen_test]
fn construction_fails_when_a_region_is_missing() {
    let (ctx, sink) = fixture();

    ctx.message_list.remove();
    let host: Rc<dyn CommandSink> = sink;
    let result = ViewContext::acquire(&ctx.document, host);

    assert!(matches!(
        result,
        Err(ViewError::MissingRegion(MESSAGE_LIST_ID))
    ));
}
