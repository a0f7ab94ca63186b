//! Content-rendering boundary.
//!
//! Every payload string written into an element goes through [`Content`].
//! Text is the default; markup insertion is a visible opt-in at the call
//! site, reserved for strings the host has already rendered.

use web_sys::Element;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Content<'a> {
    /// Rendered as text; markup characters have no effect.
    Text(&'a str),

    /// Inserted verbatim as markup.
    TrustedMarkup(&'a str),
}

impl Content<'_> {
    pub fn apply_to(&self, el: &Element) {
        match self {
            Content::Text(text) => el.set_text_content(Some(text)),
            Content::TrustedMarkup(markup) => el.set_inner_html(markup),
        }
    }
}
