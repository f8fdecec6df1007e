//! HTML embedding fragments.
//!
//! Rendering is decoupled from any notebook runtime: this module only
//! produces markup, and the host environment decides how to display it.

use uuid::Uuid;

/// Wrap a card body in a uniquely-identified container element.
///
/// A fresh identifier is generated on every call and emitted both as a
/// script variable and as a data attribute, so multiple cards can land
/// in the same output area without DOM id collisions.
pub(crate) fn embed_fragment(html: &str) -> String {
    let container_id = Uuid::new_v4();
    format!(
        "<script type='text/javascript'>var cardContainerId = '{container_id}';</script>\n<div class='embed' data-container='{container_id}'>{html}</div>"
    )
}

/// Heading shown above each card in an aggregate rendering.
pub(crate) fn type_heading(card_type: &str) -> String {
    format!("<h1>Displaying Card Of Type : {}</h1>", title_case(card_type))
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
