//! Static assets compiled into the binary.

/// Page shell with `{{name}}` slots filled by [`crate::page::render_document`].
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Browser script: doctor strip scroll buttons and in-place clinic panel swaps.
pub const SCROLL_JS: &str = include_str!("../assets/scroll.js");

/// URL the page shell loads [`SCROLL_JS`] from.
pub const SCROLL_JS_PATH: &str = "/static/scroll.js";
