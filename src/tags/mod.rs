//! HTML fragments emitted for resolved entries.

mod escape;
mod render;

pub use escape::escape_attribute;
pub use render::{TagList, link_tag, script_tag};
