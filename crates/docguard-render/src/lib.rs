//! Rendering of validation reports for people: console table, Markdown, HTML.
//!
//! Renderers are pure functions of a [`RenderableReport`]; the same input always renders to
//! identical bytes.

#![forbid(unsafe_code)]

mod console;
mod html;
mod markdown;
mod model;

pub use console::render_console;
pub use html::render_html;
pub use markdown::render_markdown;
pub use model::{
    RenderableCounts, RenderableDocument, RenderableOutcome, RenderableReport, RenderableResult,
    RenderableSeverity, RenderableStatus,
};
