//! Rendering utilities for human-facing surfaces.

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableFinding, RenderableReport, RenderableVerdictStatus};
