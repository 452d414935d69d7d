//! CLI command implementations.

mod render;
mod status;

pub(crate) use render::RenderArgs;
pub(crate) use status::StatusArgs;
