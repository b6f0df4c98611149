//! CLI command implementations.

pub(crate) mod edit_link;
pub(crate) mod render;

pub(crate) use edit_link::EditLinkArgs;
pub(crate) use render::RenderArgs;
