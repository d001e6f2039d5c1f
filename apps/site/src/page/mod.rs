// The single CV page: static content plus the composed markup.

pub mod content;
pub mod handlers;
pub mod render;
pub mod styles;
