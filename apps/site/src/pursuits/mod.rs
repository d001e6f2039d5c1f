// Pursuits gallery: static entries, the open/closed widget state, and its markup.

pub mod models;
pub mod render;
pub mod seed;
pub mod widget;
