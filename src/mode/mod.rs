//! CLI mode implementations

mod inspect;
mod render;

pub use inspect::run_inspect;
pub use render::run_render;
