//! Command Handlers 实现

mod prerender_handlers;
mod render_handlers;

pub use prerender_handlers::*;
pub use render_handlers::*;
