//! 应用层 - 命令
//!
//! 两个用例：批量预渲染、即时合成

mod prerender_commands;
mod render_commands;

pub mod handlers;

pub use prerender_commands::*;
pub use render_commands::*;
