//! Interactive warehouse console: configuration, menus and the session loop.

pub mod config;
pub mod menu;
pub mod session;

pub use config::{Args, Config};
pub use session::Session;
