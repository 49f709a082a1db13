/// UI module exports
pub mod app;
pub mod components;
pub mod root;

pub use root::{Root, mount_app};
