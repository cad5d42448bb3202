//! Awtrix display device: custom-app wire types and publishing.

mod publish;

pub use publish::{post_application, AwtrixApp, AwtrixDrawCommand};
