pub mod ai;
pub mod config;
pub mod console;
pub mod conversation;
pub mod logging;
pub mod render;
pub mod transcript;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
