pub mod chat;
pub mod setup;
pub mod sidebar;

pub use chat::ChatView;
pub use setup::SetupNotice;
pub use sidebar::Sidebar;
