pub mod app;
pub mod chat;
pub mod fonts;

pub use app::KrishiApp;
