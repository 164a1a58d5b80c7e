// PartLens core library
// Re-export all modules for external use

pub mod app;
pub mod bundle;
pub mod export;
pub mod footprint;
pub mod platform;
pub mod selection;
pub mod symbol;
pub mod ui;
pub mod view;

// Re-export PartLensApp from app module
pub use app::PartLensApp;
