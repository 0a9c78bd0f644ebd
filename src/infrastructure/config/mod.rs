pub mod preview_config;

pub use preview_config::PreviewConfig;
