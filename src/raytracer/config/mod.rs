mod camera;
mod config_builder;
mod image_config;
pub use camera::Camera;
pub use config_builder::Config;
pub use image_config::ImageConfig;
