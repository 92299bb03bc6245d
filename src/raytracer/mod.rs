mod config;
mod ray;
mod raytracer;
mod shading;

pub use config::Config;
pub use raytracer::RayTracer;
pub use shading::{Color, ShadingMode};
