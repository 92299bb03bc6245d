mod imgoutput;
mod raytracer;

use anyhow::{anyhow, Context};
use raytracer::{Config, RayTracer, ShadingMode};
use std::io::{self, BufWriter};
use structopt::StructOpt;
use tracing::{info, Level};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "camera_rays",
    about = "Casts one ray per pixel and writes a plain-text PPM image to stdout"
)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// Shading mode: brightness, blend, quadrant; anything else uses the plain gradient
    #[structopt(default_value = "default", parse(from_str))]
    pub mode: ShadingMode,
    /// Also save the image to this file (format from the extension)
    #[structopt(long)]
    pub png: Option<String>,
    /// Number of render threads
    #[structopt(long)]
    pub threads: Option<usize>,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => default,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();

    // stdout carries the image, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .with_writer(io::stderr)
        .init();

    if let Some(threads) = opts.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render threads")?;
    }

    let config = Config::builder()
        .mode(opts.mode)
        .build()
        .map_err(|e| anyhow!(e))?;
    let ray_tracer = RayTracer::new(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let image = ray_tracer
        .render_to(&mut out)
        .context("Failed to write image to stdout")?;

    if let Some(path) = opts.png {
        imgoutput::save_image(&image, &path)
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Failed to save {path}"))?;
        let size = &ray_tracer.config().image;
        info!("saved {}x{} image to {path}", size.width, size.height);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug", Level::INFO), Level::DEBUG);
        assert_eq!(parse_log_level("WARN", Level::INFO), Level::WARN);
        assert_eq!(parse_log_level("loud", Level::INFO), Level::INFO);
    }

    #[test]
    fn test_mode_argument() {
        let opts = Opt::from_iter(["camera_rays", "quadrant"]);
        assert_eq!(opts.mode, ShadingMode::Quadrant);
        assert_eq!(opts.png, None);
    }

    #[test]
    fn test_mode_defaults_to_gradient() {
        let opts = Opt::from_iter(["camera_rays"]);
        assert_eq!(opts.mode, ShadingMode::Gradient);
        let opts = Opt::from_iter(["camera_rays", "sepia", "--png", "out.png"]);
        assert_eq!(opts.mode, ShadingMode::Gradient);
        assert_eq!(opts.png.as_deref(), Some("out.png"));
    }
}
