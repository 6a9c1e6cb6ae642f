use anyhow::Context;
use clap::Parser;
use shapekit::{init_logging, render_scene, SceneConfig, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "shapekit",
    version,
    about = "Render the arc, triangle and flower scene as SVG"
)]
struct Cli {
    /// Scene config (.toml or .json); defaults are used if it does not exist
    #[arg(env = "SHAPEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Petal offset, clamped to the configured slider range
    #[arg(long, allow_hyphen_values = true)]
    petal_offset: Option<f64>,

    /// Petal width, clamped to the configured slider range
    #[arg(long)]
    petal_width: Option<f64>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the effective scene config to this path (.toml or .json)
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!("ShapeKit {} (built {})", VERSION, BUILD_DATE);

    let mut config = match cli.config.or_else(SceneConfig::default_path) {
        Some(path) => SceneConfig::load_or_default(&path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    config.apply_flower_parameters(cli.petal_offset, cli.petal_width);

    if let Some(path) = &cli.write_config {
        config
            .save_to_file(path)
            .with_context(|| format!("saving scene config {}", path.display()))?;
        info!("Wrote scene config to {}", path.display());
    }

    let svg = render_scene(&config);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &svg)
                .with_context(|| format!("writing SVG to {}", path.display()))?;
            info!("Wrote SVG to {}", path.display());
        }
        None => println!("{}", svg),
    }

    Ok(())
}
