mod script;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lightbox_camera::Camera;
use lightbox_config::ViewerConfig;
use lightbox_render::{DebugTextRenderer, RenderView, Renderer};
use lightbox_tools::CameraInspector;
use script::Script;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lightbox-cli", about = "CLI tool for lightbox operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Viewer config file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective configuration as YAML
    Config,
    /// Replay a camera input script and print the final frame
    Replay {
        /// YAML script of camera input steps
        #[arg(short, long)]
        script: PathBuf,
        /// Print the camera state after every step
        #[arg(short, long)]
        trace: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = ViewerConfig::load_or_default(cli.config.as_deref())
        .context("load viewer config")?;

    match cli.command {
        Commands::Info => {
            println!("lightbox-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", lightbox_render::crate_info());
            println!("tools: {}", lightbox_tools::crate_info());
            println!("{}", CameraInspector::summary(&Camera::new(config.camera)));
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
        Commands::Replay { script, trace } => {
            let steps = Script::load(&script)
                .with_context(|| format!("load script {}", script.display()))?;
            println!("Replaying {} steps from {}", steps.steps.len(), script.display());

            let mut camera = Camera::new(config.camera);
            steps.run(&mut camera, |index, step, camera| {
                if trace {
                    println!("[{index:>3}] {step:?}");
                    println!("      {}", CameraInspector::summary(camera));
                }
            });

            let view = RenderView::from_camera(&camera, config.aspect(), config.clip);
            print!("{}", DebugTextRenderer::new().render(&config.scene(), &view));
            println!("{}", CameraInspector::summary(&camera));
        }
    }

    Ok(())
}
