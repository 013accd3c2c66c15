//! SceneScript CLI
//!
//! Turn a JSON scene description into a JavaScript scene-building function.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scenescript_codegen::SceneCodeGenerator;
use scenescript_core::Scene;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::Overrides;

#[derive(Parser)]
#[command(name = "scenescript")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate JavaScript that rebuilds a 3D scene", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the scene script
    Generate {
        /// Scene description (JSON)
        scene: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator options (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the generated function
        #[arg(long)]
        function_name: Option<String>,

        /// Engine namespace used for constructors
        #[arg(long)]
        namespace: Option<String>,

        /// Leave reflection probes out of the script
        #[arg(long)]
        no_reflection_probes: bool,
    },

    /// Load a scene description and report what it contains
    Check {
        /// Scene description (JSON)
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for generated code
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Generate {
            scene,
            output,
            config,
            function_name,
            namespace,
            no_reflection_probes,
        } => cmd_generate(
            &scene,
            output.as_deref(),
            config.as_deref(),
            Overrides {
                function_name,
                namespace,
                no_reflection_probes,
            },
        ),

        Commands::Check { scene } => cmd_check(&scene),
    }
}

fn load_scene(path: &Path) -> Result<Scene> {
    Scene::from_path(path).with_context(|| format!("Failed to load scene {}", path.display()))
}

fn cmd_generate(
    scene_path: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    overrides: Overrides,
) -> Result<()> {
    let options = config::resolve(config, overrides)?;
    let scene = load_scene(scene_path)?;
    let code = SceneCodeGenerator::with_options(options).generate(&scene);

    match output {
        Some(path) => {
            fs::write(path, &code).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), code.len());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(code.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn cmd_check(scene_path: &Path) -> Result<()> {
    let scene = load_scene(scene_path)?;
    let roots = scene.root_meshes().len();
    let exported = scene.traverse().count();

    println!("nodes:             {}", scene.node_count());
    println!("root meshes:       {}", roots);
    println!("reachable nodes:   {}", exported);
    println!("materials:         {}", scene.materials.len());
    println!("textures:          {}", scene.textures.len());
    println!(
        "reflection probes: {}",
        scene
            .reflection_probes
            .iter()
            .filter(|probe| !probe.is_placeholder())
            .count()
    );
    Ok(())
}
