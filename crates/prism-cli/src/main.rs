//! # Prism CLI
//!
//! Headless driver for the scroll-driven scene.
//!
//! ## Commands
//! - `simulate`: Run the frame loop at a fixed rate and print one JSON frame per line
//! - `theme`: Generate a theme from a prompt and print the merged config
//! - `config`: Apply panel edits to a config and print it
//! - `scene`: Print the declarative scene description for a config
//! - `schema`: Print the JSON Schema of the config or theme payload
//! - `presets`: List built-in presets or print one

mod script;
mod simulate;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use prism_core::{builtin_presets, find_preset, AiThemeResponse, PresentationShell, SceneConfig};
use prism_theme::{generate_theme_or_none, ThemeClient, ThemeClientConfig, ThemeProvider};
use script::ScrollScript;
use serde::Serialize;
use simulate::Simulation;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Headless driver for the prism scroll scene")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the frame loop and print frames as JSON lines
    Simulate {
        /// Scene config (JSON); defaults to the built-in initial config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frames per second
        #[arg(long, default_value_t = 60.0)]
        fps: f32,

        /// Seconds to simulate
        #[arg(short, long, default_value_t = 5.0)]
        duration: f64,

        /// Scroll steps as time:fraction pairs, e.g. "0:0,1:1"
        #[arg(short, long, default_value = "0:0")]
        scroll: ScrollScript,

        /// Print every n-th frame
        #[arg(long, default_value_t = 1)]
        every: usize,
    },

    /// Generate a theme from a mood prompt and print the merged config
    Theme {
        /// Free-text mood, e.g. "Cyberpunk City"
        prompt: String,

        /// Scene config to merge into
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Provider; defaults to the environment's choice
        #[arg(long)]
        provider: Option<ThemeProvider>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Command for the `command` provider
        #[arg(long)]
        agent_cmd: Option<String>,

        /// Write the merged config here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply panel edits and print the resulting config
    Config {
        /// Scene config to start from
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Edits in FIELD=VALUE format, e.g. --set scale=2 --set color=#ff0000
        #[arg(long)]
        set: Vec<String>,

        /// Write the config here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the scene description for a config
    Scene {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a JSON Schema: "config" or "theme"
    Schema {
        #[arg(default_value = "config")]
        what: String,
    },

    /// List presets, or print one preset's config
    Presets { name: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            config,
            fps,
            duration,
            scroll,
            every,
        } => cmd_simulate(
            config.as_deref(),
            Simulation {
                fps,
                duration,
                every,
            },
            &scroll,
        ),
        Commands::Theme {
            prompt,
            config,
            provider,
            model,
            agent_cmd,
            output,
        } => {
            let mut client_config = ThemeClientConfig::from_env();
            if let Some(provider) = provider {
                client_config.provider = provider;
            }
            if let Some(model) = model {
                client_config.model = model;
            }
            if agent_cmd.is_some() {
                client_config.command = agent_cmd;
            }
            cmd_theme(&prompt, config.as_deref(), client_config, output.as_deref()).await
        }
        Commands::Config {
            config,
            set,
            output,
        } => cmd_config(config.as_deref(), &set, output.as_deref()),
        Commands::Scene { config } => {
            let shell = PresentationShell::new(load_config(config.as_deref())?);
            write_json(&shell.scene(), None)
        }
        Commands::Schema { what } => cmd_schema(&what),
        Commands::Presets { name } => cmd_presets(name.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    match path {
        Some(path) => SceneConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_simulate(config: Option<&Path>, sim: Simulation, script: &ScrollScript) -> Result<()> {
    let mut shell = PresentationShell::new(load_config(config)?);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let emitted = simulate::run(&mut shell, &sim, script, |frame| {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
        Ok(())
    })?;
    info!(frames = emitted, "simulation finished");
    Ok(())
}

async fn cmd_theme(
    prompt: &str,
    config: Option<&Path>,
    client_config: ThemeClientConfig,
    output: Option<&Path>,
) -> Result<()> {
    let mut shell = PresentationShell::new(load_config(config)?);
    let client = ThemeClient::new(client_config).context("Failed to build theme client")?;

    let theme = generate_theme_or_none(&client, prompt).await;
    let outcome = shell.apply_theme_result(theme);
    if !outcome.is_applied() {
        bail!("{}", outcome.message());
    }
    eprintln!("{}", outcome.message());
    write_json(shell.config(), output)
}

fn cmd_config(config: Option<&Path>, edits: &[String], output: Option<&Path>) -> Result<()> {
    let mut shell = PresentationShell::new(load_config(config)?);
    for edit in edits {
        let (field, value) = edit
            .split_once('=')
            .with_context(|| format!("Invalid edit '{}', expected FIELD=VALUE", edit))?;
        shell
            .edit(field.trim(), value.trim())
            .with_context(|| format!("Failed to apply '{}'", edit))?;
    }
    write_json(shell.config(), output)
}

fn cmd_schema(what: &str) -> Result<()> {
    let schema = match what {
        "config" => schemars::schema_for!(SceneConfig),
        "theme" => schemars::schema_for!(AiThemeResponse),
        other => bail!("Unknown schema '{}'. Use: config, theme", other),
    };
    write_json(&schema, None)
}

fn cmd_presets(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let preset = find_preset(name).with_context(|| format!("No preset named '{}'", name))?;
            write_json(&preset.config, None)
        }
        None => {
            println!("Available Presets:");
            println!("==================");
            for preset in builtin_presets() {
                println!(
                    "  • {} ({} / {})",
                    preset.name, preset.config.shape, preset.config.material
                );
            }
            Ok(())
        }
    }
}
