//! CLI du client d'analyse ADN

use clap::{Parser, Subcommand};
use dnaview_core::AppConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

mod commands;
mod display;

use commands::{analyze, interactive, show_config};

#[derive(Parser)]
#[command(name = "dnaview")]
#[command(about = "Analyse de séquences ADN via un service distant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fichier de configuration (défaut: ./dnaview.toml s'il existe)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Adresse du service d'analyse
    #[arg(short, long, global = true)]
    service: Option<String>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse une séquence et affiche les résultats
    Analyze {
        /// Séquence à analyser
        #[arg(short = 'q', long, conflicts_with = "input")]
        sequence: Option<String>,

        /// Fichier FASTA ou texte brut (stdin si absent)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyse chaque ligne saisie, jusqu'à `:q`
    Interactive,

    /// Affiche la configuration effective
    Config,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Terminal,
    Json,
    Html,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.service, cli.verbose)?;

    dnaview_core::init_logging(&config.logging);
    console::set_colors_enabled(config.render.color && console::colors_enabled());

    match cli.command {
        Commands::Analyze {
            sequence,
            input,
            format,
            output,
        } => {
            let outcome = analyze::run(&config, sequence, input, format, output).await?;
            return Ok(outcome.exit_code());
        }
        Commands::Interactive => {
            interactive::run(&config).await?;
        }
        Commands::Config => {
            show_config::run(&config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Charge la configuration, applique les options de la ligne de commande puis valide
fn resolve_config(path: Option<&Path>, service: Option<String>, verbose: u8) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_unvalidated(path)?;

    if let Some(service) = service {
        config.service.address = service;
    }
    match verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }

    config.validate()?;
    Ok(config)
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
