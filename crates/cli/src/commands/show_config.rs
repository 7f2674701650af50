//! Commande d'affichage de la configuration

use anyhow::Result;
use dnaview_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
