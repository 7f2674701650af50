//! Configuration du client d'analyse

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Adresse par défaut du service d'analyse
pub const DEFAULT_SERVICE_ADDRESS: &str = "http://localhost:5000/analyze";

/// Préfixe des variables d'environnement (`DNAVIEW__SERVICE__ADDRESS`, ...)
pub const ENV_PREFIX: &str = "DNAVIEW";

/// Configuration du service distant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// URL complète du point d'entrée d'analyse
    pub address: String,
    /// Délai maximal en secondes; aucun délai si absent
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVICE_ADDRESS.to_string(),
            timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    /// Vérifie et retourne l'URL du service
    pub fn endpoint(&self) -> Result<reqwest::Url> {
        let url = reqwest::Url::parse(&self.address).map_err(|e| {
            AnalysisError::Config(format!("adresse de service invalide '{}': {}", self.address, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AnalysisError::Config(format!(
                "schéma non supporté pour le service: {}",
                other
            ))),
        }
    }
}

/// Configuration du rendu des graphiques
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Largeur maximale d'une barre, en caractères
    pub bar_width: usize,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bar_width: 40,
            color: true,
        }
    }
}

/// Configuration du logging
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Charge et valide la configuration
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = Self::load_unvalidated(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Charge la configuration depuis un fichier optionnel puis l'environnement,
    /// sans validation, pour laisser la ligne de commande surcharger les valeurs
    pub fn load_unvalidated(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("dnaview").required(false)),
        };

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        self.service.endpoint()?;

        if self.service.timeout_secs == Some(0) {
            return Err(AnalysisError::Config(
                "service.timeout_secs doit être positif (omettre pour aucun délai)".to_string(),
            ));
        }

        if self.render.bar_width == 0 {
            return Err(AnalysisError::Config(
                "render.bar_width doit être positif".to_string(),
            ));
        }

        Ok(())
    }
}
