//! Types d'erreurs pour le client d'analyse ADN

use thiserror::Error;

/// Message affiché lorsque la saisie est vide
pub const EMPTY_SEQUENCE_MESSAGE: &str = "Please enter a DNA sequence.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Please enter a DNA sequence.")]
    EmptySequence,

    #[error("HTTP error! status: {status}{}", status_detail(.detail))]
    ResponseStatus { status: u16, detail: Option<String> },

    #[error("{0}")]
    Transport(String),

    #[error("Réponse illisible: {0}")]
    MalformedResponse(String),

    #[error("Résultat invalide: {0}")]
    InvalidResult(String),

    #[error("Une analyse est déjà en cours")]
    Busy,

    #[error("Erreur de configuration: {0}")]
    Config(String),
}

fn status_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(" ({d})")).unwrap_or_default()
}

/// Catégorie d'erreur telle que vue par l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Saisie refusée avant toute requête
    Validation,
    /// Échec pendant ou après l'appel réseau
    Request,
    /// Déclenchement ignoré pendant une requête en vol
    Busy,
    Config,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::EmptySequence => ErrorKind::Validation,
            AnalysisError::ResponseStatus { .. }
            | AnalysisError::Transport(_)
            | AnalysisError::MalformedResponse(_)
            | AnalysisError::InvalidResult(_) => ErrorKind::Request,
            AnalysisError::Busy => ErrorKind::Busy,
            AnalysisError::Config(_) => ErrorKind::Config,
        }
    }

    /// Texte destiné à la zone d'erreur de la page
    pub fn display_message(&self) -> String {
        match self.kind() {
            ErrorKind::Request => format!("An error occurred: {}", self),
            _ => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::MalformedResponse(err.to_string())
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::MalformedResponse(err.to_string())
    }
}

impl From<config::ConfigError> for AnalysisError {
    fn from(err: config::ConfigError) -> Self {
        AnalysisError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
