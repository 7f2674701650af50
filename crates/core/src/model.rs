//! Requête et résultat d'analyse échangés avec le service distant

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Corps de la requête envoyée au service d'analyse
///
/// La séquence est toujours la saisie nettoyée (espaces de bord retirés) et
/// jamais vide : `new` est le seul constructeur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    sequence: String,
}

impl AnalysisRequest {
    /// Construit une requête depuis la saisie brute de l'utilisateur
    pub fn new(raw: &str) -> Result<Self> {
        let sequence = raw.trim();
        if sequence.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }

        Ok(Self {
            sequence: sequence.to_string(),
        })
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Corps JSON exact de la requête
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Cadre de lecture ouvert renvoyé par le service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenReadingFrame {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub sequence: String,
}

/// Résultat d'analyse validé
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Nombre d'occurrences par symbole de nucléotide
    pub nucleotide_count: BTreeMap<String, u64>,
    /// Pourcentage GC (0-100)
    pub gc_content: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complementary_sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orfs: Option<Vec<OpenReadingFrame>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_sites: Option<BTreeMap<String, Vec<usize>>>,
}

impl AnalysisResult {
    /// Décode et valide un corps de réponse JSON
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let result: AnalysisResult = serde_json::from_slice(body)?;
        result.validate()?;
        Ok(result)
    }

    /// Vérifie que le résultat peut être rendu sans cas partiel
    pub fn validate(&self) -> Result<()> {
        if !self.gc_content.is_finite() || !(0.0..=100.0).contains(&self.gc_content) {
            return Err(AnalysisError::InvalidResult(format!(
                "gc_content hors de [0, 100]: {}",
                self.gc_content
            )));
        }

        if self.nucleotide_count.keys().any(|symbol| symbol.trim().is_empty()) {
            return Err(AnalysisError::InvalidResult(
                "symbole de nucléotide vide".to_string(),
            ));
        }

        Ok(())
    }

    /// Somme de tous les comptages
    pub fn total_count(&self) -> u64 {
        self.nucleotide_count.values().sum()
    }
}

/// Corps d'erreur optionnel renvoyé avec un statut non-2xx
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorBody {
    pub error: String,
}
