//! Affichage et export des résultats

pub mod report;
pub mod terminal;
