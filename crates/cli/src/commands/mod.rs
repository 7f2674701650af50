//! Sous-commandes du CLI

pub mod analyze;
pub mod interactive;
pub mod show_config;
