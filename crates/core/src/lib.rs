//! DNAView Core Library
//!
//! Client du service d'analyse de séquences ADN : validation de la saisie,
//! requête HTTP, puis rendu des comptages de nucléotides et du taux GC.

pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod view;

// Réexportations principales
pub use chart::{Canvas, Chart, ChartData, ChartSlot, GC_CONTENT_CANVAS, NUCLEOTIDE_CANVAS};
pub use config::{AppConfig, LoggingConfig, RenderConfig, ServiceConfig, DEFAULT_SERVICE_ADDRESS};
pub use controller::AnalysisPage;
pub use error::{AnalysisError, ErrorKind, Result, EMPTY_SEQUENCE_MESSAGE};
pub use logging::init_logging;
pub use model::{AnalysisRequest, AnalysisResult, OpenReadingFrame};
pub use service::{AnalysisService, HttpAnalysisService};
pub use view::{PageView, Visible};
