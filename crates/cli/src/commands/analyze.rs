//! Commande d'analyse

use crate::display::report::AnalysisReport;
use crate::display::terminal;
use crate::{create_spinner, OutputFormat};
use anyhow::{Context, Result};
use dnaview_core::{AnalysisPage, AppConfig, HttpAnalysisService};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;

/// Issue d'une commande d'analyse, déjà affichée à l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// L'erreur a été affichée dans la zone d'erreur
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

pub async fn run(
    config: &AppConfig,
    sequence: Option<String>,
    input: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<Outcome> {
    // 1. Lire la saisie
    let raw = match (sequence, input) {
        (Some(sequence), _) => sequence,
        (None, Some(path)) => read_sequence_file(&path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("lecture de stdin")?;
            buffer
        }
    };

    execute(
        config,
        &raw,
        format,
        output.as_deref(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
}

/// Interroge le service puis affiche ou exporte le résultat
///
/// Un échec d'analyse n'est affiché qu'une fois, dans la zone d'erreur, et
/// se traduit par [`Outcome::Failed`] plutôt que par une erreur.
pub async fn execute(
    config: &AppConfig,
    raw: &str,
    format: OutputFormat,
    output: Option<&Path>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let service = HttpAnalysisService::new(&config.service)?;
    let page = AnalysisPage::new(service, config.render.clone());

    let spinner = create_spinner(&format!("Analyse via {}", config.service.address));
    let outcome = page.analyze(raw).await;
    spinner.finish_and_clear();

    let view = page.view();
    let result = match outcome {
        Ok(result) => result,
        Err(_) => {
            terminal::print_page(&view, None, out, err)?;
            return Ok(Outcome::Failed);
        }
    };

    match format {
        OutputFormat::Terminal => terminal::print_page(&view, Some(&result), out, err)?,
        OutputFormat::Json | OutputFormat::Html => {
            let report = AnalysisReport::new(raw.trim(), &config.service.address, &result);
            let content = match format {
                OutputFormat::Json => report.to_json()?,
                _ => report.to_html(),
            };
            report.write(&content, output, out)?;
        }
    }

    Ok(Outcome::Success)
}

/// Lit un fichier FASTA (premier enregistrement) ou du texte brut
fn read_sequence_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("lecture de {}", path.display()))?;
    Ok(parse_sequence_text(&content))
}

fn parse_sequence_text(content: &str) -> String {
    if !content.trim_start().starts_with('>') {
        return content.to_string();
    }

    let mut sequence = String::new();
    let mut records = 0;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('>') {
            records += 1;
            continue;
        }
        if records == 1 {
            sequence.push_str(line);
        }
    }

    if records > 1 {
        warn!("{} enregistrements FASTA, seul le premier est analysé", records);
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::ServerHandle;
    use actix_web::http::StatusCode;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use dnaview_core::ServiceConfig;

    struct Stub {
        status: u16,
        reply: &'static str,
    }

    async fn analyze_stub(stub: web::Data<Stub>) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(stub.status).unwrap())
            .content_type("application/json")
            .body(stub.reply)
    }

    /// Démarre un service d'analyse factice et retourne la configuration qui le vise
    fn start_stub(status: u16, reply: &'static str) -> (AppConfig, ServerHandle) {
        let stub = web::Data::new(Stub { status, reply });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(stub.clone())
                .route("/analyze", web::post().to(analyze_stub))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let config = AppConfig {
            service: ServiceConfig {
                address: format!("http://{}/analyze", addr),
                timeout_secs: Some(10),
            },
            ..Default::default()
        };
        (config, handle)
    }

    #[actix_web::test]
    async fn test_json_export_to_file() {
        let (config, handle) = start_stub(
            200,
            r#"{"nucleotide_count": {"A": 1, "C": 1, "G": 1, "T": 1}, "gc_content": 50.0}"#,
        );
        let dir = std::env::temp_dir().join(format!("dnaview-analyze-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = execute(&config, "  ACGT ", OutputFormat::Json, Some(&path), &mut out, &mut err)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert!(err.is_empty());

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report["sequence"], "ACGT");
        assert_eq!(report["sequence_length"], 4);
        assert_eq!(report["gc_content"], 50.0);
        assert_eq!(report["nucleotide_count"]["G"], 1);
        assert!(String::from_utf8(out).unwrap().contains("report.json"));

        std::fs::remove_dir_all(&dir).unwrap();
        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_failed_analysis_reports_once() {
        let (config, handle) = start_stub(400, r#"{"error": "Invalid DNA sequence."}"#);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = execute(&config, "ACGU", OutputFormat::Terminal, None, &mut out, &mut err)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Failed);
        assert!(out.is_empty());

        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().count(), 1);
        assert_eq!(err.matches("An error occurred:").count(), 1);
        assert!(err.contains("HTTP error! status: 400 (Invalid DNA sequence.)"));

        handle.stop(true).await;
    }

    #[actix_web::test]
    async fn test_empty_input_reports_validation_message() {
        let (config, handle) = start_stub(200, "{}");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = execute(&config, "   ", OutputFormat::Terminal, None, &mut out, &mut err)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(String::from_utf8(err).unwrap().trim(), "Please enter a DNA sequence.");

        handle.stop(true).await;
    }

    #[test]
    fn test_raw_text_is_kept() {
        assert_eq!(parse_sequence_text("  ACGT ac gt \n"), "  ACGT ac gt \n");
    }

    #[test]
    fn test_fasta_first_record() {
        let fasta = ">seq1 test\nACGT\nTTGA\n\n>seq2\nGGGG\n";
        assert_eq!(parse_sequence_text(fasta), "ACGTTTGA");
    }

    #[test]
    fn test_fasta_without_bases() {
        assert_eq!(parse_sequence_text(">empty\n"), "");
    }
}
