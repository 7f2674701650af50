//! Mode interactif : chaque ligne saisie déclenche une analyse

use crate::create_spinner;
use crate::display::terminal;
use anyhow::Result;
use dnaview_core::{AnalysisPage, AppConfig, HttpAnalysisService};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("🧬 Service d'analyse: {}", config.service.address);
    println!("Saisir une séquence ADN par ligne, `:q` pour quitter.");

    let page = AnalysisPage::new(HttpAnalysisService::new(&config.service)?, config.render.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if is_quit(&line) {
            break;
        }

        let spinner = create_spinner("Analyse en cours");
        let outcome = page.analyze(&line).await;
        spinner.finish_and_clear();

        let view = page.view();
        terminal::print_page(
            &view,
            outcome.as_ref().ok(),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )?;
    }

    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), ":q" | "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_commands() {
        assert!(is_quit(":q"));
        assert!(is_quit("  quit "));
        assert!(!is_quit("ACGT"));
        assert!(!is_quit(""));
    }
}
