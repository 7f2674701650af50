//! Modèle de la page d'analyse
//!
//! Zone d'erreur, zone de résultats, résumé texte et deux canevas. Après un
//! cycle de requête, une seule des deux zones est visible.

use crate::chart::{Canvas, ChartData, ChartSlot, GC_CONTENT_CANVAS, NUCLEOTIDE_CANVAS};
use crate::config::RenderConfig;
use crate::model::AnalysisResult;

/// Zone actuellement visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visible {
    /// Rien n'a encore été analysé
    Nothing,
    Error,
    Results,
}

#[derive(Debug)]
pub struct PageView {
    error_message: Option<String>,
    results_visible: bool,
    text_results: Vec<String>,
    nucleotide_chart: ChartSlot,
    gc_content_chart: ChartSlot,
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl PageView {
    pub fn new() -> Self {
        Self {
            error_message: None,
            results_visible: false,
            text_results: Vec::new(),
            nucleotide_chart: ChartSlot::new(Canvas::new(NUCLEOTIDE_CANVAS)),
            gc_content_chart: ChartSlot::new(Canvas::new(GC_CONTENT_CANVAS)),
        }
    }

    /// Affiche un message d'erreur et masque les résultats
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.results_visible = false;
    }

    /// Masque l'erreur et révèle les résultats
    pub fn hide_error(&mut self) {
        self.error_message = None;
        self.results_visible = true;
    }

    pub fn visible(&self) -> Visible {
        match (&self.error_message, self.results_visible) {
            (Some(_), _) => Visible::Error,
            (None, true) => Visible::Results,
            (None, false) => Visible::Nothing,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn text_results(&self) -> &[String] {
        &self.text_results
    }

    pub fn nucleotide_chart(&self) -> &ChartSlot {
        &self.nucleotide_chart
    }

    pub fn gc_content_chart(&self) -> &ChartSlot {
        &self.gc_content_chart
    }

    /// Rend les deux graphiques et le résumé texte
    pub fn display_results(&mut self, result: &AnalysisResult, render: &RenderConfig) {
        self.update_nucleotide_chart(result, render);
        self.update_gc_content_chart(result, render);
        self.display_text_results(result);
    }

    fn update_nucleotide_chart(&mut self, result: &AnalysisResult, render: &RenderConfig) {
        self.nucleotide_chart.draw(
            ChartData::NucleotideCounts(result.nucleotide_count.clone()),
            render,
        );
    }

    fn update_gc_content_chart(&mut self, result: &AnalysisResult, render: &RenderConfig) {
        self.gc_content_chart
            .draw(ChartData::GcContent(result.gc_content), render);
    }

    fn display_text_results(&mut self, result: &AnalysisResult) {
        let mut lines = Vec::new();

        let counts = result
            .nucleotide_count
            .iter()
            .map(|(symbol, count)| format!("{}: {}", symbol, count))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Nucleotide Count: {}", counts));
        lines.push(format!("GC Content: {:.2}%", result.gc_content));

        if let Some(complement) = &result.complementary_sequence {
            lines.push(format!("Complementary Sequence: {}", complement));
        }

        if let Some(orfs) = &result.orfs {
            lines.push(format!("Open Reading Frames: {}", orfs.len()));
            for orf in orfs {
                lines.push(format!(
                    "  {}..{} ({} bp): {}",
                    orf.start, orf.end, orf.length, orf.sequence
                ));
            }
        }

        if let Some(sites) = &result.restriction_sites {
            if sites.is_empty() {
                lines.push("Restriction Sites: none".to_string());
            } else {
                lines.push("Restriction Sites:".to_string());
                for (enzyme, positions) in sites {
                    let positions = positions
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    lines.push(format!("  {}: {}", enzyme, positions));
                }
            }
        }

        self.text_results = lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            nucleotide_count: BTreeMap::from([
                ("A".to_string(), 1),
                ("C".to_string(), 1),
                ("G".to_string(), 1),
                ("T".to_string(), 1),
            ]),
            gc_content: 50.0,
            complementary_sequence: None,
            orfs: None,
            restriction_sites: Some(BTreeMap::new()),
        }
    }

    #[test]
    fn test_initial_state_shows_nothing() {
        let view = PageView::new();
        assert_eq!(view.visible(), Visible::Nothing);
        assert!(view.nucleotide_chart().current().is_none());
    }

    #[test]
    fn test_error_and_results_are_exclusive() {
        let mut view = PageView::new();

        view.hide_error();
        assert_eq!(view.visible(), Visible::Results);
        assert!(view.error_message().is_none());

        view.show_error("boom");
        assert_eq!(view.visible(), Visible::Error);
        assert!(!view.is_results_visible());

        view.hide_error();
        assert_eq!(view.visible(), Visible::Results);
    }

    #[test]
    fn test_text_summary() {
        let mut view = PageView::new();
        view.display_results(&sample_result(), &RenderConfig::default());

        assert_eq!(
            view.text_results(),
            &[
                "Nucleotide Count: A: 1, C: 1, G: 1, T: 1".to_string(),
                "GC Content: 50.00%".to_string(),
                "Restriction Sites: none".to_string(),
            ]
        );
    }
}
