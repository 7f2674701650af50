//! Graphiques texte liés à un canevas
//!
//! Un canevas compte les graphiques vivants qui lui sont liés. Un
//! [`ChartSlot`] détruit toujours le graphique précédent avant d'en lier un
//! nouveau, de sorte qu'un canevas ne porte jamais deux graphiques à la fois.

use crate::config::RenderConfig;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Identifiant du canevas des comptages de nucléotides
pub const NUCLEOTIDE_CANVAS: &str = "nucleotide-chart";

/// Identifiant du canevas du taux GC
pub const GC_CONTENT_CANVAS: &str = "gc-content-chart";

const FILLED: char = '█';
const EMPTY: char = '░';

/// Données d'entrée d'un graphique
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Histogramme des comptages par symbole
    NucleotideCounts(BTreeMap<String, u64>),
    /// Part GC contre part AT, en pourcentage
    GcContent(f64),
}

/// Surface de dessin partagée
#[derive(Debug, Clone)]
pub struct Canvas {
    id: String,
    live: Arc<AtomicUsize>,
    draws: Arc<AtomicU64>,
}

impl Canvas {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            live: Arc::new(AtomicUsize::new(0)),
            draws: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Nombre de graphiques actuellement liés au canevas
    pub fn live_charts(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Nombre total de graphiques construits sur ce canevas
    pub fn draw_count(&self) -> u64 {
        self.draws.load(Ordering::SeqCst)
    }

    fn bind(&self) -> CanvasBinding {
        self.live.fetch_add(1, Ordering::SeqCst);
        self.draws.fetch_add(1, Ordering::SeqCst);
        CanvasBinding {
            live: Arc::clone(&self.live),
        }
    }
}

/// Liaison d'un graphique à son canevas, relâchée au drop
#[derive(Debug)]
struct CanvasBinding {
    live: Arc<AtomicUsize>,
}

impl Drop for CanvasBinding {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Graphique construit sur un canevas
#[derive(Debug)]
pub struct Chart {
    data: ChartData,
    lines: Vec<String>,
    _binding: CanvasBinding,
}

impl Chart {
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Lignes rendues, sans couleur
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Libère le canevas
    pub fn destroy(self) {}
}

/// Emplacement propriétaire du graphique d'un canevas
#[derive(Debug)]
pub struct ChartSlot {
    canvas: Canvas,
    current: Option<Chart>,
}

impl ChartSlot {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            current: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn current(&self) -> Option<&Chart> {
        self.current.as_ref()
    }

    /// Détruit le graphique courant puis en construit un nouveau
    pub fn draw(&mut self, data: ChartData, render: &RenderConfig) -> &Chart {
        self.clear();

        let lines = match &data {
            ChartData::NucleotideCounts(counts) => render_counts(counts, render.bar_width),
            ChartData::GcContent(percent) => render_gc_content(*percent, render.bar_width),
        };

        trace!(canvas = %self.canvas.id, "Graphique reconstruit");
        self.current.insert(Chart {
            data,
            lines,
            _binding: self.canvas.bind(),
        })
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.destroy();
        }
    }
}

/// Histogramme horizontal des comptages
fn render_counts(counts: &BTreeMap<String, u64>, width: usize) -> Vec<String> {
    let max = counts.values().copied().max().unwrap_or(0);
    let label_width = counts.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    counts
        .iter()
        .map(|(symbol, &count)| {
            let len = match (max, count) {
                (0, _) | (_, 0) => 0,
                // Une barre non nulle reste visible
                _ => (((count as f64 / max as f64) * width as f64).round() as usize).clamp(1, width.max(1)),
            };
            format!(
                "{:<label_width$} │{}{} {}",
                symbol,
                FILLED.to_string().repeat(len),
                " ".repeat(width.saturating_sub(len)),
                count
            )
        })
        .collect()
}

/// Barre empilée GC / AT
fn render_gc_content(percent: f64, width: usize) -> Vec<String> {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * width as f64).round() as usize;

    vec![
        format!(
            "{}{}",
            FILLED.to_string().repeat(filled),
            EMPTY.to_string().repeat(width.saturating_sub(filled))
        ),
        format!("GC {:.2}% │ AT {:.2}%", percent, 100.0 - percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_redraw_disposes_previous_chart() {
        let canvas = Canvas::new(NUCLEOTIDE_CANVAS);
        let mut slot = ChartSlot::new(canvas.clone());
        let render = RenderConfig::default();

        slot.draw(ChartData::NucleotideCounts(counts(&[("A", 1)])), &render);
        assert_eq!(canvas.live_charts(), 1);

        slot.draw(ChartData::NucleotideCounts(counts(&[("A", 5), ("C", 2)])), &render);
        assert_eq!(canvas.live_charts(), 1);
        assert_eq!(canvas.draw_count(), 2);
        assert_eq!(
            slot.current().unwrap().data(),
            &ChartData::NucleotideCounts(counts(&[("A", 5), ("C", 2)]))
        );

        slot.clear();
        assert_eq!(canvas.live_charts(), 0);
    }

    #[test]
    fn test_counts_are_scaled_to_max() {
        let lines = render_counts(&counts(&[("A", 10), ("C", 5), ("G", 0)]), 10);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("A │{} 10", "█".repeat(10)));
        assert_eq!(lines[1], format!("C │{}{} 5", "█".repeat(5), " ".repeat(5)));
        assert_eq!(lines[2], format!("G │{} 0", " ".repeat(10)));
    }

    #[test]
    fn test_small_count_stays_visible() {
        let lines = render_counts(&counts(&[("A", 1000), ("T", 1)]), 20);
        assert!(lines[1].contains('█'));
    }

    #[test]
    fn test_gc_bar() {
        let lines = render_gc_content(25.0, 8);
        assert_eq!(lines[0], "██░░░░░░");
        assert_eq!(lines[1], "GC 25.00% │ AT 75.00%");
    }
}
