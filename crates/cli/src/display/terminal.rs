//! Rendu de la page dans le terminal

use console::{style, StyledObject};
use dnaview_core::{AnalysisResult, Chart, PageView, Visible};
use std::io::{self, Write};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct OrfRow {
    #[tabled(rename = "Start")]
    start: usize,
    #[tabled(rename = "End")]
    end: usize,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Sequence")]
    sequence: String,
}

/// Affiche la zone visible de la page; la zone d'erreur part sur `err`
pub fn print_page(
    view: &PageView,
    result: Option<&AnalysisResult>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match view.visible() {
        Visible::Nothing => {}
        Visible::Error => {
            if let Some(message) = view.error_message() {
                writeln!(err, "{}", style(message).red().bold())?;
            }
        }
        Visible::Results => {
            writeln!(out)?;
            writeln!(out, "{}", style("Nucleotide Count").bold().underlined())?;
            if let Some(chart) = view.nucleotide_chart().current() {
                print_counts(chart, out)?;
            }

            writeln!(out)?;
            writeln!(out, "{}", style("GC Content").bold().underlined())?;
            if let Some(chart) = view.gc_content_chart().current() {
                print_gc_content(chart, out)?;
            }

            writeln!(out)?;
            for line in view.text_results() {
                writeln!(out, "{}", line)?;
            }

            if let Some(orfs) = result.and_then(|r| r.orfs.as_ref()).filter(|o| !o.is_empty()) {
                let rows: Vec<OrfRow> = orfs
                    .iter()
                    .map(|orf| OrfRow {
                        start: orf.start,
                        end: orf.end,
                        length: orf.length,
                        sequence: orf.sequence.chars().take(48).collect(),
                    })
                    .collect();
                writeln!(out)?;
                writeln!(out, "{}", Table::new(rows))?;
            }
        }
    }
    Ok(())
}

fn print_counts(chart: &Chart, out: &mut impl Write) -> io::Result<()> {
    for line in chart.lines() {
        let symbol = line.chars().next().unwrap_or(' ');
        writeln!(out, "{}", symbol_style(symbol, line))?;
    }
    Ok(())
}

fn print_gc_content(chart: &Chart, out: &mut impl Write) -> io::Result<()> {
    let mut lines = chart.lines().iter();
    if let Some(bar) = lines.next() {
        writeln!(out, "{}", style(bar).cyan())?;
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Couleur par base, dans l'esprit des visualiseurs de séquences
fn symbol_style(symbol: char, line: &str) -> StyledObject<&str> {
    match symbol.to_ascii_uppercase() {
        'A' => style(line).green(),
        'C' => style(line).blue(),
        'G' => style(line).yellow(),
        'T' | 'U' => style(line).red(),
        _ => style(line).dim(),
    }
}
