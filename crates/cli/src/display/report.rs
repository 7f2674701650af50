//! Export des résultats en JSON ou HTML

use anyhow::Result;
use chrono::{DateTime, Utc};
use dnaview_core::AnalysisResult;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Rapport d'une analyse réussie
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub sequence: &'a str,
    pub sequence_length: usize,
    pub service: &'a str,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(sequence: &'a str, service: &'a str, result: &'a AnalysisResult) -> Self {
        Self {
            sequence,
            sequence_length: sequence.chars().count(),
            service,
            analyzed_at: Utc::now(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_html(&self) -> String {
        let max = self.result.nucleotide_count.values().copied().max().unwrap_or(0);

        let rows = self
            .result
            .nucleotide_count
            .iter()
            .map(|(symbol, count)| {
                let width = if max == 0 { 0.0 } else { *count as f64 / max as f64 * 100.0 };
                format!(
                    "<tr><td>{}</td><td>{}</td><td><div class=\"bar\" style=\"width: {:.1}%\"></div></td></tr>",
                    escape(symbol),
                    count,
                    width
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ");

        let mut extra = String::new();
        if let Some(complement) = &self.result.complementary_sequence {
            extra.push_str(&format!(
                "<p><strong>Complementary sequence:</strong> <code>{}</code></p>\n",
                escape(complement)
            ));
        }
        if let Some(orfs) = &self.result.orfs {
            extra.push_str(&format!("<p><strong>Open reading frames:</strong> {}</p>\n", orfs.len()));
        }
        if let Some(sites) = &self.result.restriction_sites {
            for (enzyme, positions) in sites {
                extra.push_str(&format!(
                    "<p><strong>{}:</strong> {}</p>\n",
                    escape(enzyme),
                    positions.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ")
                ));
            }
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>DNA Analysis</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
        th {{ background-color: #4CAF50; color: white; }}
        .bar {{ background-color: #36a2eb; height: 14px; }}
        .gc {{ background-color: #ff6384; height: 20px; }}
        .track {{ background-color: #ffcd56; width: 100%; }}
    </style>
</head>
<body>
    <h1>🧬 DNA Analysis</h1>
    <p><strong>Length:</strong> {} bases, analysed {}</p>
    <h2>Nucleotide Count</h2>
    <table>
        <tr><th>Nucleotide</th><th>Count</th><th></th></tr>
        {}
    </table>
    <h2>GC Content: {:.2}%</h2>
    <div class="track"><div class="gc" style="width: {:.2}%"></div></div>
    {}
</body>
</html>
"#,
            self.sequence_length,
            self.analyzed_at.to_rfc3339(),
            rows,
            self.result.gc_content,
            self.result.gc_content,
            extra
        )
    }

    /// Écrit le rapport dans un fichier ou sur `out`
    pub fn write(&self, content: &str, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                writeln!(out, "Rapport écrit dans: {}", path.display())?;
            }
            None => writeln!(out, "{}", content)?,
        }
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            nucleotide_count: BTreeMap::from([("A".to_string(), 3), ("G".to_string(), 1)]),
            gc_content: 25.0,
            complementary_sequence: Some("TTTC".to_string()),
            orfs: None,
            restriction_sites: None,
        }
    }

    #[test]
    fn test_json_report_flattens_result() {
        let result = sample();
        let report = AnalysisReport::new("AAAG", "http://localhost:5000/analyze", &result);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["sequence_length"], 4);
        assert_eq!(value["gc_content"], 25.0);
        assert_eq!(value["nucleotide_count"]["A"], 3);
        assert!(value.get("orfs").is_none());
    }

    #[test]
    fn test_html_report() {
        let result = sample();
        let report = AnalysisReport::new("AAAG", "svc", &result);
        let html = report.to_html();

        assert!(html.contains("<h2>GC Content: 25.00%</h2>"));
        assert!(html.contains("<td>A</td><td>3</td>"));
        assert!(html.contains("<code>TTTC</code>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>&\"</b>"), "&lt;b&gt;&amp;&quot;&lt;/b&gt;");
    }
}
