//! PDF rendering of an analysis report.

use std::io::BufWriter;

use printpdf::*;
use thiserror::Error;

use crate::models::AnalysisReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

const DISCLAIMER: &str = "This report is generated from an illustrative drug data set and is \
not a substitute for professional medical advice. Always consult a healthcare provider before \
changing any medication.";

/// Render an analysis report to PDF bytes (A4, single page).
pub fn render_report(report: &AnalysisReport) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) =
        PdfDocument::new("Prescription Analysis Report", Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(format!("font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(format!("font: {e}")))?;
    let courier = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ReportError::Render(format!("font: {e}")))?;

    let mut y = Mm(280.0);

    // Header
    layer.use_text("Prescription Analysis Report", 14.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!("Generated: {}", report.summary.analysis_timestamp),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    layer.use_text(
        format!("Report ID: {}", report.report_id),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(8.0);

    // Summary
    layer.use_text("SUMMARY:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    let summary_lines = [
        format!("Patient age: {}", report.summary.patient_age),
        format!("Drugs found: {}", report.summary.total_drugs),
        format!(
            "Interactions: {} (high: {}, medium: {}, low: {})",
            report.summary.total_interactions,
            report.summary.high_risk_interactions,
            report.summary.medium_risk_interactions,
            report.summary.low_risk_interactions,
        ),
    ];
    for line in &summary_lines {
        layer.use_text(format!("  {line}"), 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    // Drugs found
    if !report.drugs_found.is_empty() {
        layer.use_text("DRUGS FOUND:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        layer.use_text(
            format!("  {}", report.drugs_found.join(", ")),
            9.0,
            Mm(25.0),
            y,
            &font,
        );
        y -= Mm(8.0);
    }

    // Interactions
    if !report.interactions.is_empty() {
        layer.use_text("INTERACTIONS:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        for annotated in &report.interactions {
            let record = &annotated.interaction;
            let heading = format!(
                "  {} + {} [{}]",
                record.drug_a,
                record.drug_b,
                record.severity.as_str().to_uppercase(),
            );
            layer.use_text(&heading, 9.5, Mm(25.0), y, &bold);
            y -= Mm(4.5);
            for line in wrap_text(&record.description, 85) {
                layer.use_text(format!("  {line}"), 9.0, Mm(27.0), y, &font);
                y -= Mm(4.5);
            }
            if let Some(explanation) = &annotated.patient_explanation {
                for line in wrap_text(explanation, 85) {
                    layer.use_text(format!("  {line}"), 8.0, Mm(27.0), y, &font);
                    y -= Mm(4.0);
                }
            }
            y -= Mm(2.0);
        }
        y -= Mm(4.0);
    }

    // Dosage recommendations
    if !report.dosage_results.is_empty() {
        layer.use_text("DOSAGE RECOMMENDATIONS:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        for rec in &report.dosage_results {
            let line = format!(
                "  {} ({}): {} — max daily {}",
                rec.drug,
                rec.age_group.as_str(),
                rec.recommended_dosage,
                rec.max_daily,
            );
            layer.use_text(&line, 8.0, Mm(25.0), y, &courier);
            y -= Mm(4.0);
            if !rec.contraindications.is_empty() {
                let contra = format!("    avoid with: {}", rec.contraindications.join(", "));
                for line in wrap_text(&contra, 90) {
                    layer.use_text(&line, 8.0, Mm(25.0), y, &courier);
                    y -= Mm(4.0);
                }
            }
        }
        y -= Mm(4.0);
    }

    // Disclaimer
    y -= Mm(4.0);
    for line in wrap_text(DISCLAIMER, 90) {
        layer.use_text(&line, 7.0, Mm(20.0), y, &font);
        y -= Mm(3.5);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Render(format!("save: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Render(format!("buffer: {e}")))
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisSummary, AnnotatedInteraction, InteractionRecord, Severity};
    use uuid::Uuid;

    fn sample_report() -> AnalysisReport {
        let interactions = vec![AnnotatedInteraction {
            interaction: InteractionRecord {
                drug_a: "aspirin".into(),
                drug_b: "ibuprofen".into(),
                description: "May increase risk of gastrointestinal bleeding".into(),
                severity: Severity::High,
            },
            ai_analysis: "analysis".into(),
            patient_explanation: Some("Talk to your doctor before combining these.".into()),
        }];
        let drugs = vec!["aspirin".to_string(), "ibuprofen".to_string()];
        let summary = AnalysisSummary::tally(&drugs, &interactions, 30, "2026-01-01T00:00:00Z".into());

        AnalysisReport {
            report_id: Uuid::new_v4(),
            drugs_found: drugs,
            interactions,
            dosage_results: Vec::new(),
            patient_explanations: Vec::new(),
            summary,
        }
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = render_report(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn renders_empty_report() {
        let mut report = sample_report();
        report.drugs_found.clear();
        report.interactions.clear();
        report.summary = AnalysisSummary::tally(&[], &[], 30, "t".into());
        let bytes = render_report(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn wrap_text_respects_width() {
        let lines = wrap_text("one two three four five six seven eight", 15);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 15));
    }

    #[test]
    fn wrap_text_of_empty_input_is_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
