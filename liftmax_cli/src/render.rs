//! Plain-text rendering of results, RPE tables and errors.

use liftmax_core::errors::CalcError;
use liftmax_core::session::FormState;
use liftmax_core::{RpeTable, Session};

const RULE: &str = "═══════════════════════════════════════";

/// Result summary, one line per formula whose table is closed.
///
/// `None` until the session holds an estimate.
pub fn results(session: &Session) -> Option<String> {
    let result = session.result()?;
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\n  ESTIMATED 1RM\n");
    out.push_str(RULE);
    out.push('\n');
    for (formula, value) in session.summary_lines() {
        out.push_str(&format!("  {:<8} {:>12}\n", formula.display_name(), value));
    }
    if result.bodyweight_corrected {
        out.push_str("\n  Note: values show added weight only (bodyweight subtracted)\n");
    }
    Some(out)
}

/// RPE table with title, caption and aligned columns
pub fn table(table: &RpeTable) -> String {
    let header = RpeTable::header_columns();
    let rows = table.display_rows();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].len())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", RpeTable::TITLE, table.caption()));
    out.push_str(&line(&header));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// Current form selection
pub fn form(form: &FormState) -> String {
    let mut out = format!(
        "Unit: {}  Movement: {}\n{}: {}",
        form.unit,
        form.movement_type,
        form.weight_label(),
        form.weight_description()
    );
    if form.bodyweight_required() {
        out.push_str(&format!("\nBodyweight ({}) required: add bw=<value>", form.bodyweight_unit_label()));
    }
    out
}

/// User-facing copy for an error
pub fn error_message(error: &CalcError) -> String {
    match error {
        CalcError::InvalidReps { .. } => "Please enter valid reps value.".to_string(),
        CalcError::MissingBodyweight { .. } => {
            "Please enter your bodyweight for bodyweight movements.".to_string()
        }
        CalcError::NoEstimate { .. } => "Calculate a 1RM before opening a table.".to_string(),
        other => other.to_string(),
    }
}
