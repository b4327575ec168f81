//! Rendering evaluations for people and for scripts.
//!
//! Evaluation itself is pure; this is the one place that writes output,
//! and it is called once per run after the verdict is known.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::io::Write;
use strictly_verdict::{Board, DrawPolicy, Evaluation, GameStatus, LineSet};
use tracing::instrument;

/// Output format for reports.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReportFormat {
    /// Board grid, one line per projection, then the status message.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Error writing a report.
#[derive(Debug, Display, Error, From)]
pub enum ReportError {
    /// The output stream failed.
    #[display("Failed to write report: {}", _0)]
    Io(std::io::Error),
    /// The report could not be encoded.
    #[display("Failed to encode report: {}", _0)]
    Json(serde_json::Error),
}

#[derive(Serialize)]
struct JsonLine {
    line: String,
    values: Vec<u8>,
}

#[derive(Serialize)]
struct JsonReport {
    size: usize,
    board: Vec<u8>,
    lines: Vec<JsonLine>,
    status: GameStatus,
    message: String,
    lines_examined: usize,
    winning_line: Option<String>,
    draw_policy: DrawPolicy,
}

/// Writes an evaluation of `board` in the given format.
#[instrument(skip(writer, board, evaluation), fields(status = %evaluation.status()))]
pub fn write_report<W: Write>(
    writer: &mut W,
    board: &Board,
    evaluation: &Evaluation,
    format: ReportFormat,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => write_text(writer, board, evaluation),
        ReportFormat::Json => write_json(writer, board, evaluation),
    }
}

fn write_text<W: Write>(
    writer: &mut W,
    board: &Board,
    evaluation: &Evaluation,
) -> Result<(), ReportError> {
    writeln!(writer, "{}", board)?;
    writeln!(writer)?;
    for projection in evaluation.projections() {
        writeln!(writer, "{}: {}", projection.kind(), projection.values())?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "Decided after {} of {} lines ({} draw policy)",
        evaluation.lines_examined(),
        evaluation.projections().len(),
        evaluation.draw_policy()
    )?;
    writeln!(writer, "{}", evaluation.status())?;
    Ok(())
}

fn write_json<W: Write>(
    writer: &mut W,
    board: &Board,
    evaluation: &Evaluation,
) -> Result<(), ReportError> {
    let report = JsonReport {
        size: board.size(),
        board: board.values(),
        lines: evaluation
            .projections()
            .iter()
            .map(|p| JsonLine {
                line: p.kind().to_string(),
                values: p.values().values(),
            })
            .collect(),
        status: *evaluation.status(),
        message: evaluation.status().to_string(),
        lines_examined: *evaluation.lines_examined(),
        winning_line: evaluation.winning_line().map(|kind| kind.to_string()),
        draw_policy: *evaluation.draw_policy(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the index sets of every line, in scan order.
#[instrument(skip(writer, lines), fields(size = lines.size()))]
pub fn write_lines<W: Write>(
    writer: &mut W,
    lines: &LineSet,
    format: ReportFormat,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => {
            for line in lines {
                writeln!(writer, "{}: {:?}", line.kind(), line.indices())?;
            }
        }
        ReportFormat::Json => {
            let entries = lines
                .iter()
                .map(|line| {
                    serde_json::json!({
                        "line": line.kind().to_string(),
                        "indices": line.indices(),
                    })
                })
                .collect::<Vec<_>>();
            serde_json::to_writer_pretty(&mut *writer, &entries)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_verdict::evaluate;

    fn render(values: &[u8], policy: DrawPolicy, format: ReportFormat) -> String {
        let board = Board::from_values(3, values).unwrap();
        let evaluation = evaluate(&board, policy);
        let mut out = Vec::new();
        write_report(&mut out, &board, &evaluation, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_lists_lines_and_status() {
        let text = render(
            &[2, 2, 1, 2, 2, 0, 1, 2, 1],
            DrawPolicy::PerLine,
            ReportFormat::Text,
        );
        assert!(text.starts_with("2|2|1\n-+-+-\n2|2|.\n-+-+-\n1|2|1\n"));
        assert!(text.contains("row 0: [2, 2, 1]"));
        assert!(text.contains("column 1: [2, 2, 2]"));
        assert!(text.contains("anti-diagonal: [1, 2, 1]"));
        assert!(text.contains("Decided after 5 of 8 lines (per-line draw policy)"));
        assert!(text.trim_end().ends_with("Player 2 Won"));
    }

    #[test]
    fn test_json_report_fields() {
        let json = render(
            &[1, 2, 1, 2, 1, 2, 2, 1, 2],
            DrawPolicy::PerLine,
            ReportFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Draw");
        assert_eq!(value["message"], "It's a Draw (no more empty fields)");
        assert_eq!(value["lines_examined"], 1);
        assert_eq!(value["draw_policy"], "per-line");
        assert_eq!(value["lines"].as_array().unwrap().len(), 8);
        assert_eq!(value["lines"][6]["line"], "main diagonal");
        assert_eq!(value["lines"][6]["values"], serde_json::json!([1, 1, 2]));
        assert!(value["winning_line"].is_null());
    }

    #[test]
    fn test_lines_text() {
        let mut out = Vec::new();
        write_lines(&mut out, &LineSet::new(2).unwrap(), ReportFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "row 0: [0, 1]\nrow 1: [2, 3]\ncolumn 0: [0, 2]\ncolumn 1: [1, 3]\n\
             main diagonal: [0, 3]\nanti-diagonal: [1, 2]\n"
        );
    }

    #[test]
    fn test_format_names() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::Text.to_string(), "text");
    }
}
