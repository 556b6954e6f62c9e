//! Ariadne-based diagnostic rendering for inference failures.
//!
//! Renders [`TypeError`] observations into formatted, labeled error
//! messages. Output is colorless so it is stable in tests and logs. Each
//! diagnostic carries a stable per-variant error code.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::TypeError;

/// Assign a unique error code to each TypeError variant.
fn error_code(err: &TypeError) -> &'static str {
    match err {
        TypeError::UnboundName { .. } => "E0001",
        TypeError::UnsupportedOperands { .. } => "E0002",
        TypeError::NotCallable { .. } => "E0003",
    }
}

/// Render a type error into a formatted diagnostic string.
///
/// `source` is the text the upstream parser consumed and `filename` the
/// identifier reports attribute it to; spans on the error are clamped to
/// the source so a stale or synthetic span cannot panic the renderer.
pub fn render_diagnostic(error: &TypeError, source: &str, filename: &str) -> String {
    let config = Config::default().with_color(false);
    let source_len = source.len();

    // Clamp a range to be valid within source bounds. Ariadne needs at
    // least a one-character span.
    let clamp = |r: Range<usize>| -> Range<usize> {
        let s = r.start.min(source_len);
        let e = r.end.min(source_len).max(s);
        if s == e {
            s..e.saturating_add(1).min(source_len)
        } else {
            s..e
        }
    };

    let code = error_code(error);
    let range = clamp(error.span().range());
    let span = (filename, range);

    let report = match error {
        TypeError::UnboundName { name, .. } => {
            Report::build(ReportKind::Error, span.clone())
                .with_code(code)
                .with_message(format!("name `{name}` is not defined"))
                .with_config(config)
                .with_label(
                    Label::new(span)
                        .with_message("not found in any enclosing scope")
                        .with_color(Color::Red),
                )
                .finish()
        }

        TypeError::UnsupportedOperands { op, lhs, rhs, .. } => {
            Report::build(ReportKind::Error, span.clone())
                .with_code(code)
                .with_message(format!("unsupported operands for `{op}`"))
                .with_config(config)
                .with_label(
                    Label::new(span)
                        .with_message(format!("no rule for {lhs} {op} {rhs}"))
                        .with_color(Color::Red),
                )
                .finish()
        }

        TypeError::NotCallable { ty, .. } => {
            Report::build(ReportKind::Error, span.clone())
                .with_code(code)
                .with_message(format!("type {ty} is not callable"))
                .with_config(config)
                .with_label(
                    Label::new(span)
                        .with_message("called here")
                        .with_color(Color::Red),
                )
                .finish()
        }
    };

    let mut buf = Vec::new();
    let cache = (filename, Source::from(source));
    report.write(cache, &mut buf).expect("failed to write diagnostic");
    String::from_utf8(buf).expect("diagnostic output should be valid UTF-8")
}
