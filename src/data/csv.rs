//! CSV example reader.
//!
//! Supported format:
//! - UTF-8, comma-separated, an optional leading byte-order mark is ignored
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//!
//! Each row holds the input cells followed by the expected-output cells. The
//! first `input_width` cells are inputs, the last `output_width` are targets;
//! anything between them is ignored.

use std::path::Path;

use crate::data::example::Example;
use crate::error::{MlpError, Result};

/// Reads examples from a CSV file on disk.
pub fn read_examples(path: impl AsRef<Path>, input_width: usize, output_width: usize) -> Result<Vec<Example>> {
    let data = std::fs::read(path)?;
    parse_examples(&data, input_width, output_width)
}

/// Parses CSV bytes into examples.
pub fn parse_examples(data: &[u8], input_width: usize, output_width: usize) -> Result<Vec<Example>> {
    let text = std::str::from_utf8(data)
        .map_err(|_| MlpError::Data("CSV file is not valid UTF-8".into()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let needed = input_width + output_width;
    let mut examples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        // Auto-detect header: skip first line if any cell is non-numeric.
        if line.is_empty() || (idx == 0 && is_header(line)) {
            continue;
        }

        let cells = parse_csv_row(line);
        if cells.len() < needed {
            return Err(MlpError::Data(format!(
                "line {}: expected at least {} columns, got {}",
                line_no,
                needed,
                cells.len()
            )));
        }

        let inputs   = parse_floats(&cells[..input_width], line_no)?;
        let expected = parse_floats(&cells[cells.len() - output_width..], line_no)?;
        examples.push(Example::new(inputs, expected));
    }

    if examples.is_empty() {
        return Err(MlpError::Data("CSV contains no data rows after parsing".into()));
    }

    Ok(examples)
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line);
    cells.iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], line_no: usize) -> Result<Vec<f64>> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| {
                MlpError::Data(format!("line {line_no}: '{c}' is not a valid number"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_inputs_and_targets() {
        let csv = b"1,0,1,-1,1\n0,0,0,1,-1\n";
        let examples = parse_examples(csv, 3, 2).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], Example::new(vec![1.0, 0.0, 1.0], vec![-1.0, 1.0]));
        assert_eq!(examples[1].expected, vec![1.0, -1.0]);
    }

    #[test]
    fn strips_bom_and_header() {
        let csv = "\u{feff}a,b,target\n1,1,-1\n".as_bytes();
        let examples = parse_examples(csv, 2, 1).unwrap();
        assert_eq!(examples, vec![Example::new(vec![1.0, 1.0], vec![-1.0])]);
    }

    #[test]
    fn skips_blank_lines() {
        let examples = parse_examples(b"1,2\n\n3,4\n", 1, 1).unwrap();
        assert_eq!(examples.len(), 2);
    }

    #[test]
    fn quoted_cells_are_unwrapped() {
        assert_eq!(parse_csv_row(r#""1",2,"a,""b""""#), vec!["1", "2", r#"a,"b""#]);
    }

    #[test]
    fn short_row_names_the_file_line() {
        let err = parse_examples(b"1,2,3\n1,2\n", 2, 1).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn line_numbers_count_header_and_blank_lines() {
        let err = parse_examples(b"x,y,target\n1,2,3\n\n1,q,3\n", 2, 1).unwrap_err();
        assert!(err.to_string().contains("line 4"), "{err}");
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let err = parse_examples(b"1,2,3\n1,x,3\n", 2, 1).unwrap_err();
        assert!(matches!(err, MlpError::Data(_)));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(parse_examples(b"", 1, 1).is_err());
    }
}
