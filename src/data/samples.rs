use std::path::Path;

use crate::data::example::LabelledSample;
use crate::error::{MlpError, Result};

/// Reads a JSON array of `{ "label": ..., "inputs": [...] }` objects.
///
/// Every sample must carry exactly `input_width` inputs.
pub fn read_samples(path: impl AsRef<Path>, input_width: usize) -> Result<Vec<LabelledSample>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let samples: Vec<LabelledSample> = serde_json::from_reader(reader)?;
    check_widths(&samples, input_width)?;
    Ok(samples)
}

pub fn parse_samples(json: &str, input_width: usize) -> Result<Vec<LabelledSample>> {
    let samples: Vec<LabelledSample> = serde_json::from_str(json)?;
    check_widths(&samples, input_width)?;
    Ok(samples)
}

fn check_widths(samples: &[LabelledSample], input_width: usize) -> Result<()> {
    match samples.iter().position(|s| s.inputs.len() != input_width) {
        Some(idx) => Err(MlpError::Data(format!(
            "sample {idx} ('{}') has {} inputs, expected {input_width}",
            samples[idx].label,
            samples[idx].inputs.len()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labelled_grids() {
        let samples = parse_samples(r#"[{"label": "A", "inputs": [0, 1, 1]}]"#, 3).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].label, "A");
        assert_eq!(samples[0].inputs, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let err = parse_samples(r#"[{"label": "B", "inputs": [0, 1]}]"#, 3).unwrap_err();
        assert!(err.to_string().contains("'B'"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_samples("[{", 3), Err(MlpError::Json(_))));
    }
}
