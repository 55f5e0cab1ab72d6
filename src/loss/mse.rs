use crate::error::{ensure_len, MlpError, Result};

pub struct MseLoss;

impl MseLoss {
    /// Summed squared error of one example: Σ (expected - obtained)².
    pub fn loss(obtained: &[f64], expected: &[f64]) -> Result<f64> {
        ensure_len(expected.len(), obtained.len())?;
        Ok(obtained.iter().zip(expected.iter())
            .map(|(o, e)| (e - o).powi(2))
            .sum())
    }

    /// Epoch MSE: the per-example summed squared errors averaged over the
    /// number of examples.
    pub fn epoch<'a, I>(pairs: I) -> Result<f64>
    where
        I: IntoIterator<Item = (&'a [f64], &'a [f64])>,
    {
        let mut total = 0.0;
        let mut n = 0usize;
        for (expected, obtained) in pairs {
            total += MseLoss::loss(obtained, expected)?;
            n += 1;
        }
        if n == 0 {
            return Err(MlpError::EmptyDataset);
        }
        Ok(total / n as f64)
    }
}
