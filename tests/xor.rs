use mlp_engine::data::builtin_xor;
use mlp_engine::{NetworkSpec, Trainer};

const EPOCHS: usize = 10_000;
const WINDOW: usize = 500;

fn window_means(errors: &[f64]) -> Vec<f64> {
    errors.chunks(WINDOW)
        .map(|w| w.iter().sum::<f64>() / w.len() as f64)
        .collect()
}

/// Small XOR nets can land in a poor local minimum from some starting
/// points, so several seeds are tried and the first that converges is checked.
#[test]
fn xor_converges_with_decreasing_error() {
    let spec = NetworkSpec::new(vec![2, 2, 1], 0.1);
    let examples = builtin_xor();

    let converged = (0..10u64)
        .map(|seed| {
            let mut trainer = Trainer::seeded(&spec, seed).unwrap();
            trainer.train(&examples, EPOCHS).unwrap();
            trainer
        })
        .find(|t| t.errors().last().copied().unwrap_or(f64::INFINITY) < 0.1);

    let mut trainer = converged.expect("no seed converged on XOR");
    assert_eq!(trainer.errors().len(), EPOCHS);

    let means = window_means(trainer.errors());
    for pair in means.windows(2) {
        assert!(
            pair[1] <= pair[0] * 1.05 + 1e-3,
            "windowed mse rose from {} to {}",
            pair[0],
            pair[1]
        );
    }
    assert!(means[means.len() - 1] < means[0]);

    for example in &examples {
        let out = trainer.predict(&example.inputs).unwrap();
        assert_eq!(out[0].signum(), example.expected[0].signum(), "{:?}", example.inputs);
    }
}
