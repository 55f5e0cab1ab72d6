use mlp_engine::data::{csv, glyph, samples};
use mlp_engine::{NetworkSpec, Trainer, TrainerState, TrainingReport};

// 3x3 glyphs followed by a one-hot target over three symbols.
const GLYPHS: &str = "\u{feff}1,1,1,1,0,1,1,1,1,1,-1,-1
0,1,0,0,1,0,0,1,0,-1,1,-1
1,0,1,0,1,0,1,0,1,-1,-1,1
";

const NOISY: &str = r#"[
    { "label": "O", "inputs": [1, 1, 1, 1, 0, 1, 1, 1, 0] },
    { "label": "I", "inputs": [0, 1, 0, 0, 1, 0, 0, 1, 0] },
    { "label": "X", "inputs": [1, 0, 1, 0, 1, 0, 1, 0, 1] }
]"#;

const LABELS: [&str; 3] = ["O", "I", "X"];

#[test]
fn learns_small_glyph_set_end_to_end() {
    let spec = NetworkSpec::new(vec![9, 6, 3], 0.1);
    let examples = csv::parse_examples(GLYPHS.as_bytes(), spec.input_size(), spec.output_size()).unwrap();
    assert_eq!(examples.len(), 3);
    assert_eq!(glyph::render(&examples[1].inputs, 3), " # \n # \n # ");

    let mut trainer = Trainer::seeded(&spec, 3).unwrap();
    assert_eq!(trainer.state(), TrainerState::Untrained);
    trainer.train(&examples, 2000).unwrap();
    assert_eq!(trainer.state(), TrainerState::Trained);
    assert!(trainer.errors()[1999] < trainer.errors()[0]);

    for (example, label) in examples.iter().zip(LABELS) {
        let out = trainer.predict(&example.inputs).unwrap();
        assert_eq!(glyph::recognize(&out, &LABELS), Some(label));
    }

    let noisy = samples::parse_samples(NOISY, spec.input_size()).unwrap();
    let report = TrainingReport::build(&mut trainer, &[("noisy".into(), noisy)], &LABELS).unwrap();
    assert_eq!(report.architecture.layers, vec![9, 6, 3]);
    assert_eq!(report.errors.len(), 2000);
    assert_eq!(report.outputs["noisy"].len(), 3);
    assert_eq!(report.outputs["noisy"][1].recognized.as_deref(), Some("I"));
}
