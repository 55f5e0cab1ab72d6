use mlp_engine::data::builtin_xor;
use mlp_engine::{NetworkSpec, TrainConfig, Trainer};

fn main() -> mlp_engine::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let examples = builtin_xor();
    let mut trainer = Trainer::seeded(&NetworkSpec::new(vec![2, 2, 1], 0.1), 42)?;

    let (tx, rx) = std::sync::mpsc::channel();
    trainer.train_with(&examples, &TrainConfig::new(10000).with_progress(tx))?;

    for stats in rx.try_iter().filter(|s| s.epoch % 1000 == 0) {
        println!("Epoch {}: mse = {:.6}", stats.epoch, stats.mse);
    }

    for example in &examples {
        let output = trainer.predict(&example.inputs)?;
        println!("Input: {:?} -> Output: {:.4}", example.inputs, output[0]);
    }
    Ok(())
}
