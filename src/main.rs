use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mlp_engine::data::{csv, glyph, samples};
use mlp_engine::{NetworkSpec, Trainer, TrainingReport};

#[derive(Parser, Debug)]
#[command(name = "mlp-engine", about = "Train a small multilayer perceptron on labelled pixel grids")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train a network on a CSV example file and write a JSON report
    Train(TrainArgs),
    /// Print every example of a CSV file as ASCII art
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// Network spec JSON; overrides --layers, --learning-rate and --stop-factor
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layer widths, input first
    #[arg(long, value_delimiter = ',', default_value = "63,21,7", allow_negative_numbers = true)]
    layers: Vec<i64>,

    #[arg(long, default_value_t = 0.1)]
    learning_rate: f64,

    /// Stop once an epoch improves the MSE by less than this
    #[arg(long)]
    stop_factor: Option<f64>,

    #[arg(long, default_value_t = 1000)]
    epochs: usize,

    /// Seed for weight initialisation; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// CSV file of training examples
    #[arg(long)]
    train: PathBuf,

    /// JSON files of labelled samples to evaluate after training
    #[arg(long)]
    eval: Vec<PathBuf>,

    /// Names of the output units, in order
    #[arg(long, value_delimiter = ',', default_value = "A,B,C,D,E,J,K")]
    labels: Vec<String>,

    /// Directory receiving the report files
    #[arg(long, default_value = "results")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ShowArgs {
    file: PathBuf,

    #[arg(long, default_value_t = 63)]
    inputs: usize,

    #[arg(long, default_value_t = 7)]
    outputs: usize,

    #[arg(long, default_value_t = glyph::GRID_WIDTH)]
    width: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Train(args) => train(args),
        Command::Show(args) => show(args),
    }
}

fn train(args: TrainArgs) -> Result<()> {
    let spec = match &args.config {
        Some(path) => NetworkSpec::load_json(path)
            .with_context(|| format!("loading network spec {}", path.display()))?,
        None => {
            let mut spec = NetworkSpec::from_widths(&args.layers, args.learning_rate)?;
            spec.stop_factor = args.stop_factor;
            spec.validate()?;
            spec
        }
    };

    let examples = csv::read_examples(&args.train, spec.input_size(), spec.output_size())
        .with_context(|| format!("reading training examples from {}", args.train.display()))?;

    let mut trainer = match args.seed {
        Some(seed) => Trainer::seeded(&spec, seed)?,
        None => Trainer::from_spec(&spec, &mut ChaCha8Rng::from_entropy())?,
    };
    let run = trainer.train(&examples, args.epochs)?;
    if run < args.epochs {
        info!(run, requested = args.epochs, "stopped early");
    }

    let mut eval_sets = Vec::with_capacity(args.eval.len());
    for path in &args.eval {
        let name = path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let set = samples::read_samples(path, spec.input_size())
            .with_context(|| format!("reading evaluation samples from {}", path.display()))?;
        eval_sets.push((name, set));
    }

    if args.labels.len() != spec.output_size() {
        warn!(
            labels = args.labels.len(),
            outputs = spec.output_size(),
            "label count differs from output width"
        );
    }
    let labels: Vec<&str> = args.labels.iter().map(String::as_str).collect();
    let report = TrainingReport::build(&mut trainer, &eval_sets, &labels)?;
    for (name, _) in &eval_sets {
        if let Some(acc) = report.accuracy(name) {
            println!("{name}: {:.1}% recognised", acc * 100.0);
        }
    }
    report.save(&args.out)
        .with_context(|| format!("writing report to {}", args.out.display()))?;
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let examples = csv::read_examples(&args.file, args.inputs, args.outputs)
        .with_context(|| format!("reading {}", args.file.display()))?;
    for (idx, example) in examples.iter().enumerate() {
        let label = glyph::recognize(&example.expected, &glyph::LETTERS).unwrap_or("?");
        println!("#{idx} ({label})");
        println!("{}", glyph::render(&example.inputs, args.width));
        println!();
    }
    Ok(())
}
