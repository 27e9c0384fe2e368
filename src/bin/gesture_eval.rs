//! Offline accuracy check for a labeled pose dataset.
//!
//! Shuffles the dataset, trains a classifier on the first part and reports
//! how many of the remaining poses it recognizes.
//!
//! ```bash
//! cargo run --bin gesture-eval -- --dataset handsign_data.json --k 2 --seed 42
//! RUST_LOG=debug cargo run --bin gesture-eval -- --dataset handsign_data.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gesture_knn::{Config, Dataset, evaluate};

#[derive(Debug, Parser)]
#[command(name = "gesture-eval", about = "Measure k-NN accuracy on a labeled pose dataset")]
struct Args {
    /// JSON dataset of `{ "pose": [...], "label": "..." }` records.
    #[arg(long)]
    dataset: PathBuf,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `classifier.k`.
    #[arg(long)]
    k: Option<usize>,

    /// Overrides `evaluation.train_fraction`.
    #[arg(long)]
    train_fraction: Option<f64>,

    /// Overrides `evaluation.seed`.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(k) = args.k {
        config.classifier.k = k;
    }
    if let Some(fraction) = args.train_fraction {
        config.evaluation.train_fraction = fraction;
    }
    if args.seed.is_some() {
        config.evaluation.seed = args.seed;
    }

    let mut dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("failed to load dataset {}", args.dataset.display()))?;
    if dataset.is_empty() {
        bail!("dataset {} contains no records", args.dataset.display());
    }

    let mut rng = match config.evaluation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    dataset.shuffle(&mut rng);

    let (train, test) = dataset.split(config.evaluation.train_fraction)?;
    if train.is_empty() {
        bail!("training split is empty; raise --train-fraction");
    }

    let mut classifier = config.classifier.build::<f64, String>()?;
    train.train(&mut classifier)?;
    info!(
        k = classifier.k(),
        examples = classifier.len(),
        labels = classifier.labels().len(),
        "trained classifier"
    );

    let report = evaluate(&classifier, &test)?;
    match report.accuracy_percent() {
        Some(percent) => info!(
            correct = report.correct,
            total = report.total,
            "Accuracy: {:.2}%",
            percent
        ),
        None => info!("no test records; accuracy undefined"),
    }
    Ok(())
}
