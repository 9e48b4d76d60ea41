use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use momentum_nn::codec::{dataset_codec, network_codec};
use momentum_nn::{train, ActivationFunction, Dataset, NetworkSpec, TrainConfig};

/// Trains a network and prints its predictions for every training row.
///
/// Without `--config` the classic XOR network is trained.
#[derive(Parser, Debug)]
#[command(name = "momentum-nn", version)]
struct Args {
    /// JSON file with `network`, `train` and `dataset` entries.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the trained network record to this file.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Seed for the initial weights.
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

#[derive(Deserialize)]
struct RunFile {
    network: NetworkSpec,
    train: TrainConfig,
    /// Dataset in the line-oriented format, relative to the config file.
    dataset: PathBuf,
}

fn xor() -> momentum_nn::Result<(NetworkSpec, TrainConfig, Dataset)> {
    let dataset = Dataset::from_pairs(
        &[vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
        &[vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
    )?;
    let spec = NetworkSpec::new(vec![2, 2, 1], true, ActivationFunction::Sigmoid);
    Ok((spec, TrainConfig::fixed_epochs(1.0, 0.93, 1000), dataset))
}

fn load_run(path: &Path) -> momentum_nn::Result<(NetworkSpec, TrainConfig, Dataset)> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| momentum_nn::Error::Codec { message: format!("opening {}", path.display()), source: Some(e) })?;
    let run: RunFile = serde_json::from_str(&text)
        .map_err(|e| momentum_nn::Error::Configuration(format!("{}: {e}", path.display())))?;
    let base = path.parent().map(PathBuf::from).unwrap_or_default();
    let dataset = dataset_codec::load(base.join(&run.dataset))?;
    Ok((run.network, run.train, dataset))
}

fn run(args: Args) -> momentum_nn::Result<()> {
    let (spec, config, dataset) = match &args.config {
        Some(path) => load_run(path)?,
        None => xor()?,
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut network = spec.build(&mut rng)?;
    let report = train(&mut network, &dataset, &config)?;
    println!("{} epoch(s), {} example(s), stop: {:?}", report.epochs, report.examples, report.stop);

    for (input, target) in dataset.examples() {
        let output = network.predict(input)?;
        println!("{input:?} -> {output:.4?} (target {target:?})");
    }

    if let Some(path) = &args.save {
        network_codec::save(&network, path)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        eprintln!("momentum-nn: {e}");
        std::process::exit(1);
    }
}
