use momentum_nn::codec::network_codec;
use momentum_nn::{train, ActivationFunction, Dataset, Network, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> momentum_nn::Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::new(&[2, 2, 1], true, ActivationFunction::Sigmoid, &mut rng)?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];
    let dataset = Dataset::from_pairs(&inputs, &expected_outputs)?;

    let report = train(&mut network, &dataset, &TrainConfig::fixed_epochs(1.0, 0.93, 1000))?;
    println!("Trained for {} epochs, last mse per output: {:?}", report.epochs, report.errors);

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }

    println!("{}", network_codec::to_record(&network));
    Ok(())
}
