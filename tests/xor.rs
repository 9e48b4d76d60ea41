use momentum_nn::{train, ActivationFunction, Dataset, Matrix, Network, StopReason, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn xor_dataset() -> Dataset {
    let mut dataset = Dataset::new(2, 1).unwrap();
    for row in [[0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]] {
        dataset.insert(row.to_vec()).unwrap();
    }
    dataset
}

fn separates_xor(network: &mut Network, dataset: &Dataset) -> bool {
    dataset.examples().all(|(input, target)| {
        let output = network.predict(input).unwrap();
        (output[0] - target[0]).abs() < 0.1
    })
}

#[test]
fn xor_is_learned_in_1000_epochs() {
    let weights = vec![
        Matrix::from_data(vec![
            vec![0.62, 0.15, 0.48],
            vec![0.31, 0.87, 0.22],
            vec![0.05, 0.71, 0.39],
        ]),
        Matrix::from_data(vec![vec![0.93], vec![0.27], vec![0.56]]),
    ];
    let mut network = Network::from_weights(&[2, 2, 1], true, ActivationFunction::Sigmoid, weights).unwrap();
    let dataset = xor_dataset();

    let report = train(&mut network, &dataset, &TrainConfig::fixed_epochs(1.0, 0.93, 1000)).unwrap();

    assert_eq!(report.stop, StopReason::EpochsCompleted);
    assert_eq!(report.examples, 4000);
    assert!(separates_xor(&mut network, &dataset));
}

#[test]
fn xor_is_learned_from_most_random_starts() {
    let dataset = xor_dataset();
    let config = TrainConfig::fixed_epochs(1.0, 0.93, 1000);

    // A 2-2-1 net occasionally settles in a local minimum; most starts do not.
    let learned = (0..20u64)
        .filter(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut network = Network::new(&[2, 2, 1], true, ActivationFunction::Sigmoid, &mut rng).unwrap();
            train(&mut network, &dataset, &config).unwrap();
            separates_xor(&mut network, &dataset)
        })
        .count();

    assert!(learned >= 10, "only {learned}/20 starts learned XOR");
}
