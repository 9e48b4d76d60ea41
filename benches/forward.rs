use criterion::{black_box, criterion_group, criterion_main, Criterion};
use momentum_nn::{optim::sgd::Sgd, train::train_epoch, ActivationFunction, Dataset, Network};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_network(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut network = Network::new(&[16, 32, 8], true, ActivationFunction::Sigmoid, &mut rng).unwrap();

    let mut dataset = Dataset::new(16, 8).unwrap();
    for _ in 0..64 {
        dataset.insert((0..24).map(|_| rng.gen::<f64>()).collect()).unwrap();
    }
    let input = dataset.input_part(0).to_vec();
    let sgd = Sgd::new(0.1, 0.9).unwrap();

    c.bench_function("predict 16-32-8", |b| {
        b.iter(|| network.predict(black_box(&input)).unwrap())
    });

    c.bench_function("train_epoch 64 rows", |b| {
        b.iter(|| train_epoch(&mut network, black_box(&dataset), &sgd).unwrap())
    });
}

criterion_group!(benches, bench_network);
criterion_main!(benches);
