use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gesture_knn::KnnClassifier;
use gesture_knn::landmarks::HAND_FEATURE_DIMENSIONS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LABELS: [&str; 5] = ["fist", "palm", "peace", "point", "thumbs_up"];

fn random_pose(rng: &mut StdRng) -> Vec<f64> {
    (0..HAND_FEATURE_DIMENSIONS).map(|_| rng.gen_range(0.0..1.0)).collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[100usize, 1_000, 5_000] {
        let mut machine = KnnClassifier::new(3).unwrap();
        for i in 0..n {
            machine
                .learn(random_pose(&mut rng), LABELS[i % LABELS.len()].to_string())
                .unwrap();
        }
        let query = random_pose(&mut rng);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| machine.classify(black_box(query)).unwrap())
        });
    }

    group.finish();
}

fn bench_learn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let poses: Vec<Vec<f64>> = (0..1_000).map(|_| random_pose(&mut rng)).collect();

    c.bench_function("learn_1000_poses", |b| {
        b.iter(|| {
            let mut machine = KnnClassifier::new(3).unwrap();
            for pose in &poses {
                machine.learn(pose.clone(), "palm".to_string()).unwrap();
            }
            black_box(machine.len())
        })
    });
}

criterion_group!(benches, bench_classify, bench_learn);
criterion_main!(benches);
