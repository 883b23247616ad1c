use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use merkle_distributor_tree::{LeafRecord, MerkleTree, verify_proof};

/// Deterministic record for leaf `i` (for benchmarking).
fn record(i: u32) -> LeafRecord {
    let mut identity = [0u8; 32];
    identity[..4].copy_from_slice(&i.to_be_bytes());
    LeafRecord::new(identity, u64::from(i) * 1_000, u64::from(i))
}

fn prepare_records(count: u32) -> Vec<LeafRecord> {
    (0..count).map(record).collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree build");
        for size in [1_000u32, 10_000, 100_000] {
            let records = prepare_records(size);
            group.bench_with_input(BenchmarkId::new("leaves", size), &records, |b, records| {
                b.iter(|| MerkleTree::from_records(black_box(records)).expect("build"));
            });
        }
    }

    c.bench_function("generate proof", |b| {
        let records = prepare_records(100_000);
        let tree = MerkleTree::from_records(&records).expect("build");
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 7_919) % records.len();
            tree.generate_proof(black_box(index)).expect("proof")
        });
    });

    c.bench_function("verify proof", |b| {
        let records = prepare_records(100_000);
        let tree = MerkleTree::from_records(&records).expect("build");
        let root = tree.root();
        let proofs: Vec<_> = (0..1_000usize)
            .map(|i| {
                let index = (i * 97) % records.len();
                (index, tree.generate_proof(index).expect("proof"))
            })
            .collect();
        let mut next = 0usize;
        b.iter(|| {
            let (index, proof) = &proofs[next % proofs.len()];
            next += 1;
            assert!(verify_proof(&records[*index], *index, proof, &root));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
