use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use forbidden_subgraphs::Vf2Oracle;
use forbidden_subgraphs::family::{m2_parent, m11b_parent};
use forbidden_subgraphs::generate::edge_deletions;
use forbidden_subgraphs::progress::ProgressOptions;
use forbidden_subgraphs::reduce::{remove_isomorphisms, remove_supergraphs};

fn reduce_bench(c: &mut Criterion) {
  let two_k3 = edge_deletions(&m2_parent().build().unwrap());
  let m11b = edge_deletions(&m11b_parent().build().unwrap());

  c.bench_function("dedup_2k3", |b| {
    b.iter_batched(
      || two_k3.clone(),
      |mut graphs| black_box(remove_isomorphisms(&mut graphs, &Vf2Oracle, ProgressOptions::silent())),
      BatchSize::SmallInput,
    );
  });

  c.bench_function("dedup_m11b", |b| {
    b.iter_batched(
      || m11b.clone(),
      |mut graphs| black_box(remove_isomorphisms(&mut graphs, &Vf2Oracle, ProgressOptions::silent())),
      BatchSize::SmallInput,
    );
  });

  let mut m11b_classes = m11b.clone();
  remove_isomorphisms(&mut m11b_classes, &Vf2Oracle, ProgressOptions::silent());
  c.bench_function("supergraphs_m11b", |b| {
    b.iter_batched(
      || m11b_classes.clone(),
      |mut graphs| black_box(remove_supergraphs(&mut graphs, &Vf2Oracle, ProgressOptions::silent())),
      BatchSize::SmallInput,
    );
  });
}

criterion_group!(benches, reduce_bench);
criterion_main!(benches);
