use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_containers::{heap_sort, AvlTreeMap, AvlTreeSet, Heap, HeapKind, PriorityQueue};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("map_insert", |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for value in &values {
                let _ = map.insert(*value, *value);
            }
            map
        })
    });

    let mut map = AvlTreeMap::new();
    for value in &values {
        let _ = map.insert(*value, *value);
    }

    c.bench_function("map_get", |b| {
        b.iter(|| {
            for value in &values {
                black_box(map.get(value));
            }
        })
    });

    c.bench_function("map_iter", |b| {
        b.iter(|| {
            for (k, v) in &map {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_remove", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                for value in &values {
                    map.remove(value);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        )
    });

    let lhs: AvlTreeSet<i32> = values.iter().step_by(2).copied().collect();
    let rhs: AvlTreeSet<i32> = values.iter().step_by(3).copied().collect();

    c.bench_function("set_intersection", |b| {
        b.iter(|| black_box(lhs.intersection(&rhs)))
    });

    c.bench_function("set_union", |b| b.iter(|| black_box(lhs.union(&rhs))));

    c.bench_function("heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = Heap::with_capacity(HeapKind::Min, values.len());
            heap.extend(values.iter().copied());
            while let Ok(value) = heap.pop() {
                black_box(value);
            }
        })
    });

    c.bench_function("priority_queue_push_pop", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for value in &values {
                queue.push(*value, *value % 16);
            }
            while let Ok(value) = queue.pop() {
                black_box(value);
            }
        })
    });

    c.bench_function("heap_sort", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| {
                heap_sort(&mut data);
                data
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
