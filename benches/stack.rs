use bounded_playlist::BoundedStack;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_stack(c: &mut Criterion) {
    let n = 64;
    {
        let mut group = c.benchmark_group("Vec vs BoundedStack (Push/Pop 64)");
        group.bench_function("std::vec::Vec", |b| {
            b.iter(|| {
                let mut v = Vec::with_capacity(n);
                for i in 0..n {
                    v.push(black_box(i));
                }
                while let Some(x) = v.pop() {
                    black_box(x);
                }
            })
        });

        group.bench_function("BoundedStack<usize>", |b| {
            b.iter(|| {
                let mut s = BoundedStack::with_capacity(n);
                for i in 0..n {
                    let _ = s.push(black_box(i));
                }
                while let Ok(x) = s.pop() {
                    black_box(x);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BoundedStack Clone (64 Strings)");
        let mut s = BoundedStack::with_capacity(n);
        for i in 0..n {
            let _ = s.push(format!("item-{i}"));
        }

        group.bench_function("clone", |b| b.iter(|| black_box(s.clone())));
        group.bench_function("try_clone_with", |b| {
            b.iter(|| black_box(s.try_clone_with(|v| Ok::<_, ()>(v.clone()))))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_stack);
criterion_main!(benches);
