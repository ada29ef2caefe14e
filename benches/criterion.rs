use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hello_rest::core::greeting::greeting_service::{greet, GreetingService};

fn greet_benchmark(c: &mut Criterion) {
    c.bench_function("greet", |b| b.iter(|| greet(black_box("World"))));
}

fn greeting_benchmark(c: &mut Criterion) {
    let service = GreetingService::new();
    c.bench_function("greeting", |b| {
        b.iter(|| service.greeting(black_box(Some("World"))))
    });
}

criterion_group!(benches, greet_benchmark, greeting_benchmark);
criterion_main!(benches);
