use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use event_dispatch::{Event, EventDispatcher, EventHandler, HandlerError};

struct Counting(AtomicU64);

impl EventHandler for Counting {
    fn name(&self) -> &'static str {
        "Counting"
    }

    fn handle(&self, _event: &Event) -> Result<(), HandlerError> {
        self.0.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

fn bench_notify_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatcher/notify");

    for handler_count in [1usize, 8, 64] {
        let mut dispatcher = EventDispatcher::new();
        for _ in 0..handler_count {
            dispatcher
                .register("CustomerCreatedEvent", Arc::new(Counting(AtomicU64::new(0))))
                .unwrap();
        }
        let event = Event::new("CustomerCreatedEvent", serde_json::json!({ "id": "1" }));

        group.bench_with_input(
            BenchmarkId::from_parameter(handler_count),
            &handler_count,
            |b, _| {
                b.iter(|| dispatcher.notify(black_box(&event)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_notify_unregistered(c: &mut Criterion) {
    let dispatcher = EventDispatcher::new();
    let event = Event::new("Unknown", serde_json::json!({}));

    c.bench_function("dispatcher/notify_unregistered", |b| {
        b.iter(|| dispatcher.notify(black_box(&event)).unwrap());
    });
}

fn bench_register_unregister(c: &mut Criterion) {
    c.bench_function("dispatcher/register_unregister", |b| {
        b.iter(|| {
            let mut dispatcher = EventDispatcher::new();
            let handler = Arc::new(Counting(AtomicU64::new(0)));
            dispatcher
                .register("CustomerCreatedEvent", handler.clone())
                .unwrap();
            dispatcher
                .unregister("CustomerCreatedEvent", &handler)
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_notify_fan_out,
    bench_notify_unregistered,
    bench_register_unregister
);
criterion_main!(benches);
