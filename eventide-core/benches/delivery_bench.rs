// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use eventide_core::{Collection, NoCompleteHandler, NoCompleteMap, NoErrorHandler, NoErrorMap};
use std::hint::black_box;

pub fn bench_delivery(c: &mut Criterion) {
    let mut group = c.benchmark_group("delivery");

    // Subscriber counts to test fan-out
    let subscriber_counts = [1usize, 8, 64, 256];

    for &subs in &subscriber_counts {
        group.throughput(Throughput::Elements(subs as u64));
        let id = BenchmarkId::from_parameter(format!("fan_out_subs_{subs}"));
        group.bench_with_input(id, &subs, |bencher, &subs| {
            let collection = Collection::<u64>::new();
            for _ in 0..subs {
                collection.for_each(
                    |value| {
                        black_box(value);
                    },
                    None::<NoErrorHandler>,
                    None::<NoCompleteHandler<u64>>,
                );
            }
            bencher.iter(|| collection.accept_event_success(black_box(42)));
        });
    }

    // Large payloads are cloned once per extra subscriber
    let payload_sizes = [256usize, 4096];
    for &size in &payload_sizes {
        group.throughput(Throughput::Bytes((size * 8) as u64));
        let id = BenchmarkId::from_parameter(format!("large_p{size}_subs_8"));
        group.bench_with_input(id, &size, |bencher, &size| {
            let collection = Collection::<Vec<u8>>::new();
            for _ in 0..8 {
                collection.for_each(
                    |value: Vec<u8>| {
                        black_box(value.len());
                    },
                    None::<NoErrorHandler>,
                    None::<NoCompleteHandler<Vec<u8>>>,
                );
            }
            let payload = vec![0u8; size];
            bencher.iter(|| collection.accept_event_success(payload.clone()));
        });
    }

    // Operator chain depth
    for depth in [1usize, 4, 16] {
        let id = BenchmarkId::from_parameter(format!("map_chain_{depth}"));
        group.bench_with_input(id, &depth, |bencher, &depth| {
            let source = Collection::<u64>::new();
            let mut tail = source.clone();
            for _ in 0..depth {
                tail = tail.map(|x| x + 1, None::<NoErrorMap>, None::<NoCompleteMap<u64, u64>>);
            }
            tail.for_each(
                |value| {
                    black_box(value);
                },
                None::<NoErrorHandler>,
                None::<NoCompleteHandler<u64>>,
            );
            bencher.iter(|| source.accept_event_success(black_box(1)));
        });
    }

    group.finish();
}
