// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::delivery_bench::bench_delivery;
use crate::flatten_bench::bench_flatten;
use criterion::{criterion_group, criterion_main};

mod delivery_bench;

criterion_group!(benches, bench_delivery, bench_flatten);
criterion_main!(benches);
