//! Benchmark-only crate; see `benches/stencil_bench.rs`.
