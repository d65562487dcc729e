// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::ffi::CString;
use std::hint::black_box;

use byteshift::memmem::{find_iter, find_with};
use byteshift::strstr::find_in_cstring;

/// Package version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print benchmark header with version and timestamp
fn print_benchmark_header() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let now = chrono::Utc::now();
        eprintln!("\n╔════════════════════════════════════════════════════════════╗");
        eprintln!(
            "║ byteshift benchmark v{}                                  ║",
            VERSION
        );
        eprintln!(
            "║ Run date: {}                              ║",
            now.format("%Y-%m-%d %H:%M:%S UTC")
        );
        eprintln!("║ Platform: {:<49} ║", std::env::consts::ARCH);
        eprintln!("╚════════════════════════════════════════════════════════════╝\n");
    });
}

// ============================================================================
// Naive Search (for comparison)
// ============================================================================

/// Byte-by-byte search: every start position compared in full.
pub fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ============================================================================
// Inputs
// ============================================================================

/// Pseudo-random text over a 16-letter alphabet so the first needle byte
/// recurs often and the first-byte skip alone cannot carry the search.
fn generate_haystack(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b"abcdefghijklmnop"[(state % 16) as usize]
        })
        .collect()
}

/// Needle taken from the last bytes of the haystack, so every search scans
/// (almost) all of it.
fn tail_needle(haystack: &[u8], len: usize) -> Vec<u8> {
    haystack[haystack.len() - len..].to_vec()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_memmem(c: &mut Criterion) {
    print_benchmark_header();
    let mut group = c.benchmark_group("memmem");

    let haystack = generate_haystack(64 * 1024);
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    // Needle lengths around both word widths, where the size class changes:
    // - 3/4/5/6: short, exact, one-over and long for 4-byte words
    // - 7/8/9/10: the same boundaries for 8-byte words
    // - 16/32/64: long needles, confirmation cost grows with length
    for len in [2, 3, 4, 5, 6, 7, 8, 9, 10, 16, 32, 64] {
        let needle = tail_needle(&haystack, len);

        group.bench_with_input(BenchmarkId::new("byteshift_u64", len), &needle, |b, n| {
            b.iter(|| find_with::<u64>(black_box(&haystack), black_box(n)));
        });

        group.bench_with_input(BenchmarkId::new("byteshift_u32", len), &needle, |b, n| {
            b.iter(|| find_with::<u32>(black_box(&haystack), black_box(n)));
        });

        group.bench_with_input(BenchmarkId::new("naive", len), &needle, |b, n| {
            b.iter(|| naive_find(black_box(&haystack), black_box(n)));
        });

        group.bench_with_input(BenchmarkId::new("memchr_memmem", len), &needle, |b, n| {
            b.iter(|| memchr::memmem::find(black_box(&haystack), black_box(n)));
        });
    }

    group.finish();
}

fn bench_strstr(c: &mut Criterion) {
    let mut group = c.benchmark_group("strstr");

    let haystack = generate_haystack(64 * 1024);
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    for len in [2, 4, 5, 8, 9, 16, 64] {
        let needle = CString::new(tail_needle(&haystack, len)).unwrap();
        let hay = CString::new(haystack.clone()).unwrap();

        group.bench_with_input(
            BenchmarkId::new("byteshift", len),
            &(&hay, &needle),
            |b, (hay, needle)| {
                b.iter(|| find_in_cstring(black_box(hay), black_box(needle)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("naive", len),
            &(&hay, &needle),
            |b, (hay, needle)| {
                b.iter(|| naive_find(black_box(hay.to_bytes()), black_box(needle.to_bytes())));
            },
        );
    }

    group.finish();
}

fn bench_haystack_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("haystack_size");

    // Fixed long needle, growing haystack: throughput should stay flat.
    for size in [64, 256, 1024, 4096, 16384, 65536, 262144] {
        let haystack = generate_haystack(size);
        let needle = tail_needle(&haystack, 24);

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("byteshift", size), &haystack, |b, h| {
            b.iter(|| byteshift::find(black_box(h), black_box(&needle)));
        });

        group.bench_with_input(BenchmarkId::new("naive", size), &haystack, |b, h| {
            b.iter(|| naive_find(black_box(h), black_box(&needle)));
        });
    }

    group.finish();
}

fn bench_find_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_iter");

    let haystack = generate_haystack(64 * 1024);
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    for needle in [&b"ab"[..], b"abc", b"abcd"] {
        group.bench_with_input(
            BenchmarkId::new("byteshift", needle.len()),
            &needle,
            |b, n| {
                b.iter(|| find_iter(black_box(&haystack), black_box(n)).count());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("memchr_memmem", needle.len()),
            &needle,
            |b, n| {
                b.iter(|| memchr::memmem::find_iter(black_box(&haystack), black_box(n)).count());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_memmem,
    bench_strstr,
    bench_haystack_size,
    bench_find_iter
);
criterion_main!(benches);
