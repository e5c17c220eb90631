#[macro_use]
extern crate bencher;

extern crate comp40;
use comp40::prelude::*;

use bencher::Bencher;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn noise_pixmap() -> Vec<u8> {
    let mut random = StdRng::seed_from_u64(0);
    let pixels = Grid::from_fn((1024, 768), |_| Rgb::new(random.gen(), random.gen(), random.gen()));

    let mut bytes = Vec::new();
    write_raster(&mut bytes, &pixels).unwrap();
    bytes
}

/// Compress a pixmap from an in-memory buffer
fn compress_parallel(bench: &mut Bencher) {
    let pixmap = noise_pixmap();

    bench.iter(||{
        let compressed = compress_bytes(&pixmap, Options::default()).unwrap();
        bencher::black_box(compressed);
    })
}

/// Compress on a single thread
fn compress_non_parallel(bench: &mut Bencher) {
    let pixmap = noise_pixmap();

    bench.iter(||{
        let compressed = compress_bytes(&pixmap, Options::default().non_parallel()).unwrap();
        bencher::black_box(compressed);
    })
}

/// Decompress to a pixmap in memory
fn decompress_parallel(bench: &mut Bencher) {
    let compressed = compress_bytes(&noise_pixmap(), Options::default()).unwrap();

    bench.iter(||{
        let pixmap = decompress_bytes(&compressed, Options::default()).unwrap();
        bencher::black_box(pixmap);
    })
}

/// Decompress on a single thread
fn decompress_non_parallel(bench: &mut Bencher) {
    let compressed = compress_bytes(&noise_pixmap(), Options::default()).unwrap();

    bench.iter(||{
        let pixmap = decompress_bytes(&compressed, Options::default().non_parallel()).unwrap();
        bencher::black_box(pixmap);
    })
}

/// Only the block stages, without pixmap and file io
fn codewords_only(bench: &mut Bencher) {
    let pixels = read_raster(noise_pixmap().as_slice()).unwrap();

    bench.iter(||{
        let codewords = compress(pixels.clone(), Options::default()).unwrap();
        bencher::black_box(decompress(codewords, Options::default()));
    })
}


benchmark_group!(codec,
    compress_parallel,
    compress_non_parallel,
    decompress_parallel,
    decompress_non_parallel,
    codewords_only
);

benchmark_main!(codec);
