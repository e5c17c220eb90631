
//! Compresses and decompresses complete images through the public interface.

extern crate comp40;

use comp40::prelude::*;
use comp40::codeword::unpack;
use comp40::quantize::QuantizedBlock;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// Build an image of 2 by 2 blocks, each given in the order
/// top-left, top-right, bottom-left, bottom-right.
fn image_of_blocks(blocks: &[[Rgb; 4]]) -> Grid<Rgb> {
    Grid::from_fn((blocks.len() * 2, 2), |position| {
        let block = &blocks[position.x() / 2];
        block[position.y() * 2 + position.x() % 2]
    })
}

fn pixmap(pixels: &Grid<Rgb>) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_raster(&mut bytes, pixels).unwrap();
    bytes
}

fn quantized(block: QuantizedBlock) -> (u64, i64, i64, i64, u64, u64) {
    (block.a, block.b, block.c, block.d, block.pb_index, block.pr_index)
}

fn random_image(random: &mut StdRng, resolution: (usize, usize)) -> Grid<Rgb> {
    Grid::from_fn(resolution, |_| Rgb::new(random.gen(), random.gen(), random.gen()))
}


#[test]
fn gray_block_end_to_end(){
    let compressed = compress_bytes(&pixmap(&Grid::new((2, 2), vec![Rgb::gray(128); 4])), Options::default()).unwrap();

    let header = b"COMP40 Compressed image format 2\n2 2\n";
    assert!(compressed.starts_with(header));
    assert_eq!(compressed.len(), header.len() + 4);

    let codeword = u32::from_be_bytes([compressed[header.len()], compressed[header.len() + 1], compressed[header.len() + 2], compressed[header.len() + 3]]);
    assert_eq!(quantized(unpack(codeword)), (257, 0, 0, 0, 8, 8));

    let restored = read_raster(decompress_bytes(&compressed, Options::default()).unwrap().as_slice()).unwrap();
    assert_eq!(restored.resolution(), Vec2(2, 2));

    // the neutral chroma index decodes to a small positive chroma, tinting the gray
    for pixel in restored.as_slice() {
        assert_eq!(*pixel, Rgb::new(135, 122, 137));
    }
}

#[test]
fn gray_levels_near_the_chroma_rounding_boundary(){
    // (gray level, codeword fields, reconstructed pixel)
    let cases = [
        (128, (257, 0, 0, 0, 8, 8), Rgb::new(135, 122, 137)),
        (153, (307, 0, 0, 0, 8, 7), Rgb::new(146, 155, 162)),
        (178, (357, 0, 0, 0, 8, 7), Rgb::new(171, 180, 187)),
        (252, (505, 0, 0, 0, 8, 7), Rgb::new(244, 253, 255)),
        (5, (10, 0, 0, 0, 8, 8), Rgb::new(12, 0, 14)),
    ];

    for &(value, fields, reconstructed) in &cases {
        let codewords = compress(Grid::new((2, 2), vec![Rgb::gray(value); 4]), Options::default()).unwrap();
        assert_eq!(quantized(unpack(codewords.blocks[0])), fields, "gray {}", value);

        let restored = decompress(codewords, Options::default());
        assert_eq!(restored.as_slice(), &[reconstructed; 4], "gray {}", value);
    }

    // these gray levels all produce a red difference index of 7
    for &value in &[153_u8, 178, 184, 203, 209, 215, 221, 234, 240, 246, 252] {
        let codewords = compress(Grid::new((2, 2), vec![Rgb::gray(value); 4]), Options::default()).unwrap();
        let block = unpack(codewords.blocks[0]);
        assert_eq!((block.pb_index, block.pr_index), (8, 7), "gray {}", value);
    }
}

#[test]
fn known_blocks(){
    let blocks = [
        [Rgb::new(118, 112, 235); 4],
        [Rgb::new(211, 248, 182); 4],
        [Rgb::new(33, 196, 54), Rgb::new(126, 105, 104), Rgb::new(57, 17, 17), Rgb::new(44, 147, 244)],
        [Rgb::new(79, 161, 15), Rgb::new(176, 143, 10), Rgb::new(48, 17, 104), Rgb::new(248, 109, 133)],
    ];

    let codewords = compress(image_of_blocks(&blocks), Options::default()).unwrap();
    assert_eq!(codewords.layout.resolution(), Vec2(8, 2));

    let fields: Vec<_> = codewords.blocks.iter().map(|&codeword| quantized(unpack(codeword))).collect();
    assert_eq!(fields, vec![
        (256, 0, 0, 0, 13, 7),
        (460, 0, 0, 0, 5, 6),
        (200, -4, 4, 6, 8, 5),
        (224, -3, 7, 5, 5, 9),
    ]);

    let restored = decompress(codewords, Options::default());
    assert_eq!(restored, image_of_blocks(&[
        [Rgb::new(120, 112, 227); 4],
        [Rgb::new(208, 249, 184); 4],
        [Rgb::new(94, 146, 139), Rgb::new(74, 126, 119), Rgb::new(0, 44, 37), Rgb::new(94, 146, 139)],
        [Rgb::new(138, 114, 71), Rgb::new(158, 135, 92), Rgb::new(56, 33, 0), Rgb::new(179, 155, 112)],
    ]));
}

#[test]
fn recompressing_known_blocks_is_stable(){
    let original = image_of_blocks(&[
        [Rgb::gray(5); 4],
        [Rgb::new(118, 112, 235); 4],
        [Rgb::new(33, 196, 54), Rgb::new(126, 105, 104), Rgb::new(57, 17, 17), Rgb::new(44, 147, 244)],
        [Rgb::new(79, 161, 15), Rgb::new(176, 143, 10), Rgb::new(48, 17, 104), Rgb::new(248, 109, 133)],
    ]);

    let first = compress_bytes(&pixmap(&original), Options::default()).unwrap();
    let second = compress_bytes(&decompress_bytes(&first, Options::default()).unwrap(), Options::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn odd_dimensions_are_trimmed(){
    let pixels = Grid::from_fn((5, 7), |position| Rgb::gray((position.x() * 30 + position.y()) as u8));
    let compressed = compress_bytes(&pixmap(&pixels), Options::default()).unwrap();
    assert!(compressed.starts_with(b"COMP40 Compressed image format 2\n4 6\n"));

    let restored = read_raster(decompress_bytes(&compressed, Options::default()).unwrap().as_slice()).unwrap();
    assert_eq!(restored.resolution(), Vec2(4, 6));
}

#[test]
fn plain_pixmap_is_accepted(){
    let plain = b"P3\n2 2\n255\n10 20 30  40 50 60\n70 80 90  100 110 120\n";
    let binary = pixmap(&Grid::new((2, 2), vec![
        Rgb::new(10, 20, 30), Rgb::new(40, 50, 60),
        Rgb::new(70, 80, 90), Rgb::new(100, 110, 120),
    ]));

    assert_eq!(
        compress_bytes(plain, Options::default()).unwrap(),
        compress_bytes(&binary, Options::default()).unwrap()
    );
}

#[test]
fn reconstruction_error_is_bounded(){
    let mut random = StdRng::seed_from_u64(7);

    // smooth gradients survive well, only the chroma step and truncation remain
    let pixels = Grid::from_fn((64, 32), |position| Rgb::new(
        60 + position.x() as u8, 80 + position.y() as u8, 100 + (position.x() + position.y()) as u8 / 2
    ));

    let restored = decompress(compress(pixels.clone(), Options::default()).unwrap(), Options::default());
    for (original, restored) in pixels.as_slice().iter().zip(restored.as_slice()) {
        for &(a, b) in &[(original.red, restored.red), (original.green, restored.green), (original.blue, restored.blue)] {
            assert!((i32::from(a) - i32::from(b)).abs() <= 24, "{:?} became {:?}", original, restored);
        }
    }

    // noise is lossy, but the image keeps its size
    let noise = random_image(&mut random, (16, 10));
    let restored = decompress(compress(noise, Options::default()).unwrap(), Options::default());
    assert_eq!(restored.resolution(), Vec2(16, 10));
}

#[test]
fn parallel_equals_sequential(){
    let mut random = StdRng::seed_from_u64(42);

    for &resolution in &[(2, 2), (64, 64), (130, 34), (31, 17)] {
        let pixmap = pixmap(&random_image(&mut random, resolution));

        let parallel = compress_bytes(&pixmap, Options::default()).unwrap();
        let sequential = compress_bytes(&pixmap, Options::sequential()).unwrap();
        assert_eq!(parallel, sequential);

        assert_eq!(
            decompress_bytes(&parallel, Options::default()).unwrap(),
            decompress_bytes(&sequential, Options::sequential()).unwrap()
        );
    }
}

#[test]
fn compressed_size_is_a_quarter(){
    let compressed = compress_bytes(&pixmap(&Grid::new((40, 20), vec![Rgb::gray(99); 800])), Options::default()).unwrap();
    let header = b"COMP40 Compressed image format 2\n40 20\n";
    assert_eq!(compressed.len(), header.len() + 40 * 20 / 4 * 4);
}
