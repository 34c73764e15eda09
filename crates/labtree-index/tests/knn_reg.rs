//! k-nearest-neighbor regression test
//!
//! The tree's k-NN results must be sorted, have length `min(k, n)`, and
//! match the brute-force ranking entry for entry.

use labtree_core::{distance, palette_from_rgb};
use labtree_index::{KdTree, k_nearest_brute_force};
use labtree_test::{RegParams, grayscale_ramp, random_palette, random_queries};

#[test]
fn knn_reg() {
    let mut rp = RegParams::new("knn");

    for (seed, size) in [(21u64, 1usize), (22, 9), (23, 64), (24, 333)] {
        let palette = palette_from_rgb(&random_palette(seed, size));
        let tree = KdTree::build(palette.clone()).expect("non-empty palette");

        for query in random_queries(seed + 1, 40) {
            for k in [1usize, 2, 3, 8, 50, 1000] {
                let expected = k_nearest_brute_force(query, &palette, k).expect("oracle");
                let actual = tree.k_nearest_neighbors(query, k).expect("tree");

                rp.compare_indices(k.min(size), actual.len());
                let sorted = actual
                    .windows(2)
                    .all(|w| distance(query, w[0].lab()) <= distance(query, w[1].lab()));
                rp.check(sorted, "non-decreasing distance");

                let expected: Vec<usize> = expected.iter().map(|e| e.index()).collect();
                let actual: Vec<usize> = actual.iter().map(|e| e.index()).collect();
                rp.check(expected == actual, "same ranking as brute force");
            }
        }
    }

    assert!(rp.cleanup(), "knn regression test failed");
}

#[test]
fn knn_duplicates_reg() {
    let mut rp = RegParams::new("knn_duplicates");

    // Every gray appears three times
    let ramp = grayscale_ramp(12).expect("ramp");
    let colors: Vec<_> = ramp.iter().chain(&ramp).chain(&ramp).copied().collect();
    let palette = palette_from_rgb(&colors);
    let tree = KdTree::build(palette.clone()).expect("non-empty palette");

    let query = palette[4].lab();
    let found = tree.k_nearest_neighbors(query, 3).expect("k = 3");
    let indices: Vec<usize> = found.iter().map(|e| e.index()).collect();
    rp.check(indices == vec![4, 16, 28], "all copies retrieved in palette order");

    let all = tree.k_nearest_neighbors(query, colors.len()).expect("all");
    rp.compare_indices(colors.len(), all.len());
    let mut seen: Vec<usize> = all.iter().map(|e| e.index()).collect();
    seen.sort_unstable();
    seen.dedup();
    rp.compare_indices(colors.len(), seen.len());

    assert!(rp.cleanup(), "knn_duplicates regression test failed");
}
