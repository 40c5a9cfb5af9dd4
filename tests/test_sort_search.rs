extern crate classic_collections;
extern crate rand;

use classic_collections::search::{binary_search, linear_search};
use classic_collections::sort::{bubble_sort, insertion_sort, is_sorted, merge_sort, quick_sort};
use self::rand::Rng;
use std::vec::Vec;

fn random_values(rng: &mut rand::XorShiftRng) -> Vec<i32> {
    let len = rng.gen_range(0, 200);
    (0..len).map(|_| rng.gen_range(-100, 100)).collect()
}

#[test]
fn int_test_sorts_agree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    for _ in 0..200 {
        let values = random_values(&mut rng);
        let mut expected = values.clone();
        expected.sort();

        let mut bubble = values.clone();
        bubble_sort(&mut bubble);
        let mut insertion = values.clone();
        insertion_sort(&mut insertion);
        let merged = merge_sort(values.clone());
        let quick = quick_sort(values);

        assert_eq!(bubble, expected);
        assert_eq!(insertion, expected);
        assert_eq!(merged, expected);
        assert_eq!(quick, expected);
        assert!(is_sorted(&quick));

        assert_eq!(quick_sort(quick.clone()), quick);
        assert_eq!(merge_sort(merged.clone()), merged);
    }
}

#[test]
fn int_test_searches_agree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    for _ in 0..200 {
        let mut values = merge_sort(random_values(&mut rng));
        values.dedup();
        for _ in 0..50 {
            let target = rng.gen_range(-110, 110);
            let expected = values.iter().position(|value| *value == target);
            assert_eq!(linear_search(&values, &target), expected);
            assert_eq!(binary_search(&values, &target), expected);
        }
    }
}

#[test]
fn int_test_quick_sort_presorted_and_reversed() {
    let ascending = (0..100_000).collect::<Vec<u32>>();
    let descending = (0..100_000).rev().collect::<Vec<u32>>();
    assert_eq!(quick_sort(ascending.clone()), ascending);
    assert_eq!(quick_sort(descending), ascending);
}
