extern crate classic_collections;
extern crate rand;

use classic_collections::map::AssocMap;
use classic_collections::set::AssocSet;
use self::rand::Rng;
use std::vec::Vec;

#[test]
fn int_test_assoc_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = AssocMap::new();
    // reference model: (key, value) pairs in first-insertion order
    let mut expected: Vec<(u32, u32)> = Vec::new();
    for _ in 0..5_000 {
        let key = rng.gen_range(0, 1_000);
        let val = rng.gen::<u32>();

        if rng.gen_weighted_bool(3) {
            let position = expected.iter().position(|pair| pair.0 == key);
            let old_entry = map.remove(&key);
            assert_eq!(old_entry, position.map(|index| expected.remove(index)));
        } else {
            map.insert(key, val);
            assert_eq!(map.get(&key), Some(&val));
            match expected.iter_mut().find(|pair| pair.0 == key) {
                Some(pair) => pair.1 = val,
                None => expected.push((key, val)),
            }
        }
        assert_eq!(map.len(), expected.len());
    }

    assert_eq!(
        map.iter().map(|(key, val)| (*key, *val)).collect::<Vec<(u32, u32)>>(),
        expected,
    );
    assert_eq!(map.into_iter().collect::<Vec<(u32, u32)>>(), expected);
}

#[test]
fn int_test_assoc_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AssocSet::new();
    let mut expected = Vec::new();
    for _ in 0..5_000 {
        let value = rng.gen_range(0, 500);
        let added = set.insert(value);
        assert_eq!(added, !expected.contains(&value));
        if added {
            expected.push(value);
        }
        assert_eq!(set.len(), expected.len());
    }

    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), expected);
}
