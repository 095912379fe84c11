// File: crates/nine-slice-core/tests/equality.rs
// Purpose: Validate structural equality and its agreement with hashing (map/set keys).

use nine_slice_core::NineSlice;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

fn digest(s: &NineSlice) -> u64 {
    let mut h = DefaultHasher::new();
    s.hash(&mut h);
    h.finish()
}

#[test]
fn equal_when_all_fields_match() {
    assert_eq!(NineSlice::new(1, 2, 3, 4), NineSlice::new(1, 2, 3, 4));
    assert_ne!(NineSlice::new(1, 2, 3, 4), NineSlice::new(1, 2, 3, 5));
    assert_ne!(NineSlice::new(1, 2, 3, 4), NineSlice::new(2, 1, 3, 4));
}

#[test]
fn equal_slices_hash_equally() {
    let a = NineSlice::new(10, -20, 30, -40);
    let b = NineSlice::new(10, -20, 30, -40);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_eq!(digest(&a), digest(&b));
}

#[test]
fn xor_collisions_stay_distinct_keys() {
    // (1,2,3,4) and (2,1,4,3) share an XOR hash but are not equal
    let a = NineSlice::new(1, 2, 3, 4);
    let b = NineSlice::new(2, 1, 4, 3);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_ne!(a, b);

    let set: HashSet<NineSlice> = [a, b, a].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn usable_as_map_key() {
    let mut counts: HashMap<NineSlice, usize> = HashMap::new();
    for s in [
        NineSlice::new(4, 4, 4, 4),
        NineSlice::new(0, 0, 0, 0),
        NineSlice::new(4, 4, 4, 4),
    ] {
        *counts.entry(s).or_default() += 1;
    }
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&NineSlice::new(4, 4, 4, 4)], 2);
    assert_eq!(counts[&NineSlice::default()], 1);
}
