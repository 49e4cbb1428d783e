#[cfg(test)]
use crate::array::{Exclude, PickError, pick, shuffle, shuffle_with};
#[cfg(test)]
use crate::rand::{Rand, next_int};
#[cfg(test)]
use std::collections::HashSet;


#[test]
fn shuffle_preserves_elements() {
	let mut rng = Rand::new(0xDEAD_BEEF);
	let mut items: Vec<i32> = (0..20).collect();
	shuffle(&mut rng, &mut items);
	assert_eq!(items.len(), 20);

	let mut sorted = items.clone();
	sorted.sort();
	assert_eq!(sorted, (0..20).collect::<Vec<i32>>());
}

#[test]
fn shuffle_leaves_trivial_input_alone() {
	let mut rng = Rand::new(7);
	let mut empty: Vec<u8> = Vec::new();
	shuffle(&mut rng, &mut empty);
	assert!(empty.is_empty());

	let mut single = vec!["only"];
	shuffle(&mut rng, &mut single);
	assert_eq!(single, vec!["only"]);
}

#[test]
fn shuffle_reaches_every_permutation() {
	let mut seen = HashSet::new();
	for seed in 1..=300u32 {
		let mut rng = Rand::new(seed.wrapping_mul(2_654_435_761));
		let mut items = [0, 1, 2];
		shuffle(&mut rng, &mut items);
		seen.insert(items);
	}
	assert_eq!(seen.len(), 6);
}

#[test]
fn exchange_delegate_gets_every_swap() {
	let mut rng = Rand::new(99);
	let mut items: Vec<u32> = (0..8).collect();
	let mut swaps: Vec<(usize, usize)> = Vec::new();
	shuffle_with(&mut rng, &mut items, |i, j, _items| swaps.push((i, j)));

	assert_eq!(swaps.len(), 7);
	for (step, &(i, j)) in swaps.iter().enumerate() {
		assert_eq!(i, 7 - step);
		assert!(j <= i);
	}
	// the delegate did nothing, so the slice must be untouched
	assert_eq!(items, (0..8).collect::<Vec<u32>>());
}

#[test]
fn pick_returns_a_member() {
	let mut rng = Rand::new(next_int());
	let items = vec![3, 1, 4, 1, 5, 9];
	for _ in 0..50 {
		let picked = pick(&mut rng, &items, Exclude::None).unwrap();
		assert!(items.contains(picked));
	}
}

#[test]
fn pick_skips_single_exclusion() {
	let mut rng = Rand::new(0xABCD);
	let items = vec!["red", "green", "blue"];
	for _ in 0..100 {
		let picked = pick(&mut rng, &items, Exclude::One(&"green")).unwrap();
		assert_ne!(*picked, "green");
	}
}

#[test]
fn pick_skips_excluded_list() {
	let mut rng = Rand::new(0x1234);
	let items: Vec<i32> = (0..10).collect();
	let banned = [0, 2, 4, 6, 8];
	for _ in 0..200 {
		let picked = *pick(&mut rng, &items, Exclude::Many(&banned)).unwrap();
		assert_eq!(picked % 2, 1);
	}
}

#[test]
fn single_entry_list_acts_like_single_value() {
	let mut rng = Rand::new(5);
	let items = vec![1, 2];
	let banned = [2];
	for _ in 0..50 {
		assert_eq!(*pick(&mut rng, &items, Exclude::Many(&banned)).unwrap(), 1);
	}
}

#[test]
fn full_exclusion_reports_exhaustion() {
	let mut rng = Rand::new(11);
	let items = vec!['a', 'b'];
	let banned = ['a', 'b'];
	assert_eq!(
		pick(&mut rng, &items, Exclude::Many(&banned)),
		Err(PickError::Exhausted)
	);
	// partial exclusion still works on the same input
	assert_eq!(pick(&mut rng, &items, Exclude::One(&'a')).map(|c| *c), Ok('b'));
}

#[test]
fn empty_input_is_an_error() {
	let mut rng = Rand::new(1);
	let items: Vec<u8> = Vec::new();
	assert_eq!(pick(&mut rng, &items, Exclude::None), Err(PickError::Empty));
}

#[test]
fn every_candidate_is_reachable() {
	let mut seen = HashSet::new();
	for seed in 1..=200u32 {
		let mut rng = Rand::new(seed.wrapping_mul(0x9E37_79B9));
		let items = [10, 20, 30, 40];
		seen.insert(*pick(&mut rng, &items, Exclude::One(&30)).unwrap());
	}
	assert_eq!(seen, HashSet::from([10, 20, 40]));
}
