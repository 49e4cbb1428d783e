
use crate::rand::Rand;
use std::fmt;

/// In-place Fisher-Yates shuffle.
///
/// Walks from the back, swapping each slot with a uniformly chosen
/// earlier-or-equal one. Empty and single-element slices are left alone.
pub fn shuffle<T>(rng: &mut Rand, items: &mut [T]) {
	for i in (1..items.len()).rev() {
		let j = rng.index(i + 1);
		items.swap(i, j);
	}
}

/// Fisher-Yates where the swap itself is delegated.
///
/// Same index walk as [`shuffle`], but each step calls
/// `exchange(i, j, items)` instead of swapping slots directly, for
/// callers whose elements are proxies that have to be swapped through a
/// side channel (node order, z-index, ...). For a length-n slice the
/// delegate runs exactly n-1 times with j <= i.
pub fn shuffle_with<T, F>(rng: &mut Rand, items: &mut [T], mut exchange: F)
where
	F: FnMut(usize, usize, &mut [T]),
{
	for i in (1..items.len()).rev() {
		let j = rng.index(i + 1);
		exchange(i, j, items);
	}
}

/// Values a pick is not allowed to return.
#[derive(Debug, Clone, Copy)]
pub enum Exclude<'a, T> {
	None,
	One(&'a T),
	Many(&'a [T]),
}

#[derive(Debug, PartialEq, Eq)]
pub enum PickError {
	Empty,
	Exhausted,
}

impl fmt::Display for PickError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			PickError::Empty => write!(f, "Cannot pick from an empty slice"),
			PickError::Exhausted => write!(f, "Every element is excluded"),
		}
	}
}

impl std::error::Error for PickError {}

/// Pick one element uniformly at random, skipping excluded values.
///
/// Exclusion membership is a plain equality scan. Candidates are
/// collected up front and sampled once, so a fully excluded slice
/// reports [`PickError::Exhausted`] instead of retrying forever.
pub fn pick<'a, T: PartialEq>(
	rng: &mut Rand,
	items: &'a [T],
	exclude: Exclude<'_, T>,
) -> Result<&'a T, PickError> {
	if items.is_empty() {
		return Err(PickError::Empty);
	}
	match exclude {
		Exclude::None => Ok(&items[rng.index(items.len())]),
		Exclude::Many(banned) if banned.len() == 1 => pick(rng, items, Exclude::One(&banned[0])),
		Exclude::One(banned) => pick_from(rng, items, |item| item != banned),
		Exclude::Many(banned) => pick_from(rng, items, |item| !banned.contains(item)),
	}
}

fn pick_from<'a, T, P>(rng: &mut Rand, items: &'a [T], keep: P) -> Result<&'a T, PickError>
where
	P: Fn(&T) -> bool,
{
	let candidates: Vec<usize> = (0..items.len()).filter(|&i| keep(&items[i])).collect();
	if candidates.is_empty() {
		return Err(PickError::Exhausted);
	}
	Ok(&items[candidates[rng.index(candidates.len())]])
}
