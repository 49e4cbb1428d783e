#[cfg(test)]
use crate::rand::Rand;
#[cfg(test)]
use crate::scatter::{rand_point, scatter_points};


#[test]
fn scatter_stays_inside_bounds() {
	let mut rng = Rand::new(0xC0FFEE);
	let points = scatter_points(&mut rng, 5, 100, 50);
	assert_eq!(points.len(), 5);
	for p in &points {
		assert!(p.x >= 0.0 && p.x < 100.0);
		assert!(p.y >= 0.0 && p.y < 50.0);
		// integer draws per axis, so components are whole-valued
		assert_eq!(p.x.fract(), 0.0);
		assert_eq!(p.y.fract(), 0.0);
	}
}

#[test]
fn degenerate_bounds_scatter_nothing() {
	let mut rng = Rand::new(3);
	assert!(scatter_points(&mut rng, 5, 0, 50).is_empty());
	assert!(scatter_points(&mut rng, 5, 100, 0).is_empty());
	assert!(scatter_points(&mut rng, 5, -20, 50).is_empty());
}

#[test]
fn zero_count_scatters_nothing() {
	let mut rng = Rand::new(4);
	assert!(scatter_points(&mut rng, 0, 100, 50).is_empty());
}

#[test]
fn rand_point_is_bounded() {
	let mut rng = Rand::new(0x5EED);
	for _ in 0..500 {
		let p = rand_point(&mut rng, 64, 32);
		assert!(p.x >= 0.0 && p.x < 64.0);
		assert!(p.y >= 0.0 && p.y < 32.0);
	}
}
