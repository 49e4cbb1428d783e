
use crate::rand::Rand;
use glam::Vec2;

/// Random point inside [{0,0}, {width,height}), whole-valued components.
#[inline]
pub fn rand_point(rng: &mut Rand, width: i32, height: i32) -> Vec2 {
	let x = rng.range_i32(0, width);
	let y = rng.range_i32(0, height);
	Vec2::new(x as f32, y as f32)
}

/// Scatter `count` random points inside the given bounds.
///
/// Assigning the points to whatever owns them (scene nodes etc.) is the
/// caller's job, this only produces coordinates.
pub fn scatter_points(rng: &mut Rand, count: usize, width: i32, height: i32) -> Vec<Vec2> {
	if width <= 0 || height <= 0 {
		log::warn!("degenerate scatter bounds {}x{}", width, height);
		return Vec::new();
	}
	(0..count).map(|_| rand_point(rng, width, height)).collect()
}
