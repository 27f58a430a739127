use std::f64::consts::TAU;

use rand::Rng;

use crate::Vector2D;

/// Uniformly random point inside the disk of `radius` around `center`.
///
/// The radius is drawn as `radius * sqrt(u)` so points are uniform by area,
/// not clustered at the center.
pub fn point_in_disk<R: Rng + ?Sized>(rng: &mut R, center: Vector2D, radius: f64) -> Vector2D {
    let angle = rng.random::<f64>() * TAU;
    let r = radius * rng.random::<f64>().sqrt();

    Vector2D::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}
