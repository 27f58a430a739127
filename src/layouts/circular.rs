use std::f64::consts::PI;

use crate::{SettingsCanvas, Vector2D};

/// Initial placement: vertices on a regular polygon centered on the canvas.
///
/// Vertex `i` sits at angle `i * theta + theta / 2` with `sin` giving x and
/// `cos` giving y. For odd `n` the center is shifted down by half
/// the gap between the circle and the flat side so the polygon looks balanced.
pub fn polygon(canvas: &SettingsCanvas, n: usize) -> Vec<Vector2D> {
    if n == 0 {
        return Vec::new();
    }

    let radius = (canvas.min_side() - 100.) / 2.;
    let theta = 2. * PI / n as f64;

    let mut center = canvas.center();
    if n % 2 == 1 {
        let gap = radius - radius * (theta / 2.).cos();
        center = center + Vector2D::new(0., gap / 2.);
    }

    (0..n)
        .map(|i| {
            let angle = i as f64 * theta + theta / 2.;
            Vector2D::new(
                center.x + angle.sin() * radius,
                center.y + angle.cos() * radius,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_graph_has_no_positions() {
        assert!(polygon(&SettingsCanvas::default(), 0).is_empty());
    }

    #[test]
    fn even_polygon_is_centered() {
        let canvas = SettingsCanvas::new(600., 400., 20.);
        let pos = polygon(&canvas, 4);
        let r = (400. - 100.) / 2.;

        for p in &pos {
            assert_relative_eq!(p.distance(canvas.center()), r, epsilon = 1e-9);
        }
        let sum = pos.iter().fold(Vector2D::ZERO, |acc, &p| acc + p);
        assert_relative_eq!(sum.x / 4., 300., epsilon = 1e-9);
        assert_relative_eq!(sum.y / 4., 200., epsilon = 1e-9);
    }

    #[test]
    fn odd_polygon_is_shifted_down() {
        let canvas = SettingsCanvas::new(600., 400., 20.);
        let pos = polygon(&canvas, 3);
        let r: f64 = 150.;
        let shift = (r - r * (PI / 3.).cos()) / 2.;

        for p in &pos {
            let c = canvas.center() + Vector2D::new(0., shift);
            assert_relative_eq!(p.distance(c), r, epsilon = 1e-9);
        }
    }
}
