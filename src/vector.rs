use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Immutable 2D point or vector. Every operation returns a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, c: f64) -> Self {
        Self::new(self.x * c, self.y * c)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    /// Standard math angle in radians, `atan2(y, x)`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Counter-clockwise rotation by `th` radians.
    pub fn rotate(self, th: f64) -> Self {
        let (sin, cos) = th.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Projection of `self` onto `onto`. Projecting onto the zero vector yields zero.
    pub fn project(self, onto: Self) -> Self {
        let denom = onto.dot(onto);
        if denom == 0. {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / denom)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.scale(1. / rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn arithmetic() {
        let a = Vector2D::new(3., 4.);
        let b = Vector2D::new(1., -2.);

        assert_eq!(a + b, Vector2D::new(4., 2.));
        assert_eq!(a - b, Vector2D::new(2., 6.));
        assert_eq!(a.scale(2.), Vector2D::new(6., 8.));
        assert_eq!(a.dot(b), -5.);
        assert_eq!(a.cross(b), -10.);
        assert_eq!(a.norm(), 5.);
        assert_eq!(a.distance(Vector2D::ZERO), 5.);
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = Vector2D::new(1., 0.).rotate(FRAC_PI_2);
        assert_relative_eq!(r.x, 0., epsilon = 1e-12);
        assert_relative_eq!(r.y, 1., epsilon = 1e-12);
        assert_relative_eq!(r.angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn project_onto_axis_and_zero() {
        let v = Vector2D::new(3., 4.);
        assert_eq!(v.project(Vector2D::new(2., 0.)), Vector2D::new(3., 0.));
        assert_eq!(v.project(Vector2D::ZERO), Vector2D::ZERO);
    }
}
