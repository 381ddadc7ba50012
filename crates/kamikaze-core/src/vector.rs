//! Mutable 2D vector used for positions, velocities, and scratch math.
//!
//! Every mutator works in place and returns `&mut Self` so calls chain:
//! `v.copy_from(&a).subtract(&b).normalize()`. Degenerate inputs are part
//! of the contract: dividing by zero yields the zero vector and normalizing
//! a zero-length vector leaves it untouched.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// 2D vector in simulation space (x = right, y = down, angles clockwise from +x).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

/// Whether two numbers are within `epsilon` of each other.
pub fn almost_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn copy_from(&mut self, other: &Vector2D) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    /// Overwrite with the unit vector pointing at `angle`.
    pub fn set_from_angle(&mut self, angle: f64) -> &mut Self {
        self.set(angle.cos(), angle.sin())
    }

    pub fn add(&mut self, other: &Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn add_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x += scalar;
        self.y += scalar;
        self
    }

    pub fn subtract(&mut self, other: &Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn subtract_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x -= scalar;
        self.y -= scalar;
        self
    }

    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Divide both components by `scalar`. A zero scalar produces the zero vector.
    pub fn divide_scalar(&mut self, scalar: f64) -> &mut Self {
        if scalar != 0.0 {
            self.x /= scalar;
            self.y /= scalar;
        } else {
            self.x = 0.0;
            self.y = 0.0;
        }
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.multiply_scalar(-1.0)
    }

    /// Rescale to `max_length` if currently longer, keeping the direction.
    pub fn clamp(&mut self, max_length: f64) -> &mut Self {
        if self.length() > max_length {
            self.normalize().multiply_scalar(max_length);
        }
        self
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar (z component) of the 3D cross product.
    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle of the vector in radians. Zero for the zero vector.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Signed angle from `self` to `other`, in (-π, π].
    pub fn angle_to(&self, other: &Vector2D) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Angle of the line from `point` to `self` against the x axis.
    pub fn angle_to_point(&self, point: &Vector2D) -> f64 {
        (self.y - point.y).atan2(self.x - point.x)
    }

    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.set(x * cos - y * sin, x * sin + y * cos)
    }

    /// Rotate so the vector points at `rotation`, keeping its length.
    pub fn rotate_to(&mut self, rotation: f64) -> &mut Self {
        let delta = rotation - self.angle();
        self.rotate(delta)
    }

    /// Set the length, keeping the angle. The zero vector is treated as pointing at angle 0.
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        let angle = self.angle();
        self.set(angle.cos() * length, angle.sin() * length)
    }

    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        self.distance_sq(other).sqrt()
    }

    pub fn distance_sq(&self, other: &Vector2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Scale to unit length. No-op on the zero vector.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length != 0.0 {
            self.divide_scalar(length);
        }
        self
    }

    pub fn is_normalized(&self) -> bool {
        almost_equal(self.length(), 1.0, EPSILON)
    }

    /// Replace with the unit vector pointing from `self` to `other`.
    pub fn direction_to(&mut self, other: &Vector2D) -> &mut Self {
        let mut direction = *other;
        direction.subtract(self).normalize();
        self.copy_from(&direction)
    }

    /// Mirror across the line spanned by `normal` (need not be normalized).
    pub fn reflect(&mut self, normal: &Vector2D) -> &mut Self {
        let mut n = *normal;
        n.normalize();
        let scale = 2.0 * self.dot(&n);
        n.multiply_scalar(scale).subtract(self);
        self.copy_from(&n)
    }

    /// Bounce off the surface whose normal is `normal`.
    pub fn bounce(&mut self, normal: &Vector2D) -> &mut Self {
        self.reflect(normal).negate()
    }

    /// Linear interpolation toward `target` by `weight` (0.0 = stay, 1.0 = target).
    pub fn lerp(&mut self, target: &Vector2D, weight: f64) -> &mut Self {
        let x = self.x + weight * (target.x - self.x);
        let y = self.y + weight * (target.y - self.y);
        self.set(x, y)
    }

    /// Step toward `target` by at most `max_delta`, snapping when closer than that.
    pub fn move_toward(&mut self, target: &Vector2D, max_delta: f64) -> &mut Self {
        let mut offset = *target;
        offset.subtract(self);
        if offset.length() < max_delta {
            return self.copy_from(target);
        }
        offset.normalize().multiply_scalar(max_delta);
        self.add(&offset)
    }

    /// Project onto `other`. Projecting onto the zero vector yields the zero vector.
    pub fn project(&mut self, other: &Vector2D) -> &mut Self {
        let length_sq = other.length_sq();
        if length_sq == 0.0 {
            return self.set(0.0, 0.0);
        }
        let scale = self.dot(other) / length_sq;
        let mut projected = *other;
        projected.multiply_scalar(scale);
        self.copy_from(&projected)
    }

    /// Rotate 90 degrees counterclockwise, keeping the length.
    pub fn orthogonal(&mut self) -> &mut Self {
        let (x, y) = (self.x, self.y);
        self.set(y, -x)
    }

    pub fn almost_eq(&self, other: &Vector2D, epsilon: f64) -> bool {
        almost_equal(self.x, other.x, epsilon) && almost_equal(self.y, other.y, epsilon)
    }
}

impl std::ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl std::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}
