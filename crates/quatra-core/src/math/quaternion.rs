// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.
//!
//! This file holds the core algebra: storage, norm, normalization, conjugate,
//! inverse, dot product and the Hamilton product. Conversions to and from other
//! rotation representations live in [`super::rotation`], blending in
//! [`super::interpolation`].

use approx::{AbsDiffEq, RelativeEq};

use super::{Vec3, EPSILON};
use crate::error::{QuatError, Result};
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion `x·i + y·j + z·k + w`.
///
/// Quaternions are used here to represent rotations in a left-handed coordinate
/// system with left-hand-thread rotations (positive angles turn clockwise when
/// looking down the axis towards the origin).
///
/// Any 4-tuple is a valid value: no invariant is enforced at construction. Only
/// unit quaternions (`x² + y² + z² + w² = 1`) describe pure rotations, and the
/// geometric operations normalize their inputs themselves instead of rejecting
/// non-unit input.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f64,
    /// The y component of the vector part.
    pub y: f64,
    /// The z component of the vector part.
    pub z: f64,
    /// The scalar (real) part.
    pub w: f64,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// The values are stored verbatim; NaN and infinities are not rejected.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Overwrites all four components in place.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Returns the components as an `[x, y, z, w]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Calculates the squared norm of the quaternion.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the norm (length) of the quaternion.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns `true` if the norm is within [`EPSILON`] of one.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.norm_squared() - 1.0).abs() <= 2.0 * EPSILON
    }

    /// Returns the quaternion divided by its norm.
    ///
    /// There is no guard for the zero quaternion: its components come back as NaN.
    /// Use [`Quaternion::try_normalized`] when the input may be degenerate.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    /// Returns the normalized quaternion, or [`QuatError::ZeroNorm`] if the norm
    /// is zero or not finite.
    pub fn try_normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm.is_finite() && norm > EPSILON {
            Ok(*self / norm)
        } else {
            log::debug!("Refusing to normalize {self:?}: norm is {norm}");
            Err(QuatError::ZeroNorm { norm })
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the general inverse `conjugate / norm²`.
    ///
    /// Unlike the conjugate alone, this is correct for non-unit quaternions too.
    /// The zero quaternion yields NaN components.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Composes two rotations. Same as `self * rhs`.
    #[inline]
    pub fn compose(self, rhs: Self) -> Self {
        self * rhs
    }

    /// Rotates a vector by this quaternion. Same as `self * v`.
    ///
    /// The quaternion is normalized before it is applied, and the result is then
    /// scaled by the original norm, so a non-unit quaternion also scales the vector.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let norm = self.norm();
        let q = self / norm;
        let p = Quaternion::new(v.x, v.y, v.z, 0.0);
        (q * p * q.conjugate()).xyz() * norm
    }
}

// --- Conversions ---

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    ///
    /// `a * b` applies `a` first and then `b` relative to the frame that `a`
    /// produced. Quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Self {
            x: a.x * b.w + a.w * b.x - a.z * b.y + a.y * b.z,
            y: a.y * b.w + a.z * b.x + a.w * b.y - a.x * b.z,
            z: a.z * b.w - a.y * b.x + a.x * b.y + a.w * b.z,
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    /// Divides all components by a scalar. Division by zero follows IEEE semantics.
    #[inline]
    fn div(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
            w: self.w / scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result describes the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

// --- Approximate Comparison ---

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}
