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

//! Conversions between quaternions and the other rotation representations:
//! axis-angle, Euler angles, direction pairs and look directions.
//!
//! Euler angles follow the left-handed convention used by common game engines:
//! the rotation about Z (roll) is applied first, then X (pitch), then Y (yaw).
//! All angles are in degrees.

use super::{
    degrees_to_radians, radians_to_degrees, wrap_degrees, EulerSettings, Quaternion, Vec3,
    EPSILON,
};
use crate::error::{QuatError, Result};

impl Quaternion {
    /// Creates a rotation of `angle` degrees around `axis`.
    ///
    /// The axis is normalized first; a zero axis yields NaN components.
    pub fn angle_axis(angle: f64, axis: Vec3) -> Self {
        let axis = axis.normalize();
        let half_angle = degrees_to_radians(angle) * 0.5;
        let (s, c) = half_angle.sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Splits the rotation into an angle in degrees and a unit axis.
    ///
    /// For the identity rotation the axis is undefined and comes back as NaN.
    /// [`Quaternion::try_to_angle_axis`] reports that case as an error instead.
    pub fn to_angle_axis(&self) -> (f64, Vec3) {
        let q = self.normalized();
        let angle = 2.0 * q.w.acos();
        let axis = q.xyz() / (angle * 0.5).sin();
        (radians_to_degrees(angle), axis)
    }

    /// Like [`Quaternion::to_angle_axis`], but fails on degenerate input instead
    /// of producing NaN.
    pub fn try_to_angle_axis(&self) -> Result<(f64, Vec3)> {
        let q = self.try_normalized()?;
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        let s = (angle * 0.5).sin();
        if s.abs() < EPSILON {
            let angle = radians_to_degrees(angle);
            log::debug!("Rotation of {angle} degrees has no defined axis");
            return Err(QuatError::SingularAxis { angle });
        }
        Ok((radians_to_degrees(angle), q.xyz() / s))
    }

    /// Creates a rotation from Euler angles in degrees.
    ///
    /// The result rotates `z` degrees around Z, then `x` degrees around X, then
    /// `y` degrees around Y, i.e. it equals
    /// `angle_axis(y, Y) * angle_axis(x, X) * angle_axis(z, Z)`.
    pub fn euler(x: f64, y: f64, z: f64) -> Self {
        let (sx, cx) = (degrees_to_radians(x) * 0.5).sin_cos();
        let (sy, cy) = (degrees_to_radians(y) * 0.5).sin_cos();
        let (sz, cz) = (degrees_to_radians(z) * 0.5).sin_cos();

        Self {
            x: cy * sx * cz + sy * cx * sz,
            y: sy * cx * cz - cy * sx * sz,
            z: cy * cx * sz - sy * sx * cz,
            w: cy * cx * cz + sy * sx * sz,
        }
    }

    /// Creates a rotation from a vector of Euler angles in degrees.
    #[inline]
    pub fn euler_vec(angles: Vec3) -> Self {
        Self::euler(angles.x, angles.y, angles.z)
    }

    /// Returns the Euler angles of this rotation in degrees, each in `[0, 360)`.
    ///
    /// This is the inverse of [`Quaternion::euler`] up to the double cover of
    /// rotations. Near ±90° pitch the decomposition is not unique; there the yaw
    /// is reported as zero (see [`EulerSettings::gimbal_lock_tolerance`]).
    pub fn euler_angles(&self) -> Vec3 {
        self.euler_angles_with(&EulerSettings::default())
    }

    /// Returns the Euler angles using explicit settings.
    pub fn euler_angles_with(&self, settings: &EulerSettings) -> Vec3 {
        let Quaternion { x, y, z, w } = self.normalized();
        let tolerance = settings.gimbal_lock_tolerance;

        // Sine of the pitch. The matrix entry m12 is 2yz - 2xw; pitch = asin(-m12).
        let sin_x = 2.0 * x * w - 2.0 * y * z;

        let (pitch, yaw, roll) = if (sin_x - 1.0).abs() < tolerance {
            log::trace!("Gimbal lock at +90 degrees pitch (sin {sin_x})");
            let roll = (2.0 * z * w - 2.0 * x * y).atan2(1.0 - 2.0 * y * y - 2.0 * z * z);
            (90.0, 0.0, radians_to_degrees(roll))
        } else if (sin_x + 1.0).abs() < tolerance {
            log::trace!("Gimbal lock at -90 degrees pitch (sin {sin_x})");
            let roll = (2.0 * z * w - 2.0 * x * y).atan2(1.0 - 2.0 * y * y - 2.0 * z * z);
            (-90.0, 0.0, radians_to_degrees(roll))
        } else {
            let pitch = sin_x.asin();
            let yaw = (2.0 * x * z + 2.0 * y * w).atan2(1.0 - 2.0 * x * x - 2.0 * y * y);
            let roll = (2.0 * x * y + 2.0 * z * w).atan2(1.0 - 2.0 * x * x - 2.0 * z * z);
            (
                radians_to_degrees(pitch),
                radians_to_degrees(yaw),
                radians_to_degrees(roll),
            )
        };

        Vec3::new(wrap_degrees(pitch), wrap_degrees(yaw), wrap_degrees(roll))
    }

    /// Creates the rotation that turns the direction `from` onto `to`.
    ///
    /// Inputs do not need to be normalized. When the directions are already
    /// aligned the identity is returned; when they point in opposite directions
    /// the result is a half turn around an arbitrary perpendicular axis.
    pub fn from_to_rotation(from: Vec3, to: Vec3) -> Self {
        Self::arc(from, to, None)
    }

    /// Like [`Quaternion::from_to_rotation`], but reports zero-length and
    /// parallel inputs as errors instead of picking a rotation.
    pub fn try_from_to_rotation(from: Vec3, to: Vec3) -> Result<Self> {
        let from = from
            .try_normalize()
            .ok_or(QuatError::ZeroNorm { norm: from.length() })?;
        let to = to
            .try_normalize()
            .ok_or(QuatError::ZeroNorm { norm: to.length() })?;

        let cosine = from.dot(to).clamp(-1.0, 1.0);
        let Some(axis) = from.cross(to).try_normalize() else {
            log::debug!("Directions {from:?} and {to:?} are parallel");
            return Err(QuatError::ParallelVectors { cosine });
        };
        Ok(Self::angle_axis(radians_to_degrees(cosine.acos()), axis))
    }

    /// Overwrites this quaternion with [`Quaternion::from_to_rotation`].
    pub fn set_from_to_rotation(&mut self, from: Vec3, to: Vec3) -> &mut Self {
        *self = Self::from_to_rotation(from, to);
        self
    }

    /// Creates a rotation looking along `forward` with `Vec3::Y` as up.
    #[inline]
    pub fn look_rotation(forward: Vec3) -> Self {
        Self::look_rotation_with_up(forward, Vec3::Y)
    }

    /// Creates a rotation whose local Z axis points along `forward` and whose
    /// local Y axis lies in the plane of `forward` and `up`.
    ///
    /// The rotation is built in two steps: the reference X axis is first turned
    /// onto the new right vector, then the already-turned Y axis is turned onto
    /// the new up vector. If `forward` is zero or parallel to `up` the basis is
    /// undefined and the result is NaN.
    pub fn look_rotation_with_up(forward: Vec3, up: Vec3) -> Self {
        let right = up.cross(forward).normalize();
        let up = forward.cross(right).normalize();

        let first = Self::from_to_rotation(Vec3::X, right);
        // Both vectors of the second step are perpendicular to `right`, so a
        // half turn must happen around it.
        let second = Self::arc(first * Vec3::Y, up, Some(right));
        second * first
    }

    /// Overwrites this quaternion with [`Quaternion::look_rotation_with_up`].
    pub fn set_look_rotation(&mut self, forward: Vec3, up: Vec3) -> &mut Self {
        *self = Self::look_rotation_with_up(forward, up);
        self
    }

    /// Shortest-arc rotation between two directions, with an optional axis to
    /// use for the half-turn case.
    fn arc(from: Vec3, to: Vec3, half_turn_axis: Option<Vec3>) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        let cosine = from.dot(to).clamp(-1.0, 1.0);
        let axis = from.cross(to);

        match axis.try_normalize() {
            Some(axis) => Self::angle_axis(radians_to_degrees(cosine.acos()), axis),
            None if cosine > 0.0 => Self::IDENTITY,
            None if cosine < 0.0 => {
                let axis = half_turn_axis.unwrap_or_else(|| from.any_orthogonal());
                Self::angle_axis(180.0, axis)
            }
            // NaN input: let it propagate.
            None => Self::angle_axis(radians_to_degrees(cosine.acos()), axis),
        }
    }
}
