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

//! Blending between rotations.
//!
//! Both interpolation families work on the normalized chord between the two
//! rotations. [`Quaternion::slerp`] only differs from [`Quaternion::lerp`] by an
//! ease curve on `t`; it is not a constant-angular-velocity great-circle
//! interpolation. No hemisphere correction is applied: blending `q` with `-q`
//! passes through zero.

use super::{radians_to_degrees, saturate, Quaternion, PI};

impl Quaternion {
    /// Linearly interpolates between two rotations and normalizes the result.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` yields `a` and `t = 1` yields `b`
    /// (both normalized).
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::lerp_unclamped(a, b, saturate(t))
    }

    /// Like [`Quaternion::lerp`], but `t` may leave `[0, 1]` to extrapolate.
    pub fn lerp_unclamped(a: Self, b: Self, t: f64) -> Self {
        let a = a.normalized();
        let b = b.normalized();
        (a * (1.0 - t) + b * t).normalized()
    }

    /// Eased interpolation between two rotations. `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn slerp(a: Self, b: Self, t: f64) -> Self {
        Self::slerp_unclamped(a, b, saturate(t))
    }

    /// Eased interpolation without clamping `t`.
    ///
    /// `t` is remapped through `0.5 - 0.5 * cos(t * π)` and then passed to
    /// [`Quaternion::lerp_unclamped`].
    pub fn slerp_unclamped(a: Self, b: Self, t: f64) -> Self {
        let eased = -(t * PI).cos() * 0.5 + 0.5;
        Self::lerp_unclamped(a, b, eased)
    }

    /// Returns the angle in degrees between two rotations.
    ///
    /// Both inputs are expected to be unit quaternions. The dot product is
    /// clamped to `[-1, 1]` so rounding noise cannot produce NaN.
    pub fn angle(a: Self, b: Self) -> f64 {
        let dot = a.dot(b).clamp(-1.0, 1.0);
        radians_to_degrees(2.0 * dot.acos())
    }

    /// Rotates `from` towards `to`, by at most `max_degrees_delta` degrees.
    ///
    /// The step is taken along the same normalized chord as [`Quaternion::lerp`].
    /// A negative delta leaves `from` where it is.
    pub fn rotate_towards(from: Self, to: Self, max_degrees_delta: f64) -> Self {
        let from = from.normalized();
        let to = to.normalized();
        let angle = Self::angle(from, to);
        let ratio = if angle > max_degrees_delta {
            max_degrees_delta / angle
        } else {
            1.0
        };
        Self::lerp(from, to, ratio)
    }

    /// Rotates `from` all the way to `to`. Returns `to`, normalized.
    #[inline]
    pub fn rotate_towards_unbounded(from: Self, to: Self) -> Self {
        Self::lerp(from, to, 1.0)
    }
}
