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

//! Explicit dispatch for the two meanings of quaternion multiplication.
//!
//! `q * other` composes rotations when `other` is a [`Quaternion`] and rotates
//! a point when it is a [`Vec3`]. The operator impls cover statically typed
//! callers; [`Operand`] covers callers that only know the shape of their data
//! at runtime (scripting bridges, parsed input).

use super::{Quaternion, Vec3};
use crate::error::{QuatError, Result};

/// The right-hand side of a quaternion product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Another rotation, combined with the Hamilton product.
    Quaternion(Quaternion),
    /// A point or direction to rotate.
    Vector(Vec3),
}

/// The result of [`Quaternion::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    /// The composed rotation.
    Quaternion(Quaternion),
    /// The rotated vector.
    Vector(Vec3),
}

impl Product {
    /// Returns the quaternion, if this product is one.
    pub fn into_quaternion(self) -> Option<Quaternion> {
        match self {
            Product::Quaternion(q) => Some(q),
            Product::Vector(_) => None,
        }
    }

    /// Returns the vector, if this product is one.
    pub fn into_vector(self) -> Option<Vec3> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Quaternion(_) => None,
        }
    }

    /// Returns the components as a flat list: four for a quaternion, three for a vector.
    pub fn to_vec(self) -> Vec<f64> {
        match self {
            Product::Quaternion(q) => q.to_array().to_vec(),
            Product::Vector(v) => v.to_array().to_vec(),
        }
    }
}

impl From<Quaternion> for Operand {
    fn from(q: Quaternion) -> Self {
        Operand::Quaternion(q)
    }
}

impl From<Vec3> for Operand {
    fn from(v: Vec3) -> Self {
        Operand::Vector(v)
    }
}

impl TryFrom<&[f64]> for Operand {
    type Error = QuatError;

    /// Interprets three components as a vector and four as a quaternion
    /// `(x, y, z, w)`. Any other length is rejected.
    fn try_from(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y, z] => Ok(Operand::Vector(Vec3::new(x, y, z))),
            [x, y, z, w] => Ok(Operand::Quaternion(Quaternion::new(x, y, z, w))),
            _ => Err(QuatError::UnsupportedOperand {
                len: components.len(),
            }),
        }
    }
}

impl Quaternion {
    /// Multiplies by an operand whose kind is only known at runtime.
    pub fn apply(self, rhs: impl Into<Operand>) -> Product {
        match rhs.into() {
            Operand::Quaternion(q) => Product::Quaternion(self * q),
            Operand::Vector(v) => Product::Vector(self * v),
        }
    }

    /// Multiplies by a raw component slice, see [`Operand`]'s `TryFrom<&[f64]>`.
    pub fn apply_slice(self, rhs: &[f64]) -> Result<Product> {
        Operand::try_from(rhs).map(|operand| self.apply(operand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_on_operand_kind() {
        let q = Quaternion::euler(0.0, 90.0, 0.0);
        let other = Quaternion::euler(10.0, 0.0, 0.0);

        assert_eq!(q.apply(other), Product::Quaternion(q * other));
        assert_eq!(q.apply(Vec3::Z), Product::Vector(q * Vec3::Z));
    }

    #[test]
    fn test_operand_from_slice() {
        let three: &[f64] = &[1.0, 2.0, 3.0];
        let four: &[f64] = &[1.0, 2.0, 3.0, 4.0];
        let two: &[f64] = &[1.0, 2.0];
        let empty: &[f64] = &[];

        assert_eq!(
            Operand::try_from(three),
            Ok(Operand::Vector(Vec3::new(1.0, 2.0, 3.0)))
        );
        assert_eq!(
            Operand::try_from(four),
            Ok(Operand::Quaternion(Quaternion::new(1.0, 2.0, 3.0, 4.0)))
        );
        assert_eq!(
            Operand::try_from(two),
            Err(QuatError::UnsupportedOperand { len: 2 })
        );
        assert_eq!(
            Operand::try_from(empty),
            Err(QuatError::UnsupportedOperand { len: 0 })
        );
    }

    #[test]
    fn test_apply_slice_rejects_other_shapes() {
        let q = Quaternion::IDENTITY;
        assert_eq!(
            q.apply_slice(&[0.0; 5]),
            Err(QuatError::UnsupportedOperand { len: 5 })
        );
        let product = q.apply_slice(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(product.into_vector(), Some(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(product.into_quaternion(), None);
        assert_eq!(product.to_vec(), vec![4.0, 5.0, 6.0]);
    }
}
