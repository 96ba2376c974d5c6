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

//! Error types reported by the fallible quaternion operations.
//!
//! Most operations in this crate are total and let IEEE floating-point semantics
//! propagate through degenerate input. The errors below are only produced by the
//! operand conversion and by the guarded `try_*` variants.

use thiserror::Error;

/// Errors produced by quaternion operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuatError {
    /// The right-hand side of a product was neither a quaternion nor a 3-vector.
    #[error("unsupported operand: expected 3 (vector) or 4 (quaternion) components, got {len}")]
    UnsupportedOperand {
        /// Number of components that were supplied.
        len: usize,
    },
    /// The quaternion (or vector) has a zero or non-finite norm and cannot be normalized.
    #[error("cannot normalize a value with norm {norm}")]
    ZeroNorm {
        /// The offending norm.
        norm: f64,
    },
    /// The rotation angle is a multiple of 360°, so the rotation axis is undefined.
    #[error("rotation axis is undefined for a rotation of {angle}°")]
    SingularAxis {
        /// Rotation angle in degrees.
        angle: f64,
    },
    /// The source and target directions are parallel or anti-parallel.
    #[error("directions are parallel (cosine {cosine}); rotation axis is undefined")]
    ParallelVectors {
        /// Cosine of the angle between the two directions.
        cosine: f64,
    },
}

/// A specialized `Result` type for quaternion operations.
pub type Result<T> = std::result::Result<T, QuatError>;
