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

//! # Quatra Core
//!
//! Quaternion rotations for a left-handed coordinate system with left-hand-thread
//! rotations, mirroring the rotation API of common game engines.
//!
//! The crate exposes a single value type, [`Quaternion`], together with the
//! [`Vec3`] direction type it rotates. Every public angle is expressed in
//! **degrees**; radians only appear internally.
//!
//! ```
//! use quatra_core::{Quaternion, Vec3};
//!
//! let q = Quaternion::euler(0.0, 90.0, 0.0);
//! let v = q * Vec3::Z;
//! assert!((v.x - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod math;

pub use error::{QuatError, Result};
pub use math::{EulerSettings, Operand, Product, Quaternion, Vec3};
