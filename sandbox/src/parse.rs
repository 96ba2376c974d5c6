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

//! Parsing of comma-separated component lists such as `1,2,3,4`.

use anyhow::{bail, Context, Result};
use quatra_core::{Quaternion, Vec3};

/// Splits a comma-separated list into floats.
pub fn components(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .with_context(|| format!("'{part}' is not a number"))
        })
        .collect()
}

/// Parses `x,y,z,w`.
pub fn quaternion(s: &str) -> Result<Quaternion> {
    match components(s)?[..] {
        [x, y, z, w] => Ok(Quaternion::new(x, y, z, w)),
        ref other => bail!("expected 4 components (x,y,z,w), got {}", other.len()),
    }
}

/// Parses `x,y,z`.
pub fn vector(s: &str) -> Result<Vec3> {
    match components(s)?[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        ref other => bail!("expected 3 components (x,y,z), got {}", other.len()),
    }
}
