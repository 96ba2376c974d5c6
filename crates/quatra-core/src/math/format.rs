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

//! Human-readable rendering of quaternions and vectors.

use std::fmt;

use super::{Quaternion, Vec3, DEFAULT_DISPLAY_DIGITS};

impl Quaternion {
    /// Renders the quaternion as `"(x, y, z, w)"` with `digits` decimal places.
    pub fn to_string_with_digits(&self, digits: usize) -> String {
        format!("{self:.digits$}")
    }
}

impl fmt::Display for Quaternion {
    /// Formats as `(x, y, z, w)`, using the formatter precision if one is given
    /// and [`DEFAULT_DISPLAY_DIGITS`] otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS);
        write!(
            f,
            "({:.digits$}, {:.digits$}, {:.digits$}, {:.digits$})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS);
        write!(
            f,
            "({:.digits$}, {:.digits$}, {:.digits$})",
            self.x, self.y, self.z
        )
    }
}
