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

//! Tunable parameters for the conversions that have to make a numerical judgement call.

use super::GIMBAL_LOCK_TOLERANCE;

/// Configuration for [`Quaternion::euler_angles_with`](super::Quaternion::euler_angles_with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerSettings {
    /// How close the sine of the pitch (rotation about X) must be to `±1` for the
    /// orientation to be treated as gimbal-locked.
    ///
    /// Inside this band the yaw is forced to zero and the whole remaining
    /// rotation is reported as roll.
    pub gimbal_lock_tolerance: f64,
}

impl Default for EulerSettings {
    fn default() -> Self {
        Self {
            gimbal_lock_tolerance: GIMBAL_LOCK_TOLERANCE,
        }
    }
}

impl EulerSettings {
    /// Returns settings with the given gimbal-lock tolerance.
    pub fn with_gimbal_lock_tolerance(tolerance: f64) -> Self {
        Self {
            gimbal_lock_tolerance: tolerance,
        }
    }
}
