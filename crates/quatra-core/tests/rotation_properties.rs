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

use approx::assert_relative_eq;
use quatra_core::{Quaternion, QuatError, Vec3};

/// A deterministic spread of non-zero, non-unit quaternions.
fn samples() -> Vec<Quaternion> {
    (1..=64)
        .map(|i| {
            let t = i as f64;
            Quaternion::new(
                (t * 1.3).sin() * 2.0,
                (t * 0.7).cos(),
                (t * 2.1 + 1.0).sin() * 0.5,
                (t * 0.3).cos() + 0.1,
            )
        })
        .collect()
}

fn assert_same_rotation(a: Quaternion, b: Quaternion, epsilon: f64) {
    let a = a.normalized();
    let b = b.normalized();
    let b = if a.dot(b) < 0.0 { -b } else { b };
    assert_relative_eq!(a, b, epsilon = epsilon);
}

#[test]
fn euler_round_trip_away_from_gimbal_lock() {
    let mut checked = 0;
    for q in samples() {
        let angles = q.euler_angles();
        let pitch_sine = angles.x.to_radians().sin();
        if pitch_sine.abs() > 0.98 {
            continue;
        }
        assert_same_rotation(Quaternion::euler_vec(angles), q, 1e-9);
        checked += 1;
    }
    assert!(checked > 40, "only {checked} samples were away from gimbal lock");
}

#[test]
fn euler_round_trip_at_gimbal_lock_preserves_rotation() {
    for (yaw, roll) in [(0.0, 0.0), (35.0, 10.0), (-120.0, 75.0)] {
        for pitch in [90.0, -90.0] {
            let q = Quaternion::euler(pitch, yaw, roll);
            let angles = q.euler_angles();
            assert_eq!(angles.y, 0.0);
            assert_same_rotation(Quaternion::euler_vec(angles), q, 1e-9);
        }
    }
}

#[test]
fn euler_angles_are_wrapped_to_positive_range() {
    for q in samples() {
        let e = q.euler_angles();
        for angle in [e.x, e.y, e.z] {
            assert!((0.0..360.0).contains(&angle), "{angle} out of range");
        }
    }
}

#[test]
fn normalization_is_idempotent() {
    for q in samples() {
        let once = q.normalized();
        assert_relative_eq!(once.normalized(), once, epsilon = 1e-12);
        assert_relative_eq!(once.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn identity_is_neutral() {
    for q in samples() {
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }
}

#[test]
fn inverse_cancels_rotation() {
    for q in samples() {
        let product = q.normalized() * q.inverse().normalized();
        assert_same_rotation(product, Quaternion::IDENTITY, 1e-9);
    }
}

#[test]
fn composition_matches_sequential_rotation() {
    let v = Vec3::new(0.3, -1.0, 2.0);
    let qs = samples();
    for pair in qs.windows(2) {
        let (a, b) = (pair[0].normalized(), pair[1].normalized());
        // `a * b` rotates a vector by `b` first, then by `a`.
        assert_relative_eq!((a * b) * v, a * (b * v), epsilon = 1e-9);
    }
}

#[test]
fn interpolation_boundaries() {
    let qs = samples();
    for pair in qs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (na, nb) = (a.normalized(), b.normalized());

        assert_relative_eq!(Quaternion::lerp(a, b, 0.0), na, epsilon = 1e-12);
        assert_relative_eq!(Quaternion::lerp(a, b, 1.0), nb, epsilon = 1e-12);
        assert_relative_eq!(Quaternion::slerp(a, b, 0.0), na, epsilon = 1e-12);
        assert_relative_eq!(Quaternion::slerp(a, b, 1.0), nb, epsilon = 1e-12);

        assert_eq!(Quaternion::lerp(a, b, -3.0), Quaternion::lerp_unclamped(a, b, 0.0));
        assert_eq!(Quaternion::lerp(a, b, 7.0), Quaternion::lerp_unclamped(a, b, 1.0));
        assert_eq!(Quaternion::slerp(a, b, -0.1), Quaternion::slerp_unclamped(a, b, 0.0));
        assert_eq!(Quaternion::slerp(a, b, 1.1), Quaternion::slerp_unclamped(a, b, 1.0));
    }
}

#[test]
fn rotate_towards_never_overshoots() {
    let qs = samples();
    for pair in qs.windows(2) {
        let (from, to) = (pair[0].normalized(), pair[1].normalized());
        let total = Quaternion::angle(from, to);
        let step = Quaternion::rotate_towards(from, to, 5.0);
        assert!(Quaternion::angle(step, to) <= total + 1e-9);
    }
}

#[test]
fn reference_scenarios() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalized();
    assert_relative_eq!(q.x, 0.18257, epsilon = 1e-5);
    assert_relative_eq!(q.y, 0.36515, epsilon = 1e-5);
    assert_relative_eq!(q.z, 0.54772, epsilon = 1e-5);
    assert_relative_eq!(q.w, 0.73030, epsilon = 1e-5);

    let e = q.euler_angles();
    assert_relative_eq!(e.x, 352.34, epsilon = 0.01);
    assert_relative_eq!(e.z, 70.35, epsilon = 0.01);

    let other = Quaternion::new(4.0, 2.0, 1.0, 3.0);
    assert_eq!(Quaternion::new(1.0, 2.0, 3.0, 4.0).dot(other), 23.0);
    assert_relative_eq!(
        Quaternion::angle(q, other.normalized()),
        79.889,
        epsilon = 1e-3
    );

    let (angle, axis) = Quaternion::new(1.0, 1.0, 1.0, 1.0).normalized().to_angle_axis();
    assert_relative_eq!(angle, 120.0, epsilon = 1e-9);
    assert_relative_eq!(axis, Vec3::new(0.57735, 0.57735, 0.57735), epsilon = 1e-5);
}

#[test]
fn product_of_runtime_operands() {
    let q = Quaternion::euler(0.0, 90.0, 0.0);
    let rotated = q.apply_slice(&[0.0, 0.0, 1.0]).unwrap().into_vector().unwrap();
    assert_relative_eq!(rotated, Vec3::X, epsilon = 1e-12);

    let err = q.apply_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert_eq!(err, QuatError::UnsupportedOperand { len: 5 });
    assert!(err.to_string().contains("got 5"));
}

#[test]
fn value_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Quaternion>();
    assert_send_sync::<Vec3>();
    assert_send_sync::<quatra_core::Operand>();
    assert_send_sync::<quatra_core::QuatError>();
}
