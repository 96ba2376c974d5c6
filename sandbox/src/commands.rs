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

//! Subcommands of the sandbox binary. Each one evaluates a single operation and
//! renders the result as text.

use anyhow::{Context, Result};
use clap::Subcommand;
use quatra_core::{Product, Quaternion, Vec3};

use crate::parse;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a rotation from Euler angles in degrees (z, then x, then y)
    Euler {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        #[arg(allow_hyphen_values = true)]
        z: f64,
    },
    /// Print the Euler angles of a quaternion given as x,y,z,w
    Angles {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        q: Quaternion,
    },
    /// Build a rotation of ANGLE degrees around AXIS (x,y,z)
    AngleAxis {
        #[arg(allow_hyphen_values = true)]
        angle: f64,
        #[arg(allow_hyphen_values = true, value_parser = parse::vector)]
        axis: Vec3,
    },
    /// Split a quaternion into an angle and an axis
    ToAngleAxis {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        q: Quaternion,
    },
    /// Rotation turning direction FROM onto TO
    FromTo {
        #[arg(allow_hyphen_values = true, value_parser = parse::vector)]
        from: Vec3,
        #[arg(allow_hyphen_values = true, value_parser = parse::vector)]
        to: Vec3,
    },
    /// Rotation looking along FORWARD
    Look {
        #[arg(allow_hyphen_values = true, value_parser = parse::vector)]
        forward: Vec3,
        /// Up direction
        #[arg(long, allow_hyphen_values = true, value_parser = parse::vector, default_value = "0,1,0")]
        up: Vec3,
    },
    /// Multiply a quaternion by another quaternion (4 components) or rotate a vector (3 components)
    Mul {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        lhs: Quaternion,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Normalize a quaternion
    Normalize {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        q: Quaternion,
    },
    /// Invert a quaternion
    Inverse {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        q: Quaternion,
    },
    /// Angle in degrees between two rotations
    Angle {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        a: Quaternion,
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        b: Quaternion,
    },
    /// Linear interpolation between two rotations
    Lerp {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        a: Quaternion,
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        b: Quaternion,
        #[arg(allow_hyphen_values = true)]
        t: f64,
        /// Do not clamp t to [0, 1]
        #[arg(long)]
        unclamped: bool,
    },
    /// Eased interpolation between two rotations
    Slerp {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        a: Quaternion,
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        b: Quaternion,
        #[arg(allow_hyphen_values = true)]
        t: f64,
        /// Do not clamp t to [0, 1]
        #[arg(long)]
        unclamped: bool,
    },
    /// Step FROM towards TO
    Towards {
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        from: Quaternion,
        #[arg(allow_hyphen_values = true, value_parser = parse::quaternion)]
        to: Quaternion,
        /// Largest step in degrees; the full rotation when omitted
        #[arg(long, allow_hyphen_values = true)]
        max_degrees: Option<f64>,
    },
}

impl Command {
    /// Evaluates the command and renders the result with `digits` decimals.
    pub fn run(&self, digits: usize) -> Result<String> {
        let quat = |q: Quaternion| q.to_string_with_digits(digits);
        let vec3 = |v: Vec3| format!("{v:.digits$}");

        let output = match *self {
            Command::Euler { x, y, z } => quat(Quaternion::euler(x, y, z)),
            Command::Angles { q } => vec3(q.euler_angles()),
            Command::AngleAxis { angle, axis } => quat(Quaternion::angle_axis(angle, axis)),
            Command::ToAngleAxis { q } => {
                let (angle, axis) = q
                    .try_to_angle_axis()
                    .context("cannot split rotation into angle and axis")?;
                format!("{angle:.digits$} around {}", vec3(axis))
            }
            Command::FromTo { from, to } => quat(Quaternion::from_to_rotation(from, to)),
            Command::Look { forward, up } => {
                quat(Quaternion::look_rotation_with_up(forward, up))
            }
            Command::Mul { lhs, ref rhs } => {
                let rhs = parse::components(rhs)?;
                match lhs
                    .apply_slice(&rhs)
                    .context("right-hand side must be a quaternion or a vector")?
                {
                    Product::Quaternion(q) => quat(q),
                    Product::Vector(v) => vec3(v),
                }
            }
            Command::Normalize { q } => quat(q.try_normalized().context("cannot normalize")?),
            Command::Inverse { q } => quat(q.inverse()),
            Command::Angle { a, b } => {
                let angle = Quaternion::angle(a, b);
                format!("{angle:.digits$}")
            }
            Command::Lerp { a, b, t, unclamped } => {
                if unclamped {
                    quat(Quaternion::lerp_unclamped(a, b, t))
                } else {
                    quat(Quaternion::lerp(a, b, t))
                }
            }
            Command::Slerp { a, b, t, unclamped } => {
                if unclamped {
                    quat(Quaternion::slerp_unclamped(a, b, t))
                } else {
                    quat(Quaternion::slerp(a, b, t))
                }
            }
            Command::Towards {
                from,
                to,
                max_degrees,
            } => match max_degrees {
                Some(max) => quat(Quaternion::rotate_towards(from, to, max)),
                None => quat(Quaternion::rotate_towards_unbounded(from, to)),
            },
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[command(subcommand)]
        command: Command,
    }

    fn run(args: &[&str], digits: usize) -> Result<String> {
        let parsed = TestArgs::try_parse_from(std::iter::once("sandbox").chain(args.iter().copied()))?;
        parsed.command.run(digits)
    }

    #[test]
    fn test_euler() {
        assert_eq!(
            run(&["euler", "30", "60", "90"], 3).unwrap(),
            "(0.500, 0.183, 0.500, 0.683)"
        );
    }

    #[test]
    fn test_angles_accepts_negative_components() {
        assert_eq!(
            run(&["angles", "-0,0,0,1"], 1).unwrap(),
            "(0.0, 0.0, 0.0)"
        );
    }

    #[test]
    fn test_mul_dispatches_on_rhs_length() {
        assert_eq!(
            run(&["mul", "0,0,0,1", "4,5,6"], 1).unwrap(),
            "(4.0, 5.0, 6.0)"
        );
        assert_eq!(
            run(&["mul", "0,0,0,1", "1,2,3,4"], 1).unwrap(),
            "(1.0, 2.0, 3.0, 4.0)"
        );
        let err = run(&["mul", "0,0,0,1", "1,2"], 1).unwrap_err();
        assert!(format!("{err:#}").contains("got 2"));
    }

    #[test]
    fn test_to_angle_axis_reports_identity() {
        assert_eq!(
            run(&["to-angle-axis", "1,1,1,1"], 2).unwrap(),
            "120.00 around (0.58, 0.58, 0.58)"
        );
        assert!(run(&["to-angle-axis", "0,0,0,1"], 2).is_err());
    }

    #[test]
    fn test_towards_without_limit_reaches_target() {
        assert_eq!(
            run(&["towards", "1,2,3,4", "0,0,0,2"], 2).unwrap(),
            "(0.00, 0.00, 0.00, 1.00)"
        );
    }

    #[test]
    fn test_look_with_default_up() {
        assert_eq!(
            run(&["look", "1,1,1"], 2).unwrap(),
            "(-0.28, 0.36, 0.12, 0.88)"
        );
    }
}
