//! Set of the dimension units understood by the engine, along with
//! conversion rules to go from one to another easily.
//!
//! The engine itself only ever manipulates points: items are measured by the
//! caller and handed over with their widths already resolved. Millimeters
//! are provided for the convenience of callers that think in paper sizes,
//! with 1 in = 72.27 pt = 2.54 cm.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, Sub, SubAssign};
use std::{f64, fmt};

use num_traits::identities::Zero;
use serde::{Deserialize, Serialize};

/// Measure of what is supposed to be an infinite length.
///
/// A target width of this value degenerates the engine into breaking at
/// forced penalties only.
pub const PLUS_INFINITY: Pt = Pt(f64::INFINITY);

/// Points.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pt(pub f64);

/// Millimeters.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mm(pub f64);

impl fmt::Debug for Pt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} pt", self.0)
    }
}

impl fmt::Debug for Mm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

macro_rules! impl_operators {
    ($the_type: ty, $constructor: expr) => {
        impl Add for $the_type {
            type Output = $the_type;

            fn add(self, other: $the_type) -> $the_type {
                $constructor(self.0 + other.0)
            }
        }

        impl AddAssign for $the_type {
            fn add_assign(&mut self, other: $the_type) {
                self.0 += other.0;
            }
        }

        impl Sub for $the_type {
            type Output = $the_type;

            fn sub(self, other: $the_type) -> $the_type {
                $constructor(self.0 - other.0)
            }
        }

        impl SubAssign for $the_type {
            fn sub_assign(&mut self, other: $the_type) {
                self.0 -= other.0;
            }
        }

        impl Div for $the_type {
            type Output = $the_type;

            fn div(self, other: $the_type) -> $the_type {
                $constructor(self.0 / other.0)
            }
        }

        impl DivAssign for $the_type {
            fn div_assign(&mut self, other: $the_type) {
                self.0 /= other.0;
            }
        }

        impl Mul<f64> for $the_type {
            type Output = $the_type;

            fn mul(self, rhs: f64) -> $the_type {
                $constructor(self.0 * rhs)
            }
        }

        impl Mul<$the_type> for f64 {
            type Output = $the_type;

            fn mul(self, rhs: $the_type) -> $the_type {
                $constructor(self * rhs.0)
            }
        }

        impl PartialOrd for $the_type {
            fn partial_cmp(&self, other: &$the_type) -> Option<Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }
    };
}

impl_operators!(Pt, Pt);
impl_operators!(Mm, Mm);

impl Zero for Pt {
    fn zero() -> Self {
        Pt(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt((72.27 / 25.4) * mm.0)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm((25.4 / 72.27) * pt.0)
    }
}

/// Compares two float numbers to check if they're close enough to be
/// considered equal.
///
/// Inspired by [this post](https://users.rust-lang.org/t/assert-eq-for-float-numbers/7034/3).
///
/// # Examples
///
/// ```
/// # use parbreak::units::nearly_equal;
/// assert_eq!(nearly_equal(3.0, 2.99999), true);
/// assert_eq!(nearly_equal(4.0, 3.999), false);
/// ```
pub fn nearly_equal(a: f64, b: f64) -> bool {
    let abs_a = a.abs();
    let abs_b = b.abs();
    let diff = (a - b).abs();

    if a == b {
        // Handle infinities.
        true
    } else if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        // One of a or b is zero (or both are extremely close to it,) use absolute error.
        diff < (f64::EPSILON * f64::MIN_POSITIVE)
    } else {
        // Use relative error.
        (diff / f64::min(abs_a + abs_b, f64::MAX)) < 10e-5
    }
}
