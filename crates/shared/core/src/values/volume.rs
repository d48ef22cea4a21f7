use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Integer count of units (shares); operators saturate at the `i64` bounds
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Volume(i64);

impl Volume {
    pub const ZERO: Volume = Volume(0);

    /// Create a volume from a float, rounding to the nearest whole unit
    pub fn new(units: f64) -> Self {
        Self(units.round() as i64)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    pub const fn units(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Volume {
    type Output = Volume;

    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Volume {
    fn add_assign(&mut self, rhs: Volume) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Volume {
    fn sub_assign(&mut self, rhs: Volume) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}
