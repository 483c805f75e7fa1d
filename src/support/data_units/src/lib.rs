use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::{Add, AddAssign, Mul, Rem, Sub, SubAssign},
};

/// A quantity of bytes.
///
/// Sizes, alignments, offsets, and padding amounts are all byte counts,
/// and this wrapper keeps them from being mixed with unrelated integers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteUnits {
    units: u64,
}

impl ByteUnits {
    pub const ZERO: Self = Self { units: 0 };

    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bytes(&self) -> u64 {
        self.units
    }

    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    pub const fn is_power_of_2(&self) -> bool {
        self.units.is_power_of_two()
    }

    /// Rounds up to the next multiple of `align`, which must be a
    /// non-zero power of 2.
    pub fn align_to(&self, align: ByteUnits) -> ByteUnits {
        assert!(align.is_power_of_2());
        Self::of((self.units + align.units - 1) & !(align.units - 1))
    }

    /// Filler needed after this offset to reach the next multiple of `align`.
    pub fn padding_for(&self, align: ByteUnits) -> ByteUnits {
        self.align_to(align) - *self
    }
}

impl Add<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn add(self, rhs: ByteUnits) -> Self::Output {
        Self::of(self.units + rhs.units)
    }
}

impl AddAssign<ByteUnits> for ByteUnits {
    fn add_assign(&mut self, rhs: ByteUnits) {
        self.units += rhs.units;
    }
}

impl Sub<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn sub(self, rhs: ByteUnits) -> Self::Output {
        Self::of(self.units - rhs.units)
    }
}

impl SubAssign<ByteUnits> for ByteUnits {
    fn sub_assign(&mut self, rhs: ByteUnits) {
        self.units -= rhs.units;
    }
}

impl Mul<u64> for ByteUnits {
    type Output = ByteUnits;

    fn mul(self, rhs: u64) -> Self::Output {
        Self::of(self.units * rhs)
    }
}

impl Rem<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn rem(self, rhs: ByteUnits) -> Self::Output {
        Self::of(self.units % rhs.units)
    }
}

impl Sum for ByteUnits {
    fn sum<I: Iterator<Item = ByteUnits>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, value| total + value)
    }
}

impl Display for ByteUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.units, f)
    }
}

#[test]
fn test_align_to() {
    assert_eq!(ByteUnits::ZERO.align_to(ByteUnits::of(8)), ByteUnits::ZERO);
    assert_eq!(ByteUnits::of(1).align_to(ByteUnits::of(8)), ByteUnits::of(8));
    assert_eq!(ByteUnits::of(8).align_to(ByteUnits::of(8)), ByteUnits::of(8));
    assert_eq!(ByteUnits::of(9).align_to(ByteUnits::of(4)), ByteUnits::of(12));
    assert_eq!(ByteUnits::of(9).align_to(ByteUnits::of(1)), ByteUnits::of(9));
}

#[test]
fn test_padding_for() {
    assert_eq!(ByteUnits::of(1).padding_for(ByteUnits::of(4)), ByteUnits::of(3));
    assert_eq!(ByteUnits::of(4).padding_for(ByteUnits::of(4)), ByteUnits::ZERO);
    assert_eq!(ByteUnits::of(17).padding_for(ByteUnits::of(8)), ByteUnits::of(7));
}

#[test]
fn test_is_power_of_2() {
    assert!(!ByteUnits::ZERO.is_power_of_2());
    assert!(ByteUnits::of(1).is_power_of_2());
    assert!(ByteUnits::of(2).is_power_of_2());
    assert!(!ByteUnits::of(3).is_power_of_2());
    assert!(ByteUnits::of(8).is_power_of_2());
    assert!(!ByteUnits::of(12).is_power_of_2());
}

#[test]
fn test_sum() {
    let total: ByteUnits = [1, 4, 8, 1].into_iter().map(ByteUnits::of).sum();
    assert_eq!(total, ByteUnits::of(14));
}
