//! Scalar element types carried in engine lanes.
//!
//! `DistScalar` covers the distance lanes (f32 and `half::f16`) and
//! `IdxScalar` the paired index lanes (u32 and u16). The portable engine is
//! written against these traits; the hardware engines only use the
//! conversions at their boundaries.

use half::f16;

pub trait DistScalar: Copy + PartialOrd + Send + Sync + std::fmt::Debug + 'static {
    const ZERO: Self;
    /// Largest finite value, used as the "empty level" sentinel.
    const MAX: Self;

    fn from_f32(v: f32) -> Self;
    fn to_f32(self) -> f32;

    fn add(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
    /// `self * b + acc`
    fn mul_add(self, b: Self, acc: Self) -> Self;
    /// `acc - self * b`
    fn neg_mul_add(self, b: Self, acc: Self) -> Self;

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl DistScalar for f32 {
    const ZERO: Self = 0.0;
    const MAX: Self = f32::MAX;

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        self + other
    }

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        self * other
    }

    // Unfused on purpose: `f32::mul_add` lowers to a libm call on targets
    // without FMA.
    #[inline(always)]
    fn mul_add(self, b: Self, acc: Self) -> Self {
        self * b + acc
    }

    #[inline(always)]
    fn neg_mul_add(self, b: Self, acc: Self) -> Self {
        acc - self * b
    }
}

// f16 arithmetic is done in f32 and rounded once per operation.
impl DistScalar for f16 {
    const ZERO: Self = f16::ZERO;
    const MAX: Self = f16::MAX;

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }

    #[inline(always)]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        f16::from_f32(self.to_f32() + other.to_f32())
    }

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        f16::from_f32(self.to_f32() * other.to_f32())
    }

    #[inline(always)]
    fn mul_add(self, b: Self, acc: Self) -> Self {
        f16::from_f32(self.to_f32() * b.to_f32() + acc.to_f32())
    }

    #[inline(always)]
    fn neg_mul_add(self, b: Self, acc: Self) -> Self {
        f16::from_f32(acc.to_f32() - self.to_f32() * b.to_f32())
    }
}

pub trait IdxScalar: Copy + Eq + Send + Sync + std::fmt::Debug + 'static {
    const ZERO: Self;
    /// Sentinel id carried by empty levels.
    const MAX: Self;

    /// Truncating conversion; callers keep ids below `MAX`.
    fn from_usize(v: usize) -> Self;
    fn to_usize(self) -> usize;
    fn wrapping_add(self, other: Self) -> Self;
}

impl IdxScalar for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;

    #[inline(always)]
    fn from_usize(v: usize) -> Self {
        v as u32
    }

    #[inline(always)]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn wrapping_add(self, other: Self) -> Self {
        u32::wrapping_add(self, other)
    }
}

impl IdxScalar for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;

    #[inline(always)]
    fn from_usize(v: usize) -> Self {
        v as u16
    }

    #[inline(always)]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn wrapping_add(self, other: Self) -> Self {
        u16::wrapping_add(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f16_rounds_once_per_op() {
        let a = f16::from_f32(1.5);
        let b = f16::from_f32(2.0);
        let acc = f16::from_f32(0.25);
        assert_eq!(a.mul_add(b, acc).to_f32(), 3.25);
        assert_eq!(a.neg_mul_add(b, acc).to_f32(), -2.75);
    }

    #[test]
    fn test_min_max_prefer_first_on_ties() {
        assert_eq!(DistScalar::min(1.0f32, 1.0), 1.0);
        assert_eq!(DistScalar::max(-0.0f32, 0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(DistScalar::min(3.0f32, 2.0), 2.0);
    }

    #[test]
    fn test_index_truncation() {
        assert_eq!(<u16 as IdxScalar>::from_usize(65_536 + 7), 7);
        assert_eq!(<u32 as IdxScalar>::from_usize(65_536), 65_536);
        assert_eq!(u16::MAX.wrapping_add(1), 0);
    }
}
