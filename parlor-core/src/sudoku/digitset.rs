use static_assertions::const_assert;

use super::grid::Digit;

/// Bitset over the nine sudoku digits, used for duplicate scans.
#[derive(Copy, Clone, Debug)]
pub(crate) struct DigitSet(u16);

#[rustfmt::skip]
impl DigitSet {
    // Bits 1 through 9; bit 0 stays clear so a digit indexes its own bit.
    const ALL_DIGITS_MASK: u16 = 0b0000_0011_1111_1110;
}

const_assert!(DigitSet::ALL_DIGITS_MASK.count_ones() == 9);

#[allow(clippy::multiple_inherent_impl)]
impl DigitSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn full() -> Self {
        Self(Self::ALL_DIGITS_MASK)
    }

    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::get_mask(digit);
    }

    pub fn remove(&mut self, digit: Digit) {
        self.0 &= Self::ALL_DIGITS_MASK & !Self::get_mask(digit);
    }

    pub fn contains(self, digit: Digit) -> bool {
        (self.0 & Self::get_mask(digit)) > 0
    }

    #[inline]
    fn get_mask(digit: Digit) -> u16 {
        1_u16 << (digit as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_test() {
        let mut digitset = DigitSet::full();

        assert_eq!(digitset.count(), 9);

        assert!(digitset.contains(Digit::Five));
        digitset.remove(Digit::Five);
        assert!(!digitset.contains(Digit::Five));
        assert_eq!(digitset.count(), 8);
    }

    #[test]
    fn insert_test() {
        let mut digitset = DigitSet::empty();
        assert_eq!(digitset.count(), 0);

        digitset.insert(Digit::One);
        digitset.insert(Digit::Nine);
        digitset.insert(Digit::Nine);

        assert_eq!(digitset.count(), 2);
        assert!(digitset.contains(Digit::One));
        assert!(digitset.contains(Digit::Nine));
        assert!(!digitset.contains(Digit::Two));
    }
}
