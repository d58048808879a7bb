/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::Dimension;

/// A unit with a fixed symbol and a fixed position in the
/// prime-rational encoding.
pub trait NamedUnit: Sized + Copy + 'static {
    const LIST: &'static [Self];

    fn symbol(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Numerator and denominator of the encoded unit.
    fn ratio(&self) -> (u64, u64);

    fn dimension(&self) -> Dimension {
        let (num, den) = self.ratio();
        Dimension::from_reduced(num, den)
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::LIST.iter().copied().find(|u| u.symbol() == symbol)
    }

    fn from_ratio(num: u64, den: u64) -> Option<Self> {
        Self::LIST.iter().copied().find(|u| u.ratio() == (num, den))
    }
}
