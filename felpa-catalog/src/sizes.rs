use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Smallest sticker edge we print, in centimeters.
pub const MIN_SIZE_CM: u8 = 1;

/// Largest sticker edge we print, in centimeters.
pub const MAX_SIZE_CM: u8 = 10;

/// Sticker edge length in whole centimeters.
///
/// Out-of-range input clamps into the printable range instead of failing;
/// the calculator never rejects a request over its inputs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct StickerSize(u8);

impl StickerSize {
    pub fn new(size_cm: u8) -> Self {
        Self(size_cm.clamp(MIN_SIZE_CM, MAX_SIZE_CM))
    }

    pub fn cm(&self) -> u8 {
        self.0
    }

    /// How many stickers of this size fit on one printed sheet.
    pub fn stickers_per_sheet(&self) -> u32 {
        match self.0 {
            1 => 50,
            2 => 50,
            3 => 30,
            4 => 18,
            5 => 13,
            6 => 7,
            7 => 6,
            8 => 5,
            _ => 2,
        }
    }

    /// Margin applied on top of production cost. Two bands, nothing in
    /// between: sizes up to 7 cm carry 46%, larger ones 33%.
    pub fn margin_rate(&self) -> Decimal {
        if self.0 <= 7 {
            dec!(0.46)
        } else {
            dec!(0.33)
        }
    }
}

impl<'de> Deserialize<'de> for StickerSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::new(raw.clamp(MIN_SIZE_CM as i64, MAX_SIZE_CM as i64) as u8))
    }
}

/// Ordered sticker count.
///
/// Arbitrary numeric input normalizes on the way in: fractional counts
/// floor, negatives become zero. A zero-quantity quote is valid and prices
/// the fixed overhead only.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn from_f64(raw: f64) -> Self {
        if !raw.is_finite() || raw <= 0.0 {
            return Self(0);
        }
        let floored = raw.floor();
        if floored >= u32::MAX as f64 {
            Self(u32::MAX)
        } else {
            Self(floored as u32)
        }
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::from_f64(raw))
    }
}
