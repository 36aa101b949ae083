//! # IMD Product Record
//!
//! The value type reported by the enumerator: one signed multiplier per
//! transmit carrier plus the resulting product frequency. Frequencies are
//! in whatever unit the carriers were given in (MHz in, MHz out).

use serde::{Deserialize, Serialize};

/// A single intermodulation product.
///
/// `coefficients[k]` is the signed multiplier applied to carrier `k`; the
/// sum of their absolute values is the distortion order of the product.
/// The frequency is the plain weighted sum of the carrier frequencies and
/// may be zero or negative for strongly subtractive combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImdProduct {
    /// Signed multiplier per carrier, index-aligned with the transmit list.
    pub coefficients: Vec<i32>,
    /// Product frequency, same unit as the transmit carriers.
    pub frequency: f64,
}

impl ImdProduct {
    /// Distortion order of this product: sum of |m_k|.
    pub fn order(&self) -> usize {
        self.coefficients
            .iter()
            .map(|c| c.unsigned_abs() as usize)
            .sum()
    }

    /// Number of carriers participating (non-zero multiplier count).
    ///
    /// Always at least 2: single-carrier harmonics are excluded by the
    /// enumerator.
    pub fn carrier_count(&self) -> usize {
        self.coefficients.iter().filter(|&&c| c != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_sums_absolute_multipliers() {
        let p = ImdProduct {
            coefficients: vec![2, -1],
            frequency: 922.8,
        };
        assert_eq!(p.order(), 3);

        let p = ImdProduct {
            coefficients: vec![3, 0, -2],
            frequency: 12.5,
        };
        assert_eq!(p.order(), 5);
    }

    #[test]
    fn test_carrier_count_ignores_zero_multipliers() {
        let p = ImdProduct {
            coefficients: vec![2, 0, -1, 0],
            frequency: 1.0,
        };
        assert_eq!(p.carrier_count(), 2);
    }

    #[test]
    fn test_serializes_with_named_fields() {
        let p = ImdProduct {
            coefficients: vec![2, -1],
            frequency: 4.0,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"coefficients\""));
        assert!(json.contains("\"frequency\""));
    }
}
