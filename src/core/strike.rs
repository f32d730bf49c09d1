use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::OverlayResult;

/// Open-interest snapshot for one strike price.
///
/// OI values are drawn by magnitude, so negative inputs are tolerated. Change
/// values keep their sign: it selects the gain/loss colour of the change bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeRecord {
    pub price: f64,
    #[serde(default)]
    pub ce: f64,
    #[serde(default)]
    pub pe: f64,
    #[serde(
        default,
        rename = "changeInCE",
        alias = "changeInCe",
        alias = "change_in_ce"
    )]
    pub change_in_ce: f64,
    #[serde(
        default,
        rename = "changeInPE",
        alias = "changeInPe",
        alias = "change_in_pe"
    )]
    pub change_in_pe: f64,
}

impl StrikeRecord {
    #[must_use]
    pub fn new(price: f64, ce: f64, pe: f64, change_in_ce: f64, change_in_pe: f64) -> Self {
        Self {
            price,
            ce,
            pe,
            change_in_ce,
            change_in_pe,
        }
    }

    /// Builds a record from decimal option-chain values.
    pub fn from_decimals(
        price: Decimal,
        ce: Decimal,
        pe: Decimal,
        change_in_ce: Decimal,
        change_in_pe: Decimal,
    ) -> OverlayResult<Self> {
        Ok(Self {
            price: decimal_to_f64(price, "price")?,
            ce: decimal_to_f64(ce, "ce")?,
            pe: decimal_to_f64(pe, "pe")?,
            change_in_ce: decimal_to_f64(change_in_ce, "changeInCE")?,
            change_in_pe: decimal_to_f64(change_in_pe, "changeInPE")?,
        })
    }

    /// Returns `true` when every field is a finite number.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.price.is_finite()
            && self.ce.is_finite()
            && self.pe.is_finite()
            && self.change_in_ce.is_finite()
            && self.change_in_pe.is_finite()
    }

    /// Largest absolute value among the four OI fields.
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        self.ce
            .abs()
            .max(self.pe.abs())
            .max(self.change_in_ce.abs())
            .max(self.change_in_pe.abs())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::StrikeRecord;

    #[test]
    fn max_magnitude_uses_absolute_values() {
        let record = StrikeRecord::new(100.0, 10.0, -40.0, 5.0, -12.0);
        assert_eq!(record.max_magnitude(), 40.0);
    }

    #[test]
    fn non_finite_fields_are_not_well_formed() {
        assert!(StrikeRecord::new(100.0, 1.0, 2.0, 3.0, 4.0).is_well_formed());
        assert!(!StrikeRecord::new(f64::NAN, 1.0, 2.0, 3.0, 4.0).is_well_formed());
        assert!(!StrikeRecord::new(100.0, f64::INFINITY, 2.0, 3.0, 4.0).is_well_formed());
    }

    #[test]
    fn decimal_constructor_converts_all_fields() {
        let record = StrikeRecord::from_decimals(
            Decimal::new(2_500_050, 2),
            Decimal::from(4_500),
            Decimal::from(4_200),
            Decimal::from(200),
            Decimal::from(-170),
        )
        .expect("decimal record");
        assert!((record.price - 25_000.5).abs() <= 1e-9);
        assert_eq!(record.change_in_pe, -170.0);
    }

    #[test]
    fn serde_accepts_host_field_names() {
        let record: StrikeRecord = serde_json::from_str(
            r#"{"price":25000,"ce":4500,"pe":4200,"changeInCe":200,"change_in_pe":-170}"#,
        )
        .expect("parse record");
        assert_eq!(record, StrikeRecord::new(25_000.0, 4_500.0, 4_200.0, 200.0, -170.0));

        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"changeInCE\":200.0"));
    }
}
