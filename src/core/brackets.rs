use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marginal tax bracket: `rate` applies to income above `threshold`.
///
/// The wire format is a two-element array `[rate, threshold]`, rate first.
/// Bracket tables are ordered and the order is semantic: the engine applies
/// brackets exactly as supplied (see [`crate::TaxEngine::tax_due`]), so the
/// caller conventionally lists them descending by threshold. `rate` is a
/// fraction in `[0, 1]` by caller contract and is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Decimal, Decimal)", into = "(Decimal, Decimal)")]
pub struct TaxBracket {
    pub rate: Decimal,
    pub threshold: Decimal,
}

impl TaxBracket {
    pub fn new(rate: Decimal, threshold: Decimal) -> Self {
        TaxBracket { rate, threshold }
    }
}

impl From<(Decimal, Decimal)> for TaxBracket {
    fn from((rate, threshold): (Decimal, Decimal)) -> Self {
        TaxBracket { rate, threshold }
    }
}

impl From<TaxBracket> for (Decimal, Decimal) {
    fn from(bracket: TaxBracket) -> Self {
        (bracket.rate, bracket.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_from_rate_threshold_pair() {
        let bracket: TaxBracket = serde_json::from_str("[0.35, 500000]").unwrap();
        assert_eq!(bracket.rate, dec!(0.35));
        assert_eq!(bracket.threshold, dec!(500000));
    }

    #[test]
    fn serializes_as_pair() {
        let bracket = TaxBracket::new(dec!(0.24), dec!(100000));
        let json = serde_json::to_string(&bracket).unwrap();
        assert_eq!(json, r#"["0.24","100000"]"#);
    }

    #[test]
    fn table_order_survives_deserialization() {
        let table: Vec<TaxBracket> =
            serde_json::from_str("[[0.35, 500000], [0.24, 100000], [0.1, 0]]").unwrap();
        let thresholds: Vec<Decimal> = table.iter().map(|b| b.threshold).collect();
        assert_eq!(thresholds, vec![dec!(500000), dec!(100000), dec!(0)]);
    }
}
