use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub user_id: String,
    pub payment_id: String,
    pub payment_amount: Decimal,
    #[serde(deserialize_with = "card_present_flag")]
    pub card_present: bool,
    pub created_at: String,
}

impl TransactionRecord {
    /// Compares the whole-unit part of the amount against an integer
    /// threshold, so e.g. 100.99 still counts as at most 100.
    pub fn amount_at_most(&self, threshold: i64) -> bool {
        self.payment_amount.trunc() <= Decimal::from(threshold)
    }
}

/// The card-present field carries a truthy token such as "TRUE" when the
/// card was swiped and is left empty otherwise.
fn card_present_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let field = String::deserialize(deserializer)?;
    Ok(!field.trim().is_empty())
}
