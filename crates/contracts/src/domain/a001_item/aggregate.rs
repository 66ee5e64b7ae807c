use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i32);

impl ItemId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for ItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(ItemId::new)
            .map_err(|e| format!("Invalid item id: {}", e))
    }
}

// ============================================================================
// Catalog Item
// ============================================================================

/// One sellable catalog entry. The catalog service is the source of truth;
/// the order screen treats these records as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

/// Outgoing body for item create/update requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Name must not be blank")]
    BlankName,
    #[error("Price must be a positive amount")]
    NonPositivePrice,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Rejects a draft before any network call is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_from_api_json() {
        let item: Item = serde_json::from_str(r#"{"id":7,"name":"Coffee","price":9.5}"#)
            .expect("valid item json");
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.name, "Coffee");
        assert_eq!(item.price, 9.5);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let result = serde_json::from_str::<Item>(r#"{"id":"x","name":"Coffee"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_validation() {
        assert!(ItemDraft::new("Coffee", 9.5).validate().is_ok());
        assert_eq!(
            ItemDraft::new("   ", 9.5).validate(),
            Err(ValidationError::BlankName)
        );
        assert_eq!(
            ItemDraft::new("Coffee", 0.0).validate(),
            Err(ValidationError::NonPositivePrice)
        );
        assert_eq!(
            ItemDraft::new("Coffee", -1.0).validate(),
            Err(ValidationError::NonPositivePrice)
        );
        assert_eq!(
            ItemDraft::new("Coffee", f64::NAN).validate(),
            Err(ValidationError::NonPositivePrice)
        );
    }

    #[test]
    fn test_id_string_round_trip() {
        let id = ItemId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(ItemId::from_string("42"), Ok(id));
        assert!(ItemId::from_string("not-a-number").is_err());
    }
}
