use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

impl CustomerId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid customer id: {}", e))
    }
}

// ============================================================================
// Customer
// ============================================================================

/// Customer lookup record. The customer endpoint names the field `nome`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,

    #[serde(rename = "nome")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customer_wire_field() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":3,"nome":"Maria Silva"}"#).expect("valid customer json");
        assert_eq!(customer.id, CustomerId(3));
        assert_eq!(customer.name, "Maria Silva");
    }
}
