use crate::domain::a001_item::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// One row of the staged order being built. Lives only in the order screen's
/// memory; nothing is persisted until the order is submitted elsewhere.
///
/// The id is copied from the catalog item. Adding the same item twice stages
/// two separate lines with the same id, so selection and bulk removal treat
/// duplicates as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_item_starts_with_quantity_one() {
        let item = Item {
            id: ItemId(5),
            name: "Tea".to_string(),
            price: 4.25,
        };
        let line = OrderLine::from_item(&item);
        assert_eq!(line.id, ItemId(5));
        assert_eq!(line.name, "Tea");
        assert_eq!(line.price, 4.25);
        assert_eq!(line.quantity, 1);
    }
}
