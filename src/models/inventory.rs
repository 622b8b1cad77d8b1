use serde::{Deserialize, Serialize};

use crate::utils::constants::LOW_STOCK_THRESHOLD;

/// Línea de inventario. Endpoint y cache propios, independientes del
/// catálogo de productos: el backend no define cuál de los dos manda si
/// difieren, así que aquí tampoco se reconcilian.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    In,
}

impl InventoryItem {
    pub fn stock_level(&self) -> StockLevel {
        if self.quantity == 0 {
            StockLevel::Out
        } else if self.quantity <= LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::In
        }
    }
}

/// Valor total del inventario (precio x unidades)
pub fn inventory_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(|i| i.price * i.quantity as f64).sum()
}

pub fn total_units(items: &[InventoryItem]) -> u32 {
    items.iter().map(|i| i.quantity).sum()
}

pub fn low_stock_count(items: &[InventoryItem]) -> usize {
    items
        .iter()
        .filter(|i| i.quantity <= LOW_STOCK_THRESHOLD)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("item-{}", id),
            category: "Electronics".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_stock_level() {
        assert_eq!(item("a", 1.0, 0).stock_level(), StockLevel::Out);
        assert_eq!(item("b", 1.0, 10).stock_level(), StockLevel::Low);
        assert_eq!(item("c", 1.0, 11).stock_level(), StockLevel::In);
    }

    #[test]
    fn test_agregados() {
        let items = vec![item("a", 10.0, 3), item("b", 2.5, 0), item("c", 1.0, 40)];
        assert_eq!(inventory_value(&items), 70.0);
        assert_eq!(total_units(&items), 43);
        assert_eq!(low_stock_count(&items), 2);
    }
}
