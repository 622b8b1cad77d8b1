// ============================================================================
// FILTROS DE LISTADOS - predicados puros para búsqueda/filtrado en cliente
// ============================================================================

use crate::models::inventory::StockLevel;
use crate::models::{InventoryItem, Order, OrderStatus, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    Low,
    Out,
    In,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Búsqueda + filtro de categoría del catálogo ("all" desactiva el filtro)
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    category: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| {
            let matches_search = search.is_empty()
                || contains_ci(&p.name, search)
                || contains_ci(&p.category, search);
            let matches_category = category == "all" || p.category == category;
            matches_search && matches_category
        })
        .collect()
}

/// Filtro del inventario: texto, categoría y nivel de stock
pub fn filter_inventory<'a>(
    items: &'a [InventoryItem],
    search: &str,
    category: &str,
    stock: StockFilter,
) -> Vec<&'a InventoryItem> {
    items
        .iter()
        .filter(|i| {
            let matches_search = search.is_empty()
                || contains_ci(&i.name, search)
                || contains_ci(&i.category, search);
            let matches_category = category == "all" || i.category == category;
            let matches_stock = match stock {
                StockFilter::All => true,
                StockFilter::Low => i.stock_level() == StockLevel::Low,
                StockFilter::Out => i.stock_level() == StockLevel::Out,
                StockFilter::In => i.stock_level() == StockLevel::In,
            };
            matches_search && matches_category && matches_stock
        })
        .collect()
}

/// Filtro de pedidos por estado y texto (id o nombre del cliente)
pub fn filter_orders<'a>(
    orders: &'a [Order],
    search: &str,
    status: Option<OrderStatus>,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| {
            let matches_status = status.map_or(true, |s| o.status == s);
            let matches_search = search.is_empty()
                || contains_ci(&o.id, search)
                || contains_ci(&o.customer_name(), search);
            matches_status && matches_search
        })
        .collect()
}

/// Categorías únicas presentes, en orden de aparición (para los selects)
pub fn unique_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    for c in categories {
        let c = c.as_ref();
        if !c.is_empty() && !seen.iter().any(|s| s == c) {
            seen.push(c.to_string());
        }
    }
    seen
}
