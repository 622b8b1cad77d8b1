// ============================================================================
// SELLER STORE - snapshot del estado de la sesión del vendedor
// ============================================================================
// Cinco slots independientes: catálogo, pedidos, inventario, perfil e
// ingresos. Ningún fetch bloquea a otro y el fallo de uno no afecta al
// resto. El catálogo y el inventario son contextos separados a propósito:
// el backend no define cuál manda si difieren y aquí no se reconcilian.
// ============================================================================

use crate::models::{InventoryItem, Order, Product, RevenueSummary, SellerProfile};
use crate::stores::resource::ResourceSlot;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SellerStore {
    /// Token de la sesión activa. None = sin autenticar: los fetches de
    /// recursos protegidos fallan con AuthMissing sin tocar la red.
    pub token: Option<String>,
    pub products: ResourceSlot<Vec<Product>>,
    pub orders: ResourceSlot<Vec<Order>>,
    pub inventory: ResourceSlot<Vec<InventoryItem>>,
    pub profile: ResourceSlot<SellerProfile>,
    pub revenue: ResourceSlot<RevenueSummary>,
}

impl SellerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puebla la sesión desde el token persistido, una sola vez al
    /// arrancar. La ausencia de token es el caso normal y silencioso.
    pub fn init_session(&mut self, stored: Option<String>) {
        self.token = stored.filter(|t| !t.is_empty());
    }

    /// Sobrescribe el token (login). No dispara refetches: eso es decisión
    /// explícita de quien llama.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Logout en memoria. Los caches de recursos NO se tocan: el dato
    /// viejo puede seguir visible hasta el próximo refresh o recarga.
    pub fn clear_session(&mut self) {
        self.token = None;
    }

    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    // ------------------------------------------------------------------
    // Ediciones SOLO de vista local del catálogo. No hay llamada al
    // backend detrás: se pierden en el siguiente fetch_products.
    // ------------------------------------------------------------------

    /// Quita un producto de la vista local. Devuelve true si existía.
    pub fn remove_product_local(&mut self, id: &str) -> bool {
        match self.products.data() {
            Some(list) => {
                let mut updated = list.clone();
                let before = updated.len();
                updated.retain(|p| p.id != id);
                let removed = updated.len() < before;
                if removed {
                    self.replace_products_local(updated);
                }
                removed
            }
            None => false,
        }
    }

    /// Duplica un producto al frente de la vista local con un id nuevo
    /// generado por el caller. Devuelve true si el original existía.
    pub fn clone_product_local(&mut self, id: &str, new_id: String) -> bool {
        match self.products.data() {
            Some(list) => match list.iter().find(|p| p.id == id) {
                Some(original) => {
                    let mut copy = original.clone();
                    copy.id = new_id;
                    copy.name = format!("{} (Copy)", copy.name);
                    let mut updated = list.clone();
                    updated.insert(0, copy);
                    self.replace_products_local(updated);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    // Reemplaza la lista local pasando por el slot, para que la edición
    // quede ordenada frente a fetches en vuelo (un fetch emitido después
    // de la edición la pisará, que es exactamente el contrato: efímera).
    fn replace_products_local(&mut self, updated: Vec<Product>) {
        let seq = self.products.begin_fetch();
        let now = chrono::Utc::now().timestamp();
        self.products.apply(seq, Ok(updated), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiError;
    use crate::stores::resource::SlotStatus;

    fn producto(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("producto-{}", id),
            description: String::new(),
            price: 10.0,
            category: "Electronics".to_string(),
            sub_category: String::new(),
            quantity: Some(5),
            sizes: None,
            best_seller: false,
            image: vec![],
            created_at: None,
        }
    }

    fn store_con_productos(ids: &[&str]) -> SellerStore {
        let mut store = SellerStore::new();
        let seq = store.products.begin_fetch();
        store
            .products
            .apply(seq, Ok(ids.iter().map(|id| producto(id)).collect()), 100);
        store
    }

    #[test]
    fn test_init_session_con_token_persistido() {
        let mut store = SellerStore::new();
        store.init_session(Some("jwt-abc".to_string()));
        assert_eq!(store.token.as_deref(), Some("jwt-abc"));
        assert!(store.has_session());
    }

    #[test]
    fn test_init_session_sin_token_queda_vacia() {
        let mut store = SellerStore::new();
        store.init_session(None);
        assert!(store.token.is_none());

        // Token vacío persistido cuenta como ausente
        store.init_session(Some(String::new()));
        assert!(!store.has_session());
    }

    #[test]
    fn test_clear_session_no_toca_los_caches() {
        let mut store = store_con_productos(&["p1", "p2"]);
        store.set_token("jwt-abc".to_string());

        store.clear_session();

        assert!(store.token.is_none());
        // El catálogo cacheado sobrevive al logout tal cual estaba
        let products = store.products.data().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "p1");
        assert_eq!(store.products.status(), SlotStatus::Loaded);
    }

    #[test]
    fn test_fetch_fallido_deja_los_pedidos_como_estaban() {
        use crate::models::{Order, OrderStatus};
        let mut store = SellerStore::new();
        let pedidos = vec![Order {
            id: "o1".to_string(),
            amount: 99.0,
            status: OrderStatus::Packing,
            address: None,
            items: vec![],
            date: 0,
            payment: true,
        }];
        let seq = store.orders.begin_fetch();
        store.orders.apply(seq, Ok(pedidos.clone()), 100);

        let seq = store.orders.begin_fetch();
        store
            .orders
            .apply(seq, Err(ApiError::Network("sin red".to_string())), 200);

        assert_eq!(store.orders.data(), Some(&pedidos));
        assert_eq!(store.orders.status(), SlotStatus::StaleOnError);
    }

    #[test]
    fn test_remove_product_local() {
        let mut store = store_con_productos(&["p1", "p2"]);
        assert!(store.remove_product_local("p1"));
        assert!(!store.remove_product_local("no-existe"));

        let products = store.products.data().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p2");
    }

    #[test]
    fn test_clone_product_local_inserta_al_frente() {
        let mut store = store_con_productos(&["p1", "p2"]);
        assert!(store.clone_product_local("p2", "nuevo-id".to_string()));

        let products = store.products.data().unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "nuevo-id");
        assert_eq!(products[0].name, "producto-p2 (Copy)");
        // El original sigue en su sitio
        assert_eq!(products[2].id, "p2");
    }

    #[test]
    fn test_edicion_local_es_pisada_por_fetch_posterior() {
        let mut store = store_con_productos(&["p1"]);
        store.remove_product_local("p1");
        assert!(store.products.data().unwrap().is_empty());

        // Un fetch emitido después de la edición la sobreescribe entera
        let seq = store.products.begin_fetch();
        store.products.apply(seq, Ok(vec![producto("p1")]), 300);
        assert_eq!(store.products.data().unwrap().len(), 1);
    }
}
