// ============================================================================
// SELLER STATE - acceso compartido al SellerStore
// ============================================================================
// Único mutador del store. Los consumidores solo ven operaciones con
// nombre (begin/apply por recurso, transiciones de sesión) y snapshots
// clonados: nunca una referencia mutable al estado crudo.
//
// Los fallos se capturan y se registran aquí; jamás escapan como panics o
// rechazos sin tratar hacia el árbol de render.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{InventoryItem, Order, Product, RevenueSummary, SellerProfile};
use crate::services::ApiError;
use crate::stores::{SellerStore, SlotFailure, SlotStatus};

#[derive(Debug, Clone, Default)]
pub struct SellerState {
    inner: Rc<RefCell<SellerStore>>,
}

// Dos handles son "iguales" si apuntan al mismo store; el contenido se
// compara vía snapshot() en la capa Yew.
impl PartialEq for SellerState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SellerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia del estado completo para renderizar
    pub fn snapshot(&self) -> SellerStore {
        self.inner.borrow().clone()
    }

    // ------------------------------------------------------------------
    // Sesión
    // ------------------------------------------------------------------

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    pub fn has_session(&self) -> bool {
        self.inner.borrow().has_session()
    }

    pub fn init_session(&self, stored: Option<String>) {
        self.inner.borrow_mut().init_session(stored);
    }

    pub fn set_token(&self, token: String) {
        self.inner.borrow_mut().set_token(token);
    }

    pub fn clear_session(&self) {
        self.inner.borrow_mut().clear_session();
    }

    // ------------------------------------------------------------------
    // Catálogo
    // ------------------------------------------------------------------

    pub fn begin_products_fetch(&self) -> u64 {
        self.inner.borrow_mut().products.begin_fetch()
    }

    pub fn apply_products(&self, seq: u64, result: Result<Vec<Product>, ApiError>) -> bool {
        if let Err(ref e) = result {
            log::error!("❌ Error cargando catálogo: {}", e);
        }
        self.inner.borrow_mut().products.apply(seq, result, now())
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner
            .borrow()
            .products
            .data()
            .cloned()
            .unwrap_or_default()
    }

    pub fn products_status(&self) -> SlotStatus {
        self.inner.borrow().products.status()
    }

    pub fn remove_product_local(&self, id: &str) -> bool {
        self.inner.borrow_mut().remove_product_local(id)
    }

    pub fn clone_product_local(&self, id: &str, new_id: String) -> bool {
        self.inner.borrow_mut().clone_product_local(id, new_id)
    }

    // ------------------------------------------------------------------
    // Pedidos
    // ------------------------------------------------------------------

    pub fn begin_orders_fetch(&self) -> u64 {
        self.inner.borrow_mut().orders.begin_fetch()
    }

    pub fn apply_orders(&self, seq: u64, result: Result<Vec<Order>, ApiError>) -> bool {
        if let Err(ref e) = result {
            log::error!("❌ Error cargando pedidos: {}", e);
        }
        self.inner.borrow_mut().orders.apply(seq, result, now())
    }

    pub fn orders(&self) -> Vec<Order> {
        self.inner
            .borrow()
            .orders
            .data()
            .cloned()
            .unwrap_or_default()
    }

    pub fn orders_failure(&self) -> Option<SlotFailure> {
        self.inner.borrow().orders.last_failure().cloned()
    }

    // ------------------------------------------------------------------
    // Inventario
    // ------------------------------------------------------------------

    pub fn begin_inventory_fetch(&self) -> u64 {
        self.inner.borrow_mut().inventory.begin_fetch()
    }

    pub fn apply_inventory(&self, seq: u64, result: Result<Vec<InventoryItem>, ApiError>) -> bool {
        if let Err(ref e) = result {
            log::error!("❌ Error cargando inventario: {}", e);
        }
        self.inner.borrow_mut().inventory.apply(seq, result, now())
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.inner
            .borrow()
            .inventory
            .data()
            .cloned()
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Perfil
    // ------------------------------------------------------------------

    pub fn begin_profile_fetch(&self) -> u64 {
        self.inner.borrow_mut().profile.begin_fetch()
    }

    pub fn apply_profile(&self, seq: u64, result: Result<SellerProfile, ApiError>) -> bool {
        if let Err(ref e) = result {
            log::error!("❌ Error cargando perfil: {}", e);
        }
        self.inner.borrow_mut().profile.apply(seq, result, now())
    }

    pub fn profile(&self) -> Option<SellerProfile> {
        self.inner.borrow().profile.data().cloned()
    }

    // ------------------------------------------------------------------
    // Ingresos
    // ------------------------------------------------------------------

    pub fn begin_revenue_fetch(&self) -> u64 {
        self.inner.borrow_mut().revenue.begin_fetch()
    }

    pub fn apply_revenue(&self, seq: u64, result: Result<RevenueSummary, ApiError>) -> bool {
        if let Err(ref e) = result {
            log::error!("❌ Error cargando ingresos: {}", e);
        }
        self.inner.borrow_mut().revenue.apply(seq, result, now())
    }

    pub fn revenue(&self) -> Option<RevenueSummary> {
        self.inner.borrow().revenue.data().cloned()
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyRevenue;

    fn producto(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: 1.0,
            category: String::new(),
            sub_category: String::new(),
            quantity: None,
            sizes: None,
            best_seller: false,
            image: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_los_clones_comparten_el_mismo_store() {
        let state = SellerState::new();
        let clon = state.clone();

        state.set_token("jwt".to_string());
        assert_eq!(clon.token().as_deref(), Some("jwt"));
        assert_eq!(state, clon);
    }

    #[test]
    fn test_fetches_concurrentes_gana_la_emision_mas_nueva() {
        let state = SellerState::new();

        // Dos fetch_products() espalda con espalda: el primero resuelve
        // el último. El consumidor debe ver el payload del último emitido.
        let seq_a = state.begin_products_fetch();
        let seq_b = state.begin_products_fetch();

        assert!(state.apply_products(seq_b, Ok(vec![producto("nuevo")])));
        assert!(!state.apply_products(seq_a, Ok(vec![producto("viejo")])));

        let products = state.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "nuevo");
    }

    #[test]
    fn test_fallo_de_pedidos_no_toca_el_catalogo() {
        let state = SellerState::new();
        let seq = state.begin_products_fetch();
        state.apply_products(seq, Ok(vec![producto("p1")]));

        let seq = state.begin_orders_fetch();
        state.apply_orders(seq, Err(ApiError::Network("caída".to_string())));

        // Fallos aislados por recurso
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products_status(), SlotStatus::Loaded);
        assert!(state.orders().is_empty());
        let failure = state.orders_failure().unwrap();
        assert_eq!(failure.error, ApiError::Network("caída".to_string()));
    }

    #[test]
    fn test_revenue_se_guarda_sin_transformar() {
        let state = SellerState::new();
        let summary = RevenueSummary {
            day: 120.5,
            month: 3400.0,
            year: 41000.0,
            monthly_breakdown: vec![
                MonthlyRevenue { month: 1, total: 1000.0 },
                MonthlyRevenue { month: 2, total: 2400.0 },
            ],
        };

        let seq = state.begin_revenue_fetch();
        state.apply_revenue(seq, Ok(summary.clone()));

        // El snapshot cacheado es bit a bit el payload del backend
        assert_eq!(state.revenue(), Some(summary));
    }

    #[test]
    fn test_clear_session_conserva_snapshots() {
        let state = SellerState::new();
        state.set_token("jwt".to_string());
        let seq = state.begin_products_fetch();
        state.apply_products(seq, Ok(vec![producto("p1")]));

        state.clear_session();

        assert!(state.token().is_none());
        assert_eq!(state.products().len(), 1);
    }
}
