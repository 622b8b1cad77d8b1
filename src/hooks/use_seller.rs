// ============================================================================
// USE SELLER HOOK - estado compartido del panel de vendedor
// ============================================================================
// Expone el SellerState a los componentes como un handle con callbacks:
// un refresh imperativo por recurso y getters pasivos vía snapshot. Cada
// callback lanza su petición en spawn_local, así que ningún fetch bloquea
// el render ni a otro fetch.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::SellerProfile;
use crate::services::{ApiClient, ApiError, TokenVault};
use crate::state::SellerState;
use crate::stores::SellerStore;

#[derive(Clone, PartialEq)]
pub struct UseSellerHandle {
    /// Snapshot del estado para este render
    pub store: SellerStore,
    /// Acceso compartido al estado (operaciones con nombre, sin setters
    /// crudos)
    pub state: SellerState,
    pub fetch_products: Callback<()>,
    pub fetch_orders: Callback<()>,
    pub fetch_inventory: Callback<()>,
    pub fetch_profile: Callback<()>,
    pub fetch_revenue: Callback<()>,
    /// Envía el perfil editado completo. No refresca el cache local: para
    /// ver el estado autoritativo hay que llamar a fetch_profile después.
    pub update_profile: Callback<SellerProfile>,
    pub set_token: Callback<String>,
    pub clear_session: Callback<()>,
    /// Ediciones solo de vista local (se pierden al refetchear)
    pub remove_product_local: Callback<String>,
    pub clone_product_local: Callback<String>,
}

#[hook]
pub fn use_seller() -> UseSellerHandle {
    let seller_cell = use_state(SellerState::new);
    let seller = (*seller_cell).clone();
    let snapshot = use_state(SellerStore::default);

    // Publica el estado autoritativo hacia el snapshot renderizable
    let sync: Rc<dyn Fn()> = {
        let seller = seller.clone();
        let snapshot = snapshot.clone();
        Rc::new(move || snapshot.set(seller.snapshot()))
    };

    let fetch_products = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            let seller = seller.clone();
            let sync = sync.clone();
            spawn_local(async move {
                let seq = seller.begin_products_fetch();
                let result = match seller.token() {
                    Some(token) => ApiClient::new().list_products(&token).await,
                    // Sin token no se toca la red
                    None => Err(ApiError::AuthMissing),
                };
                if seller.apply_products(seq, result) {
                    sync();
                }
            });
        })
    };

    let fetch_orders = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            let seller = seller.clone();
            let sync = sync.clone();
            spawn_local(async move {
                let seq = seller.begin_orders_fetch();
                let result = match seller.token() {
                    Some(token) => ApiClient::new().list_orders(&token).await,
                    None => Err(ApiError::AuthMissing),
                };
                if seller.apply_orders(seq, result) {
                    sync();
                }
            });
        })
    };

    let fetch_inventory = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            let seller = seller.clone();
            let sync = sync.clone();
            spawn_local(async move {
                let seq = seller.begin_inventory_fetch();
                let result = match seller.token() {
                    Some(token) => ApiClient::new().list_inventory(&token).await,
                    None => Err(ApiError::AuthMissing),
                };
                if seller.apply_inventory(seq, result) {
                    sync();
                }
            });
        })
    };

    let fetch_profile = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            let seller = seller.clone();
            let sync = sync.clone();
            spawn_local(async move {
                let seq = seller.begin_profile_fetch();
                let result = match seller.token() {
                    Some(token) => ApiClient::new().get_profile(&token).await,
                    None => Err(ApiError::AuthMissing),
                };
                if seller.apply_profile(seq, result) {
                    sync();
                }
            });
        })
    };

    let fetch_revenue = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            let seller = seller.clone();
            let sync = sync.clone();
            spawn_local(async move {
                let seq = seller.begin_revenue_fetch();
                let result = match seller.token() {
                    Some(token) => ApiClient::new().get_revenue(&token).await,
                    None => Err(ApiError::AuthMissing),
                };
                if seller.apply_revenue(seq, result) {
                    sync();
                }
            });
        })
    };

    let update_profile = {
        let seller = seller.clone();
        Callback::from(move |edited: SellerProfile| {
            let seller = seller.clone();
            spawn_local(async move {
                let Some(token) = seller.token() else {
                    log::warn!("⚠️ update_profile sin sesión activa");
                    return;
                };
                match ApiClient::new().update_profile(&token, &edited).await {
                    Ok(message) => {
                        log::info!("✅ Perfil actualizado: {}", message);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando perfil: {}", e);
                    }
                }
            });
        })
    };

    let set_token = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |token: String| {
            if let Err(e) = TokenVault::store(&token) {
                log::error!("❌ Error persistiendo el token: {}", e);
            }
            seller.set_token(token);
            // Sin refetch automático: los refresh son explícitos
            sync();
        })
    };

    let clear_session = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |_| {
            if let Err(e) = TokenVault::clear() {
                log::warn!("⚠️ Error limpiando el token persistido: {}", e);
            }
            seller.clear_session();
            log::info!("👋 Logout (los caches de recursos se conservan)");
            sync();
        })
    };

    let remove_product_local = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |id: String| {
            if seller.remove_product_local(&id) {
                sync();
            }
        })
    };

    let clone_product_local = {
        let seller = seller.clone();
        let sync = sync.clone();
        Callback::from(move |id: String| {
            let new_id = uuid::Uuid::new_v4().to_string();
            if seller.clone_product_local(&id, new_id) {
                sync();
            }
        })
    };

    // Arranque: restaurar el token persistido (si lo hay) y disparar las
    // cargas iniciales. Sin token guardado no se intenta ningún fetch.
    {
        let seller = seller.clone();
        let sync = sync.clone();
        let fetch_products = fetch_products.clone();
        let fetch_orders = fetch_orders.clone();
        use_effect_with((), move |_| {
            match TokenVault::load() {
                Some(token) => {
                    log::info!("✅ Token encontrado, restaurando sesión");
                    seller.init_session(Some(token));
                    sync();
                    // Cargas independientes: el fallo de una no frena a la
                    // otra
                    fetch_products.emit(());
                    fetch_orders.emit(());
                }
                None => {
                    log::info!("ℹ️ Arranque sin sesión previa");
                    seller.init_session(None);
                }
            }
            || ()
        });
    }

    UseSellerHandle {
        store: (*snapshot).clone(),
        state: seller,
        fetch_products,
        fetch_orders,
        fetch_inventory,
        fetch_profile,
        fetch_revenue,
        update_profile,
        set_token,
        clear_session,
        remove_product_local,
        clone_product_local,
    }
}
