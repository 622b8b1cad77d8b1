// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni estado propio: una petición por llamada,
// sin reintentos, sin timeouts, sin coalescing. El token viaja por llamada.
// ============================================================================

use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::{
    NewProduct, Order, Product, RevenueSummary, SellerProfile, StockSpec,
};
use crate::models::{InventoryItem, OrderStatus};
use crate::utils::constants::MAX_PRODUCT_IMAGES;
use crate::utils::RegisterForm;

/// Fallos en la frontera con el backend. El store los captura todos: nunca
/// llegan sin tratar a la capa de render.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Se intentó un fetch autenticado sin token en la sesión
    #[error("no hay token de sesión")]
    AuthMissing,
    /// El backend rechazó el token (401/403). El store NO limpia la sesión
    /// solo; forzar el logout es decisión de la página.
    #[error("sesión rechazada por el backend: {0}")]
    AuthRejected(String),
    /// Fallo de transporte: la petición no llegó o no volvió
    #[error("error de red: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("respuesta inválida del backend: {0}")]
    Parse(String),
    /// Envelope con success=false (el backend rechazó la operación)
    #[error("operación rechazada: {0}")]
    Rejected(String),
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Listar productos del catálogo
    pub async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/api/Seller/list_Product", self.base_url);

        let response = Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<ListProductsResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        let products = data.products.unwrap_or_default();
        log::info!("✅ Catálogo recibido: {} productos", products.len());
        Ok(products)
    }

    /// Listar pedidos
    pub async fn list_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        let url = format!("{}/api/Seller/Order_list", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<ListOrdersResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        let orders = data.orders.unwrap_or_default();
        log::info!("✅ Pedidos recibidos: {}", orders.len());
        Ok(orders)
    }

    /// Listar inventario (endpoint propio, independiente del catálogo)
    pub async fn list_inventory(&self, token: &str) -> Result<Vec<InventoryItem>, ApiError> {
        let url = format!("{}/api/Seller/list_inventory_product", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<ListInventoryResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        Ok(data.product_inventory.unwrap_or_default())
    }

    /// Obtener el perfil del vendedor
    pub async fn get_profile(&self, token: &str) -> Result<SellerProfile, ApiError> {
        let url = format!("{}/api/Seller/Seller_Profile", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<ProfileResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        data.profile
            .ok_or_else(|| ApiError::Parse("respuesta sin perfil".to_string()))
    }

    /// Actualizar el perfil enviando el registro COMPLETO editado. El cache
    /// local no se refresca desde la respuesta: quien necesite el estado
    /// autoritativo post-escritura debe refetchear.
    pub async fn update_profile(
        &self,
        token: &str,
        profile: &SellerProfile,
    ) -> Result<String, ApiError> {
        let url = format!("{}/api/Seller/update_profileSeller", self.base_url);

        log::info!("📝 Actualizando perfil del vendedor: {}", profile.store_name);

        let response = Request::put(&url)
            .header("Authorization", &bearer(token))
            .json(profile)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        Ok(data.message.unwrap_or_else(|| "Profile updated".to_string()))
    }

    /// Obtener el resumen de ingresos (calculado por el backend)
    pub async fn get_revenue(&self, token: &str) -> Result<RevenueSummary, ApiError> {
        let url = format!("{}/api/Seller/Analitics", self.base_url);

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<RevenueResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        data.revenue
            .ok_or_else(|| ApiError::Parse("respuesta sin revenue".to_string()))
    }

    /// Alta de producto: multipart con los campos del formulario y hasta 4
    /// imágenes (image1..image4). Fashion manda el stock por talla como
    /// JSON en "size"; el resto, "quantity" plano.
    pub async fn add_product(
        &self,
        token: &str,
        product: &NewProduct,
        images: &[Option<File>],
    ) -> Result<String, ApiError> {
        let url = format!("{}/api/Seller/add_Product", self.base_url);

        log::info!("📦 Alta de producto: {}", product.name);

        let form = FormData::new().map_err(|_| form_error())?;
        form.append_with_str("name", &product.name).map_err(|_| form_error())?;
        form.append_with_str("description", &product.description)
            .map_err(|_| form_error())?;
        form.append_with_str("price", &product.price.to_string())
            .map_err(|_| form_error())?;
        form.append_with_str("category", &product.category)
            .map_err(|_| form_error())?;
        form.append_with_str("subCategory", &product.sub_category)
            .map_err(|_| form_error())?;
        form.append_with_str("bestSeller", &product.best_seller.to_string())
            .map_err(|_| form_error())?;

        match &product.stock {
            StockSpec::PerSize(sizes) => {
                let json = serde_json::to_string(sizes)
                    .map_err(|e| ApiError::Parse(e.to_string()))?;
                form.append_with_str("size", &json).map_err(|_| form_error())?;
            }
            StockSpec::Flat { quantity } => {
                form.append_with_str("quantity", &quantity.to_string())
                    .map_err(|_| form_error())?;
            }
        }

        for (i, image) in images.iter().take(MAX_PRODUCT_IMAGES).enumerate() {
            if let Some(file) = image {
                form.append_with_blob(&format!("image{}", i + 1), file)
                    .map_err(|_| form_error())?;
            }
        }

        let response = Request::post(&url)
            .header("Authorization", &bearer(token))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        Ok(data.message.unwrap_or_else(|| "Product added".to_string()))
    }

    /// Registro de un vendedor nuevo: multipart sin autenticar, con foto de
    /// perfil opcional. Las páginas validan campo a campo con
    /// utils::validation; este guard es la última barrera para que un
    /// formulario inválido jamás toque la red.
    pub async fn register_seller(
        &self,
        form_data: &RegisterForm,
        profile_image: Option<&File>,
    ) -> Result<String, ApiError> {
        let errors = crate::utils::validate_register_form(form_data);
        if !errors.is_empty() {
            let campos: Vec<&str> = errors.iter().map(|e| e.field).collect();
            return Err(ApiError::Rejected(format!(
                "formulario de registro inválido: {}",
                campos.join(", ")
            )));
        }

        let url = format!("{}/api/seller/register", self.base_url);

        log::info!("📝 Registro de vendedor: {}", form_data.store_name);

        let form = FormData::new().map_err(|_| form_error())?;
        form.append_with_str("name", &form_data.name).map_err(|_| form_error())?;
        form.append_with_str("email", &form_data.email).map_err(|_| form_error())?;
        form.append_with_str("password", &form_data.password)
            .map_err(|_| form_error())?;
        form.append_with_str("storeName", &form_data.store_name)
            .map_err(|_| form_error())?;
        form.append_with_str("phone", &form_data.phone).map_err(|_| form_error())?;
        form.append_with_str("address", &form_data.address)
            .map_err(|_| form_error())?;
        form.append_with_str("gstNumber", &form_data.gst_number)
            .map_err(|_| form_error())?;
        form.append_with_str("panNumber", &form_data.pan_number)
            .map_err(|_| form_error())?;
        form.append_with_str("businessType", &form_data.business_type)
            .map_err(|_| form_error())?;
        form.append_with_str("terms", &form_data.terms.to_string())
            .map_err(|_| form_error())?;

        if let Some(file) = profile_image {
            form.append_with_blob("profileImage", file).map_err(|_| form_error())?;
        }

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        Ok(data.message.unwrap_or_else(|| "Registration submitted".to_string()))
    }

    /// Cambiar el estado de un pedido. El cache de pedidos queda obsoleto
    /// hasta el siguiente fetch_orders explícito.
    pub async fn update_order_status(
        &self,
        token: &str,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<String, ApiError> {
        let url = format!("{}/api/orders/{}/status", self.base_url, order_id);

        log::info!("🚚 Cambiando estado del pedido {} a {}", order_id, status.label());

        let response = Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(&serde_json::json!({ "status": status }))
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(&response)?;

        let data = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !data.success {
            return Err(rejected(data.message));
        }

        Ok(data.message.unwrap_or_else(|| "Status updated".to_string()))
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// 401/403 es rechazo de sesión; cualquier otro no-2xx es error HTTP plano
fn check_status(response: &Response) -> Result<(), ApiError> {
    let status = response.status();
    if status == 401 || status == 403 {
        return Err(ApiError::AuthRejected(format!("HTTP {}", status)));
    }
    if !response.ok() {
        return Err(ApiError::Http {
            status,
            message: response.status_text(),
        });
    }
    Ok(())
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected(message.unwrap_or_else(|| "operación rechazada por el backend".to_string()))
}

fn form_error() -> ApiError {
    ApiError::Network("No se pudo construir el formulario multipart".to_string())
}

#[derive(serde::Deserialize)]
struct ListProductsResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    products: Option<Vec<Product>>,
}

#[derive(serde::Deserialize)]
struct ListOrdersResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    orders: Option<Vec<Order>>,
}

#[derive(serde::Deserialize)]
struct ListInventoryResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "productInventory", default)]
    product_inventory: Option<Vec<InventoryItem>>,
}

#[derive(serde::Deserialize)]
struct ProfileResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    profile: Option<SellerProfile>,
}

#[derive(serde::Deserialize)]
struct RevenueResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    revenue: Option<RevenueSummary>,
}

#[derive(serde::Deserialize)]
struct MessageResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}
