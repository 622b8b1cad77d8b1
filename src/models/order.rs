use serde::{Deserialize, Serialize};

/// Estados de un pedido. Los literales del wire vienen así del backend,
/// incluida la minúscula de "order Placed".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[serde(rename = "order Placed")]
    Placed,
    Packing,
    Shipped,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "order Placed",
            OrderStatus::Packing => "Packing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Avance del pedido para la barra de progreso
    pub fn progress(&self) -> u8 {
        match self {
            OrderStatus::Placed => 25,
            OrderStatus::Packing => 50,
            OrderStatus::Shipped => 75,
            OrderStatus::OutForDelivery => 90,
            OrderStatus::Delivered => 100,
        }
    }

    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Placed,
            OrderStatus::Packing,
            OrderStatus::Shipped,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub address: Option<OrderAddress>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Epoch millis del alta del pedido
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub payment: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderAddress {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "zipCode", default)]
    pub zip_code: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Order {
    /// Nombre del cliente para listados; cae a un genérico si la dirección
    /// viene vacía
    pub fn customer_name(&self) -> String {
        let name = self
            .address
            .as_ref()
            .map(|a| format!("{} {}", a.first_name, a.last_name).trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            "Unknown Customer".to_string()
        } else {
            name
        }
    }
}

impl OrderAddress {
    /// Dirección en una línea para las tarjetas de envío
    pub fn single_line(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.street.is_empty() {
            parts.push(self.street.clone());
        }
        if !self.city.is_empty() {
            parts.push(self.city.clone());
        }
        let state_zip = format!("{} {}", self.state, self.zip_code).trim().to_string();
        if !state_zip.is_empty() {
            parts.push(state_zip);
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_literales_del_wire() {
        // El literal raro del backend tiene que sobrevivir tal cual
        let s: OrderStatus = serde_json::from_str("\"order Placed\"").unwrap();
        assert_eq!(s, OrderStatus::Placed);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"order Placed\"");

        let s: OrderStatus = serde_json::from_str("\"Out for Delivery\"").unwrap();
        assert_eq!(s, OrderStatus::OutForDelivery);
    }

    #[test]
    fn test_progress_por_estado() {
        assert_eq!(OrderStatus::Placed.progress(), 25);
        assert_eq!(OrderStatus::Packing.progress(), 50);
        assert_eq!(OrderStatus::Shipped.progress(), 75);
        assert_eq!(OrderStatus::OutForDelivery.progress(), 90);
        assert_eq!(OrderStatus::Delivered.progress(), 100);
    }

    #[test]
    fn test_customer_name_con_fallback() {
        let mut order = Order {
            id: "o1".to_string(),
            amount: 120.0,
            status: OrderStatus::Placed,
            address: None,
            items: vec![],
            date: 0,
            payment: false,
        };
        assert_eq!(order.customer_name(), "Unknown Customer");

        order.address = Some(OrderAddress {
            first_name: "Asha".to_string(),
            last_name: "Patel".to_string(),
            ..Default::default()
        });
        assert_eq!(order.customer_name(), "Asha Patel");
    }

    #[test]
    fn test_single_line_omite_campos_vacios() {
        let addr = OrderAddress {
            street: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "MH".to_string(),
            zip_code: "411001".to_string(),
            ..Default::default()
        };
        assert_eq!(addr.single_line(), "12 MG Road, Pune, MH 411001");

        let vacia = OrderAddress::default();
        assert_eq!(vacia.single_line(), "");
    }
}
