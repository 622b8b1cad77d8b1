use serde::{Deserialize, Serialize};

/// Producto del catálogo tal como lo devuelve el backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "subCategory", default)]
    pub sub_category: String,
    /// Stock plano (productos sin tallas)
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Stock por talla (solo categoría Fashion)
    #[serde(rename = "size", default)]
    pub sizes: Option<Vec<SizeQuantity>>,
    #[serde(rename = "bestSeller", default)]
    pub best_seller: bool,
    /// URLs de las imágenes subidas (hasta 4)
    #[serde(default)]
    pub image: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeQuantity {
    pub size: String,
    pub quantity: u32,
}

impl Product {
    /// Unidades totales, sumando tallas si el producto las tiene
    pub fn total_quantity(&self) -> u32 {
        match &self.sizes {
            Some(sizes) => sizes.iter().map(|s| s.quantity).sum(),
            None => self.quantity.unwrap_or(0),
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.total_quantity() <= crate::utils::constants::LOW_STOCK_THRESHOLD
    }
}

/// Stock declarado al crear un producto: plano o por talla.
#[derive(Debug, Clone, PartialEq)]
pub enum StockSpec {
    Flat { quantity: u32 },
    PerSize(Vec<SizeQuantity>),
}

/// Datos del formulario de alta de producto. Las imágenes viajan aparte
/// como ficheros del multipart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sub_category: String,
    pub best_seller: bool,
    pub stock: StockSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto(quantity: Option<u32>, sizes: Option<Vec<SizeQuantity>>) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Camiseta".to_string(),
            description: String::new(),
            price: 19.99,
            category: "Fashion".to_string(),
            sub_category: "Men".to_string(),
            quantity,
            sizes,
            best_seller: false,
            image: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_total_quantity_plano() {
        assert_eq!(producto(Some(7), None).total_quantity(), 7);
        assert_eq!(producto(None, None).total_quantity(), 0);
    }

    #[test]
    fn test_total_quantity_por_talla() {
        let sizes = vec![
            SizeQuantity { size: "S".to_string(), quantity: 3 },
            SizeQuantity { size: "M".to_string(), quantity: 5 },
        ];
        // Con tallas presentes, el campo plano se ignora
        let p = producto(Some(99), Some(sizes));
        assert_eq!(p.total_quantity(), 8);
    }

    #[test]
    fn test_low_stock() {
        assert!(producto(Some(10), None).is_low_stock());
        assert!(!producto(Some(11), None).is_low_stock());
    }

    #[test]
    fn test_deserializa_campos_del_backend() {
        let json = r#"{
            "_id": "665f1",
            "name": "Mixer",
            "price": 49.5,
            "category": "Home & Kitchen",
            "subCategory": "Kitchen Appliances",
            "quantity": 12,
            "bestSeller": true,
            "image": ["https://cdn/x.jpg"]
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "665f1");
        assert_eq!(p.sub_category, "Kitchen Appliances");
        assert!(p.best_seller);
        assert!(p.sizes.is_none());
    }
}
