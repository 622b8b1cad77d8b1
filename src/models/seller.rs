use serde::{Deserialize, Serialize};

/// Perfil del vendedor autenticado. Se actualiza enviando el registro
/// completo; el backend no devuelve merges parciales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SellerProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "storeName", default)]
    pub store_name: String,
    #[serde(rename = "gstNumber", default)]
    pub gst_number: String,
    #[serde(rename = "panNumber", default)]
    pub pan_number: String,
    #[serde(rename = "businessType", default)]
    pub business_type: String,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Vec<String>,
    #[serde(rename = "isApproved", default)]
    pub is_approved: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializa_perfil_del_backend() {
        let json = r#"{
            "_id": "s01",
            "name": "Ravi Kumar",
            "email": "ravi@tienda.in",
            "storeName": "Ravi Electronics",
            "gstNumber": "22AAAAA0000A1Z5",
            "panNumber": "ABCDE1234F",
            "businessType": "individual",
            "isApproved": true
        }"#;
        let p: SellerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.store_name, "Ravi Electronics");
        assert_eq!(p.gst_number, "22AAAAA0000A1Z5");
        assert!(p.is_approved);
        // Campos ausentes caen a su default sin romper el parseo
        assert!(p.profile_image.is_empty());
        assert_eq!(p.phone, "");
    }
}
