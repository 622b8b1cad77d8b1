// ============================================================================
// VALIDACIÓN DEL REGISTRO DE VENDEDOR
// ============================================================================
// Todas las reglas se evalúan en el cliente, ANTES de tocar la red: un
// formulario inválido nunca llega a services::api_client.
// ============================================================================

use regex::Regex;

use crate::utils::constants::MAX_PROFILE_IMAGE_BYTES;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
    // Formato GSTIN: 2 dígitos de estado + PAN + sufijo con Z fija
    static ref GST_RE: Regex =
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap();
    static ref PAN_RE: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
}

pub const BUSINESS_TYPES: [&str; 4] = ["individual", "company", "Manufacturer", "partnership"];

/// Datos del formulario de registro. La foto de perfil se valida aparte
/// (validate_profile_image) porque el File no sale del input hasta el envío.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub store_name: String,
    pub phone: String,
    pub address: String,
    pub gst_number: String,
    pub pan_number: String,
    pub business_type: String,
    pub terms: bool,
}

/// Error de un campo concreto, para pintarlo junto al input
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

/// Valida un campo suelto (validación en vivo al teclear)
pub fn validate_field(field: &str, value: &str) -> Option<String> {
    let error = match field {
        "name" => {
            if value.trim().is_empty() {
                "Name is required"
            } else if value.trim().chars().count() < 3 {
                "Name must be at least 3 characters"
            } else {
                return None;
            }
        }
        "email" => {
            if value.is_empty() {
                "Email is required"
            } else if !EMAIL_RE.is_match(value) {
                "Invalid email format"
            } else {
                return None;
            }
        }
        "password" => {
            if value.is_empty() {
                "Password is required"
            } else if value.chars().count() < 8 {
                "Password must be at least 8 characters"
            } else if !password_has_all_classes(value) {
                "Must include uppercase, lowercase, number & special character"
            } else {
                return None;
            }
        }
        "storeName" => {
            if value.trim().is_empty() {
                "Store name is required"
            } else {
                return None;
            }
        }
        "phone" => {
            if value.is_empty() {
                "Phone number is required"
            } else if !PHONE_RE.is_match(value) {
                "Invalid phone number (10 digits)"
            } else {
                return None;
            }
        }
        "address" => {
            if value.trim().is_empty() {
                "Address is required"
            } else {
                return None;
            }
        }
        "gstNumber" => {
            if value.is_empty() {
                "GST number is required"
            } else if !GST_RE.is_match(value) {
                "Invalid GST format"
            } else {
                return None;
            }
        }
        "panNumber" => {
            if value.is_empty() {
                "PAN number is required"
            } else if !PAN_RE.is_match(value) {
                "Invalid PAN format"
            } else {
                return None;
            }
        }
        "businessType" => {
            if value.is_empty() {
                "Business type is required"
            } else if !BUSINESS_TYPES.contains(&value) {
                "Business type is required"
            } else {
                return None;
            }
        }
        _ => return None,
    };
    Some(error.to_string())
}

/// Valida el formulario completo. Vec vacío = listo para enviar.
pub fn validate_register_form(form: &RegisterForm) -> Vec<FieldError> {
    let campos: [(&'static str, &str); 9] = [
        ("name", &form.name),
        ("email", &form.email),
        ("password", &form.password),
        ("storeName", &form.store_name),
        ("phone", &form.phone),
        ("address", &form.address),
        ("gstNumber", &form.gst_number),
        ("panNumber", &form.pan_number),
        ("businessType", &form.business_type),
    ];

    let mut errors: Vec<FieldError> = campos
        .iter()
        .filter_map(|(field, value)| {
            validate_field(field, value).map(|msg| FieldError { field, message: msg })
        })
        .collect();

    if !form.terms {
        errors.push(FieldError::new(
            "terms",
            "You must accept the terms and conditions",
        ));
    }

    errors
}

/// Foto de perfil: solo JPG/PNG y menos de 1MB
pub fn validate_profile_image(mime: &str, size_bytes: u64) -> Option<String> {
    if !matches!(mime, "image/jpeg" | "image/jpg" | "image/png") {
        return Some("Only JPG/PNG images allowed".to_string());
    }
    if size_bytes > MAX_PROFILE_IMAGE_BYTES {
        return Some("Image size must be less than 1MB".to_string());
    }
    None
}

fn password_has_all_classes(value: &str) -> bool {
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    let special = value.chars().any(|c| "@$!%*?&".contains(c));
    lower && upper && digit && special
}
