use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guarda una cadena sin serializar (el token se persiste en crudo)
pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())
}

pub fn load_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn remove_key(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}

/// Variante JSON para valores estructurados
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    save_string(key, &json)
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_string(key)?;
    serde_json::from_str(&json).ok()
}
