// ============================================================================
// TOKEN VAULT - único escritor del token persistido
// ============================================================================
// El estado en memoria (SellerStore.token) es un cache de lo que hay aquí:
// se puebla una sola vez al arrancar y en los cambios explícitos de
// login/logout. Nadie más escribe la clave "token" de localStorage.
// ============================================================================

use crate::utils::constants::STORAGE_KEY_TOKEN;
use crate::utils::storage;

pub struct TokenVault;

impl TokenVault {
    /// Lee el token persistido. None es el caso normal y silencioso de un
    /// arranque sin sesión previa.
    pub fn load() -> Option<String> {
        storage::load_string(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty())
    }

    /// Persiste el token para futuros arranques
    pub fn store(token: &str) -> Result<(), String> {
        storage::save_string(STORAGE_KEY_TOKEN, token)
    }

    /// Borra el token durable (logout)
    pub fn clear() -> Result<(), String> {
        storage::remove_key(STORAGE_KEY_TOKEN)
    }
}
