/// Clave fija del token de sesión en localStorage. Es el único estado
/// durable del cliente.
pub const STORAGE_KEY_TOKEN: &str = "token";

/// A partir de cuántas unidades (inclusive) un stock se considera bajo
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Máximo de imágenes por producto en el alta
pub const MAX_PRODUCT_IMAGES: usize = 4;

/// Tamaño máximo de la foto de perfil del registro (1 MiB)
pub const MAX_PROFILE_IMAGE_BYTES: u64 = 1_048_576;
