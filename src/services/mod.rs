pub mod api_client;
pub mod token_vault;

pub use api_client::{ApiClient, ApiError};
pub use token_vault::TokenVault;
