pub mod seller_context;
pub mod use_seller;

pub use seller_context::{use_seller_context, SellerContextProvider};
pub use use_seller::{use_seller, UseSellerHandle};
