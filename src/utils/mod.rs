// Utils compartidos

pub mod constants;
pub mod filters;
pub mod format;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use filters::{filter_inventory, filter_orders, filter_products, unique_categories, StockFilter};
pub use format::{clamp_percent, format_currency, format_order_date, month_label};
pub use validation::{
    validate_field, validate_profile_image, validate_register_form, FieldError, RegisterForm,
};
