pub mod notification_store;
pub mod resource;
pub mod seller_store;

pub use notification_store::{NotificationFeed, NotificationFilter};
pub use resource::{ResourceSlot, SlotFailure, SlotStatus};
pub use seller_store::SellerStore;
