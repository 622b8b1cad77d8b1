pub mod inventory;
pub mod notification;
pub mod order;
pub mod product;
pub mod revenue;
pub mod seller;

pub use inventory::InventoryItem;
pub use notification::{Notification, NotificationKind};
pub use order::{Order, OrderAddress, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, SizeQuantity, StockSpec};
pub use revenue::{MonthlyRevenue, RevenueSummary};
pub use seller::SellerProfile;
