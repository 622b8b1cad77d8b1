use serde::{Deserialize, Serialize};

/// Aviso local del panel (pedidos nuevos, stock bajo, pagos). No viene de
/// ningún endpoint: vive solo en memoria del cliente.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    /// Epoch seconds de creación
    pub at: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationKind {
    Order,
    Stock,
    Payment,
    System,
}
