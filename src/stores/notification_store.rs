// Feed de avisos local del panel. No hay endpoint detrás: vive y muere
// con la pestaña.

use crate::models::{Notification, NotificationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Read,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| match filter {
                NotificationFilter::All => true,
                NotificationFilter::Unread => !n.read,
                NotificationFilter::Read => n.read,
            })
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marca un aviso como leído. Devuelve true si existía.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < before
    }
}

pub fn notification(id: &str, kind: NotificationKind, title: &str, message: &str, at: i64) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        read: false,
        at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_de_prueba() -> NotificationFeed {
        let mut feed = NotificationFeed::new();
        feed.push(notification("n1", NotificationKind::Order, "Pedido nuevo", "#o1", 100));
        feed.push(notification("n2", NotificationKind::Stock, "Stock bajo", "Mixer", 200));
        feed
    }

    #[test]
    fn test_push_inserta_al_frente() {
        let feed = feed_de_prueba();
        assert_eq!(feed.items()[0].id, "n2");
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_y_filtros() {
        let mut feed = feed_de_prueba();
        assert!(feed.mark_read("n1"));
        assert!(!feed.mark_read("fantasma"));

        assert_eq!(feed.filtered(NotificationFilter::Unread).len(), 1);
        assert_eq!(feed.filtered(NotificationFilter::Read).len(), 1);
        assert_eq!(feed.filtered(NotificationFilter::All).len(), 2);
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn test_mark_all_read() {
        let mut feed = feed_de_prueba();
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut feed = feed_de_prueba();
        assert!(feed.remove("n1"));
        assert!(!feed.remove("n1"));
        assert_eq!(feed.items().len(), 1);
    }
}
