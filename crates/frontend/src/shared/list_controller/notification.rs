//! Floating notifications of mutation flows.
//!
//! Success notifications close themselves after `SUCCESS_NOTIFICATION_MS`;
//! error notifications stay until the user dismisses them.

pub const SUCCESS_NOTIFICATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Delay before the notification closes itself, if it does
    pub fn auto_close_ms(&self) -> Option<u32> {
        match self.kind {
            NotificationKind::Success => Some(SUCCESS_NOTIFICATION_MS),
            NotificationKind::Error => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            kind,
            message: message.into(),
        };
        self.items.push(notification.clone());
        notification
    }

    /// Manual close or auto-close timer; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_auto_closes_error_does_not() {
        let mut center = NotificationCenter::default();
        let ok = center.push(NotificationKind::Success, "Curso eliminado");
        let err = center.push(NotificationKind::Error, "No se pudo conectar con el servidor");
        assert_eq!(ok.auto_close_ms(), Some(3000));
        assert_eq!(err.auto_close_ms(), None);
        assert_eq!(center.items().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_notification() {
        let mut center = NotificationCenter::default();
        let a = center.push(NotificationKind::Success, "a");
        let b = center.push(NotificationKind::Error, "b");
        center.dismiss(a.id);
        center.dismiss(a.id);
        assert_eq!(center.items(), &[b]);
    }

    #[test]
    fn ids_are_unique() {
        let mut center = NotificationCenter::default();
        let a = center.push(NotificationKind::Success, "x");
        center.dismiss(a.id);
        let b = center.push(NotificationKind::Success, "x");
        assert_ne!(a.id, b.id);
    }
}
