use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A transient message surfaced to the user, toast style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            level: Level::Success,
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            level: Level::Error,
            message,
        }
    }
}

/// Notification sink injected into the panels, so tests can assert the
/// exact messages emitted.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: String) {
        self.notify(Notification::success(message));
    }

    fn error(&self, message: String) {
        self.notify(Notification::error(message));
    }
}

/// The application's notification queue, rendered as dismissable banners.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Mutex<Vec<Notification>>,
}

impl Toasts {
    pub fn current(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .map(|queue| queue.clone())
            .unwrap_or_default()
    }

    pub fn dismiss(&self, index: usize) {
        if let Ok(mut queue) = self.queue.lock() {
            if index < queue.len() {
                queue.remove(index);
            }
        }
    }
}

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => tracing::info!("{}", notification.message),
            Level::Error => tracing::error!("{}", notification.message),
        }
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(notification);
        }
    }
}
