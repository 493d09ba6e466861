use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-facing outcome of a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        return Self {
            message: message.into(),
            kind: NotificationKind::Success,
        };
    }

    pub fn error(message: impl Into<String>) -> Self {
        return Self {
            message: message.into(),
            kind: NotificationKind::Error,
        };
    }

    pub fn is_success(&self) -> bool {
        return self.kind == NotificationKind::Success;
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self.kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };

        return write!(f, "{label}: {}", self.message);
    }
}
