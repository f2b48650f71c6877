//! Notice queue
//!
//! Failed calls surface to the user on one of two surfaces: infrastructure
//! failures (network, timeout, server) as a dismissible banner that expires
//! on its own, everything else inline next to the relevant input. The
//! queue is an owned container handed to the rendering layer, not a global.

use chrono::{DateTime, Duration, Utc};
use shared::{ErrorSurface, HttpError, HttpErrorKind};
use std::sync::RwLock;

/// One user-visible notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub surface: ErrorSurface,
    pub kind: HttpErrorKind,
    pub message: String,
    /// Banners expire on their own; inline notices stay until dismissed
    pub expires_at: Option<DateTime<Utc>>,
}

/// Queue of pending notices
pub struct NoticeQueue {
    banner_ttl: Duration,
    entries: RwLock<Vec<Notice>>,
}

impl NoticeQueue {
    /// Create a queue with the default 6 second banner lifetime
    pub fn new() -> Self {
        Self::with_banner_ttl(Duration::seconds(6))
    }

    /// Create a queue with a custom banner lifetime
    pub fn with_banner_ttl(banner_ttl: Duration) -> Self {
        Self {
            banner_ttl,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Queue a notice for a failed call, routed by the error's surface
    pub fn push_error(&self, error: &HttpError) {
        let surface = error.surface();
        let expires_at = match surface {
            ErrorSurface::Banner => Some(Utc::now() + self.banner_ttl),
            ErrorSurface::Inline => None,
        };
        self.push(Notice {
            surface,
            kind: error.kind,
            message: error.message.clone(),
            expires_at,
        });
    }

    fn push(&self, notice: Notice) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice);
    }

    /// Notices still worth rendering at `now`
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notice> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|n| n.expires_at.is_none_or(|at| at > now))
            .cloned()
            .collect()
    }

    /// Drop notices whose lifetime has lapsed
    pub fn drain_expired(&self, now: DateTime<Utc>) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|n| n.expires_at.is_none_or(|at| at > now));
    }

    /// Remove everything (e.g. on navigation)
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_becomes_expiring_banner() {
        let queue = NoticeQueue::new();
        queue.push_error(&HttpError::from_status(502, "bad gateway"));

        let notices = queue.active(Utc::now());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].surface, ErrorSurface::Banner);
        assert!(notices[0].expires_at.is_some());
    }

    #[test]
    fn test_validation_error_is_inline_and_does_not_expire() {
        let queue = NoticeQueue::new();
        queue.push_error(&HttpError::validation("name is required"));

        let far_future = Utc::now() + Duration::hours(1);
        let notices = queue.active(far_future);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].surface, ErrorSurface::Inline);
        assert!(notices[0].expires_at.is_none());
    }

    #[test]
    fn test_banner_expires() {
        let queue = NoticeQueue::with_banner_ttl(Duration::seconds(3));
        queue.push_error(&HttpError::network("connection refused"));

        let now = Utc::now();
        assert_eq!(queue.active(now).len(), 1);
        assert_eq!(queue.active(now + Duration::seconds(5)).len(), 0);

        queue.drain_expired(now + Duration::seconds(5));
        // the expired entry is gone for good
        assert_eq!(queue.active(now).len(), 0);
    }

    #[test]
    fn test_clear() {
        let queue = NoticeQueue::new();
        queue.push_error(&HttpError::validation("x"));
        queue.push_error(&HttpError::server("y"));
        queue.clear();
        assert!(queue.active(Utc::now()).is_empty());
    }
}
