//! Transient status messages that clear themselves.
//!
//! [`StatusMessage::show`] hands back a [`Ticket`]; [`StatusMessage::expire`] only
//! clears the message if that ticket is still the latest one. A message shown
//! while another is pending therefore replaces it and gets a full
//! [`STATUS_TTL`] of its own.

use std::time::Duration;

use crate::cell::StateCell;

/// How long a status message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

/// Identifies one call to [`StatusMessage::show`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusMessage {
    text: Option<String>,
    generation: u64,
}

impl StatusMessage {
    pub fn show(&mut self, text: impl Into<String>) -> Ticket {
        self.generation += 1;
        self.text = Some(text.into());
        Ticket(self.generation)
    }

    /// Clear the message if `ticket` is the most recent one. Returns whether it cleared.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Show `text` in `cell`, then clear it after [`STATUS_TTL`] unless replaced.
pub async fn flash(mut cell: impl StateCell<StatusMessage>, text: String) {
    let ticket = cell.update(|status| status.show(text));
    sleep(STATUS_TTL).await;
    cell.update(|status| status.expire(ticket));
}

/// Platform timer.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn stale_ticket_does_not_clear_newer_message() {
        let mut status = StatusMessage::default();
        let first = status.show("Project added successfully!");
        let second = status.show("Project deleted successfully!");

        assert!(!status.expire(first));
        assert_eq!(status.text(), Some("Project deleted successfully!"));
        assert!(status.expire(second));
        assert_eq!(status.text(), None);
        assert!(!status.expire(second));
    }

    #[tokio::test(start_paused = true)]
    async fn flash_clears_after_ttl() {
        let cell = Arc::new(Mutex::new(StatusMessage::default()));
        tokio::spawn(flash(cell.clone(), "Saved".to_string()));

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(cell.lock().unwrap().text(), Some("Saved"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(cell.lock().unwrap().text(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_flash_restarts_timer() {
        let cell = Arc::new(Mutex::new(StatusMessage::default()));
        tokio::spawn(flash(cell.clone(), "first".to_string()));

        tokio::time::sleep(Duration::from_secs(3)).await;
        tokio::spawn(flash(cell.clone(), "second".to_string()));

        // First timer fires at 5s but must leave "second" alone.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(cell.lock().unwrap().text(), Some("second"));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(cell.lock().unwrap().text(), None);
    }
}
