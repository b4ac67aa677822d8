//! # Session State
//!
//! Everything that belongs to one shopping session.

use kart_core::Cart;

/// One customer's session: the cart plus the invoices written so far.
///
/// Created when the console starts and dropped when it exits. Nothing in
/// here is persisted; only the invoice files outlive the session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub cart: Cart,

    /// Artifact file names, oldest first.
    invoices: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a written invoice file.
    pub fn record_invoice(&mut self, file_name: impl Into<String>) {
        self.invoices.push(file_name.into());
    }

    /// Most recent invoice file, if any order was placed.
    pub fn last_invoice(&self) -> Option<&str> {
        self.invoices.last().map(String::as_str)
    }

    pub fn invoices(&self) -> &[String] {
        &self.invoices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionState::new();
        assert!(session.cart.is_empty());
        assert_eq!(session.last_invoice(), None);
    }

    #[test]
    fn test_last_invoice_tracks_latest() {
        let mut session = SessionState::new();
        session.record_invoice("march.txt");
        session.record_invoice("april.txt");

        assert_eq!(session.last_invoice(), Some("april.txt"));
        assert_eq!(session.invoices(), ["march.txt", "april.txt"]);
    }
}
