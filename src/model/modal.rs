//! Modal stack for managing overlays
//!
//! Acknowledgements, the quit confirmation and the help screen are all
//! overlays on top of the page. Only the top one receives input.

use crate::notify::Notifier;

/// Represents a modal overlay that can be displayed on top of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Acknowledgement raised by a stubbed action
    Alert { message: String },
    /// Quit confirmation dialog
    QuitConfirm,
    /// Key reference
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Every acknowledgement becomes an alert on top of whatever is showing
impl Notifier for ModalStack {
    fn notify(&mut self, message: &str) {
        tracing::info!(message, "acknowledgement raised");
        self.push(Modal::Alert {
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        assert!(stack.top().is_some());

        stack.push(Modal::Help);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::Help));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_notify_pushes_alert() {
        let mut stack = ModalStack::new();
        stack.notify("Login successful");
        stack.notify("Go to Home");

        assert_eq!(stack.len(), 2);
        assert_eq!(
            stack.top(),
            Some(&Modal::Alert {
                message: "Go to Home".to_string()
            })
        );
        stack.pop();
        assert_eq!(
            stack.top(),
            Some(&Modal::Alert {
                message: "Login successful".to_string()
            })
        );
    }
}
