//! Modal stack for managing overlays

/// Represents a modal overlay that can be displayed on top of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing mouse and keyboard controls
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
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal unless it is already open
    pub fn push(&mut self, modal: Modal) {
        if !self.contains(modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn contains(&self, modal: Modal) -> bool {
        self.stack.contains(&modal)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_pushed_once() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.is_empty());
    }
}
