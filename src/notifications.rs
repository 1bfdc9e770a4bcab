//! User-facing notices and pending confirmations.

use std::fmt;

use crate::{orders::OrderId, products::ProductId};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// An operation succeeded.
    Success,

    /// An operation failed.
    Error,
}

/// Identifier of a notice within its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

/// A dismissible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Identifier
    pub id: NoticeId,

    /// Severity
    pub level: NoticeLevel,

    /// Message
    pub message: String,
}

/// What the user was doing when something failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Loading a section
    Load,

    /// Creating or editing
    Save,

    /// Deleting
    Delete,

    /// Adjusting stock
    Update,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Self::Load => "carregar",
            Self::Save => "salvar",
            Self::Delete => "excluir",
            Self::Update => "atualizar",
        }
    }
}

/// What the operation was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Dashboard figures
    Dashboard,

    /// The product list
    Products,

    /// A single product
    Product,

    /// The order list
    Orders,

    /// A single order
    Order,

    /// Stock levels
    Stock,
}

impl Subject {
    fn noun(self) -> &'static str {
        match self {
            Self::Dashboard => "dados do dashboard",
            Self::Products => "produtos",
            Self::Product => "produto",
            Self::Orders => "pedidos",
            Self::Order => "pedido",
            Self::Stock => "estoque",
        }
    }
}

/// Message for a failed operation, e.g. `Erro ao carregar produtos`.
#[must_use]
pub fn failure_message(operation: Operation, subject: Subject) -> String {
    format!("Erro ao {} {}", operation.verb(), subject.noun())
}

/// Queue of notices waiting to be dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// An empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);

        self.next_id += 1;
        self.items.push(Notice {
            id,
            level,
            message: message.into(),
        });

        id
    }

    /// Add a success notice.
    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Success, message)
    }

    /// Add an error notice.
    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Error, message)
    }

    /// Add the error notice for a failed operation.
    pub fn failure(&mut self, operation: Operation, subject: Subject) -> NoticeId {
        self.error(failure_message(operation, subject))
    }

    /// Remove a notice. Returns whether it was present.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();

        self.items.retain(|notice| notice.id != id);

        self.items.len() != before
    }

    /// Notices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    /// Number of pending notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A destructive action waiting for the user's go-ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Delete a product
    DeleteProduct(ProductId),

    /// Delete an order
    DeleteOrder(OrderId),
}

impl Confirmation {
    /// Question shown to the user.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Self::DeleteProduct(_) => "Tem certeza que deseja excluir este produto?",
            Self::DeleteOrder(_) => "Tem certeza que deseja excluir este pedido?",
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages_name_operation_and_subject() {
        assert_eq!(
            failure_message(Operation::Load, Subject::Products),
            "Erro ao carregar produtos"
        );
        assert_eq!(
            failure_message(Operation::Save, Subject::Order),
            "Erro ao salvar pedido"
        );
        assert_eq!(
            failure_message(Operation::Load, Subject::Dashboard),
            "Erro ao carregar dados do dashboard"
        );
        assert_eq!(
            failure_message(Operation::Update, Subject::Stock),
            "Erro ao atualizar estoque"
        );
    }

    #[test]
    fn notices_are_dismissed_by_id() {
        let mut notices = Notices::new();

        let first = notices.success("ok");
        let second = notices.failure(Operation::Delete, Subject::Product);

        assert!(notices.dismiss(first));
        assert!(!notices.dismiss(first));
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices.iter().next().map(|notice| (notice.id, notice.level)),
            Some((second, NoticeLevel::Error))
        );
    }

    #[test]
    fn confirmations_carry_prompts() {
        assert_eq!(
            Confirmation::DeleteOrder(OrderId(7)).prompt(),
            "Tem certeza que deseja excluir este pedido?"
        );
    }
}
