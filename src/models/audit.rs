use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed loan or return. The item name is copied at append time so the
/// trail still reads correctly if the item is renamed later.
///
/// Serialized flat, e.g.
/// `{"action":"loan","item":"Gloss Label Roll","quantity":10,"to":"Warehouse B","timestamp":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum AuditEntry {
    Loan {
        item: String,
        quantity: u32,
        to: String,
        timestamp: DateTime<Utc>,
    },
    Return {
        item: String,
        quantity: u32,
        from: String,
        timestamp: DateTime<Utc>,
    },
}

impl AuditEntry {
    pub fn loan(item: impl Into<String>, quantity: u32, to: impl Into<String>) -> Self {
        AuditEntry::Loan {
            item: item.into(),
            quantity,
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn returned(item: impl Into<String>, quantity: u32, from: impl Into<String>) -> Self {
        AuditEntry::Return {
            item: item.into(),
            quantity,
            from: from.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            AuditEntry::Loan { .. } => "loan",
            AuditEntry::Return { .. } => "return",
        }
    }

    pub fn item(&self) -> &str {
        match self {
            AuditEntry::Loan { item, .. } | AuditEntry::Return { item, .. } => item,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            AuditEntry::Loan { quantity, .. } | AuditEntry::Return { quantity, .. } => *quantity,
        }
    }

    /// Destination for a loan, origin for a return.
    pub fn location(&self) -> &str {
        match self {
            AuditEntry::Loan { to, .. } => to,
            AuditEntry::Return { from, .. } => from,
        }
    }
}
