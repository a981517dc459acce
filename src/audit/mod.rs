use crate::models::AuditEntry;

/// Append-only transaction trail. Grows for the lifetime of the process.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry as stored.
    pub fn append(&mut self, entry: AuditEntry) -> &AuditEntry {
        let idx = self.entries.len();
        self.entries.push(entry);
        &self.entries[idx]
    }

    pub fn list(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
