//! Loan and return bookkeeping.
//!
//! Each function checks the request against the store, mutates the matching
//! item in place and appends exactly one audit entry. On failure nothing is
//! mutated and nothing is appended.

use crate::audit::AuditLog;
use crate::error::{AppError, AppResult};
use crate::models::{AuditEntry, LoanRequest, ReturnRequest};
use crate::store::InventoryStore;

/// Move `req.quantity` from available to reserved. All-or-nothing: if the
/// item has less than requested available, nothing changes.
pub fn loan<'a>(
    store: &mut InventoryStore,
    log: &'a mut AuditLog,
    req: &LoanRequest,
) -> AppResult<&'a AuditEntry> {
    let item = store.find_mut(req.item_id).ok_or(AppError::NotFound)?;

    if item.quantity < req.quantity {
        return Err(AppError::InsufficientStock);
    }

    item.quantity -= req.quantity;
    item.reserved = item.reserved.saturating_add(req.quantity);

    Ok(log.append(AuditEntry::loan(item.name.clone(), req.quantity, req.to_location.clone())))
}

/// Move `req.quantity` back to available. Returns are never rejected for
/// size: `reserved` is clamped at zero, `quantity` is not capped.
pub fn return_item<'a>(
    store: &mut InventoryStore,
    log: &'a mut AuditLog,
    req: &ReturnRequest,
) -> AppResult<&'a AuditEntry> {
    let item = store.find_mut(req.item_id).ok_or(AppError::NotFound)?;

    item.quantity = item.quantity.saturating_add(req.quantity);
    item.reserved -= req.quantity.min(item.reserved);

    Ok(log.append(AuditEntry::returned(item.name.clone(), req.quantity, req.from_location.clone())))
}
