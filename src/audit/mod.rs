//! Audit logging for SpentSmart
//!
//! Every change to the ledger made through the menu or the command line is
//! appended to `audit.log` as one JSON object per line.
//!
//! - `AuditEntry`: timestamp, operation, affected part of the ledger, and
//!   optional before/after values.
//! - `AuditLogger`: appends entries and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use spentsmart::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(EntityType::Expense, Some(record.name().into()), &record);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
