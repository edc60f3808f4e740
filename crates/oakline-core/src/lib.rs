//! # oakline-core: Pure Business Logic for the Oakline Ledger
//!
//! This crate is the heart of the Oakline furniture ledger. It contains the
//! domain types and business rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Oakline Architecture                        │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │            Desktop Form UI (external, out of scope)       │  │
//! │  │    Catalog tab ──► Sales tab ──► Reports ──► Audit log    │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ oakline-core (THIS CRATE) ★                │  │
//! │  │                                                           │  │
//! │  │   ┌──────────┐   ┌──────────┐   ┌─────────────┐           │  │
//! │  │   │  types   │   │ pricing  │   │ validation  │           │  │
//! │  │   │ Product  │   │ discount │   │ form rules  │           │  │
//! │  │   │  Sale    │   │  math    │   │   checks    │           │  │
//! │  │   └──────────┘   └──────────┘   └─────────────┘           │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                   │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │                oakline-db (Database Layer)                │  │
//! │  │        SQLite queries, migrations, repositories           │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, Sale, LogEntry, filters)
//! - [`pricing`] - Discount arithmetic for sale registration
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog form validation and input parsing

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Operator name recorded in the audit log when no user is supplied.
///
/// The ledger is single-user; every station runs under this fixed operator
/// until per-user accounts exist.
pub const DEFAULT_OPERATOR: &str = "operator";

/// Default stock threshold for the replenishment alert listing.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Default cap on audit log entries returned to the journal tab.
pub const DEFAULT_LOG_LIMIT: u32 = 200;
