//! # oakline-db: Database Layer for the Oakline Ledger
//!
//! This crate provides database access for the Oakline furniture inventory
//! and sales ledger. It uses SQLite for local storage with sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Oakline Data Flow                          │
//! │                                                                 │
//! │  Form UI action (register sale, filter catalog, export)         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  oakline-db (THIS CRATE)                  │  │
//! │  │                                                           │  │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────┐    │  │
//! │  │   │  Database  │   │ Repositories │   │  Migrations  │    │  │
//! │  │   │ (pool.rs)  │◄──│ product.rs   │   │  (embedded)  │    │  │
//! │  │   │ SqlitePool │   │ sale.rs      │   │ 001_init.sql │    │  │
//! │  │   │            │   │ log.rs       │   │ 002_....sql  │    │  │
//! │  │   └────────────┘   └──────────────┘   └──────────────┘    │  │
//! │  │                                                           │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite database file (oakline.db)                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store and operation error types
//! - [`repository`] - Repository implementations (product, sale, log)
//! - [`export`] - CSV report exports
//! - [`seed`] - Demo catalog seeding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oakline_db::{Database, DbConfig};
//! use oakline_core::{NewProduct, NewSale};
//!
//! let db = Database::new(DbConfig::new("path/to/oakline.db")).await?;
//!
//! let desk = db.products()
//!     .insert(&NewProduct::new("Writing Desk #1", "Table", 4500.0))
//!     .await?;
//! let receipt = db.sales().register(&NewSale::new(desk.id, 1)).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, LedgerError};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::log::LogRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;

// Export re-exports
pub use export::{export_revenue_csv, export_stock_csv};

// =============================================================================
// Integration Tests
// =============================================================================
