//! # Repository Layer
//!
//! One repository per table, each holding a pool handle and acquiring a
//! connection or transaction scope per operation:
//!
//! - [`product`] - catalog CRUD, filtered listings, low-stock alerts
//! - [`sale`] - sale registration, joined listings, revenue report
//! - [`log`] - append-only audit log

pub mod log;
pub mod product;
pub mod sale;
