//! Domain logic for the daybook backend.
//!
//! Pure rules and shared types with no database or HTTP dependency:
//! the error taxonomy, category rules, search pattern escaping,
//! pagination math, and the object-storage seam.

pub mod category;
pub mod error;
pub mod pagination;
pub mod search;
pub mod storage;
pub mod types;
