//! # Staffdesk Domain Models
//!
//! The employee record and the payloads that create and update it.
//!
//! - **Employee**: the persisted record (`id`, `name`, `email`, `department`)
//! - **NewEmployee**: create payload, every field required
//! - **EmployeeUpdate**: merge-patch payload built from [`Patch`] fields
//!
//! Payloads derive `validator::Validate`; text fields are capped at the
//! column width of the `employees` table.

pub mod employee;
pub mod patch;

#[cfg(test)]
pub mod property_tests;

pub use employee::*;
pub use patch::Patch;
