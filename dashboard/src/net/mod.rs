//! Networking for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The endpoint table and DTOs live in the `contracts` crate; `api` is the
//! single browser executor that sends those requests.

pub mod api;
