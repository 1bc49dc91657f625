//! Domain types, errors, and validation rules for the notes service.
//!
//! This crate has no database or HTTP dependencies so the rules it defines
//! can be unit tested in isolation and shared by the `db` and `api` layers.

pub mod config;
pub mod error;
pub mod note;
pub mod patch;
pub mod types;
