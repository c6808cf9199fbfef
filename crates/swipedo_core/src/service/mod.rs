//! Screen-level use-case services.
//!
//! # Responsibility
//! - Own all screen state and expose it only through command methods.
//! - Publish a fresh snapshot to observers after every accepted command.

pub mod todo_service;
