//! Shared utilities and error types for the ballot contract suite.
//!
//! This crate provides:
//! - [`CommonError`]: error codes shared by every contract.
//! - [`access`]: one-shot admin initialisation and admin guards.
//! - [`ttl`]: the storage TTL policy every contract bumps entries with.
//!
//! Contract-specific errors map these codes into their own enums via
//! `From<CommonError>`, so `?` works across the boundary.

#![no_std]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use soroban_sdk::contracterror;

pub mod access;
pub mod ttl;

/// Standardised error codes shared by every contract in the workspace.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authentication & authorisation |
/// | 30 – 39 | Validation / input             |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 10,
    InvalidInput = 30,
}
