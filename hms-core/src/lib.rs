// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for hms-core, orchestrating password sealing, session storage, and the hospital record services.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # HMS Core Library
//!
//! This library provides the core functionality for the hospital management
//! demo: a one-time pad style cipher used to seal stored passwords, a
//! tab-scoped session store behind an explicit repository interface, and the
//! account, record, scheduling and billing services built on top of both.

/// Account creation, login, and system seeding.
pub mod auth;
/// Bill creation, lookup, and invoice rendering.
pub mod billing;
/// Cryptographic operations for sealing and unsealing text.
pub mod crypto;
/// Utilities for generating fresh pad keys.
pub mod key_generator;
/// The record types held in the session store.
pub mod models;
/// Patient and doctor record keeping.
pub mod records;
/// Appointment booking and search.
pub mod scheduling;
/// The session-scoped repository and its in-memory implementation.
pub mod store;
