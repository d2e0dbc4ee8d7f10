// appvox-core/src/lib.rs

#![allow(missing_docs)]

// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the external collaborators (review listing, classifier)
pub mod ports;

// 2. Domain (pipeline core)
// Canonical record, mapper, cleaner, volume check.
// Depends on NOTHING else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementation (Play Store client, config files, CSV export)
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Collect, Normalize, Score)
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use appvox_core::AppvoxError;
pub use error::AppvoxError;
