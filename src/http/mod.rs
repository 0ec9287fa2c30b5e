//! HTTP server module for the StudyHub schedule backend.
//!
//! This module provides an axum-based HTTP server that exposes the schedule
//! subsystem as a REST API. It reuses the service layer, the repository
//! pattern, and the import pipeline from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - Multipart upload spooling for imports                  │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer / Import Orchestrator                      │
//! │  - CRUD business logic                                    │
//! │  - Two-phase preview/commit import                        │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - Data persistence                                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
