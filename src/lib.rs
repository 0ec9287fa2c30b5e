//! # StudyHub Schedule Backend
//!
//! Schedule subsystem of the StudyHub student productivity backend.
//!
//! This crate manages weekly class-schedule entries and the bulk import
//! pipeline that loads them from user-supplied delimited text files. The
//! backend exposes a REST API via Axum for the mobile frontend.
//!
//! ## Features
//!
//! - **Schedule CRUD**: Create, list, update, and delete weekly class sessions
//! - **Bulk Import**: Two-phase (preview/commit) import from delimited text
//!   files with Vietnamese/English header recognition and per-row error
//!   reporting
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes shared across layers
//! - [`models`]: Domain types for schedule entries
//! - [`import`]: Header normalization, row validation, and the import orchestrator
//! - [`db`]: Repository pattern and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod import;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
