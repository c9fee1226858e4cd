//! # redacted-server
//!
//! Thin HTTP adapter over the redaction pipeline. Exposes `GET /` and
//! `POST /` with an optional `text` parameter (plain-text response),
//! plus the static `/discover` manifest and a `/health` probe.

pub mod app;
pub mod config;
pub mod routes;
