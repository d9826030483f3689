//! snipbox: a local code snippet manager backed by SQLite.
//!
//! The store module is the whole core — a thin data-access object over a
//! single `snippets` table. Everything else (cli, config, report) is the
//! presentation layer around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod store;
