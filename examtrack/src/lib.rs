//! examtrack library
//!
//! Exam records with live countdowns: a key-value persistence layer, the
//! temporal query engine, and the services a presentation layer drives.

pub mod app;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
