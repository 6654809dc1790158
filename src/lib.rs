// ABOUTME: Library crate for anxcheck exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod config;
pub mod models;
