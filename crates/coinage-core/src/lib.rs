//! Core types and trait definitions for the Coinage catalogue.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement [`tables::Tables`] and [`store::CatalogStore`]; the HTTP
//! layer talks only to the latter.

pub mod error;
pub mod id;
pub mod model;
pub mod resolve;
pub mod service;
pub mod store;
pub mod tables;
pub mod view;

pub use error::{Error, Result};
