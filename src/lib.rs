//! Storefront Library
//!
//! This library provides the core of a digital-goods storefront: catalog
//! filtering and sorting, a session cart, and REST and MCP surfaces over them.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod mcp;
pub mod session;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
