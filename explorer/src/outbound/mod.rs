//! Outbound adapters implementing domain ports.

pub mod search_service;
