//! # IO Module
//!
//! Interface layer exposing the domain to clients. Currently REST only.

pub mod rest;
