// src/lib.rs — Library root for Stockroom

pub mod cli;
pub mod infra;
pub mod inventory;
pub mod session;
pub mod util;
pub mod web;
