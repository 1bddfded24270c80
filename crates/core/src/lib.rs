//! # Average Core
//!
//! This crate is the internal core library of the `average` command line tool.
//! It contains the numeric value type and the statistical functions on top of
//! which the binary is implemented.

#[macro_use]
mod mac;

pub mod env;
pub mod err;
pub mod fnc;
pub mod val;
