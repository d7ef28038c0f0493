//! # Qualifier Architecture
//!
//! Qualifier keeps a list of quotes typed as one-line commands:
//!
//! ```text
//! quote "<text>"            store the text as is
//! quote uwu "<text>"        store it uwu-ified
//! quote piglatin "<text>"   store it in pig latin
//! quote list                show everything stored, one `- ` line each
//! ```
//!
//! The library does no I/O. The binary (`cli/`, wired by `main.rs`) is one
//! client of it.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  CLI (cli/)   args, stdin loop, colours, exit codes    │
//! └────────────────────────────────────────────────────────┘
//!                           │
//! ┌────────────────────────────────────────────────────────┐
//! │  API (api.rs)  parse a line, dispatch, return result   │
//! └────────────────────────────────────────────────────────┘
//!                           │
//! ┌────────────────────────────────────────────────────────┐
//! │  Commands (commands/)  create / list                   │
//! │  Model + transforms (model.rs, transform.rs)           │
//! └────────────────────────────────────────────────────────┘
//!                           │
//! ┌────────────────────────────────────────────────────────┐
//! │  Storage (store/)  QuoteStore trait, InMemoryStore     │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors and notices
//!
//! Anything that stops a command (bad line, quote too long, transform that
//! changes nothing) is a [`error::QualifierError`]. Things the user should
//! hear about but that do not stop the command (empty quote, duplicate,
//! partially transformed quote, `list` given a quote) are
//! [`commands::CmdMessage`] warnings on the returned result.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point, `run_command`
//! - [`parser`]: command line grammar
//! - [`commands`]: create and list logic
//! - [`model`]: `Quote` and `VariantMode`
//! - [`transform`]: the three text transforms
//! - [`store`]: storage abstraction and the in-memory store
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
pub mod transform;
