//! Plum Blossom (Meihua) divination.
//!
//! Layers, innermost first:
//! - [`domain`]: trigram table, numerology, hexagram construction, casting
//! - [`application`]: input validation, services, interpretation payload
//! - [`infrastructure`]: clock implementations, service container
//! - [`cli`]: argument parsing, commands, terminal rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
