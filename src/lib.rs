//! files-bundler: concatenate source files of selected languages into one file
//!
//! The `bundle` pipeline validates a language list, discovers matching files
//! under a root directory, orders them and writes a single bundle. The
//! `create-rsp` command captures the same settings interactively and stores
//! them as a response file that `bundle @response.rsp` reads back.

pub mod cli;
pub mod config;
pub mod domain;
pub mod order;
pub mod render;
pub mod response;
pub mod scan;
pub mod utils;
