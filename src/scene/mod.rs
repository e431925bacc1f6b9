//! Main module for the scene parser library

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
