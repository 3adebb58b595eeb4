//! Main module for the parsing engine

pub mod building;
pub mod grammar;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod tree;
