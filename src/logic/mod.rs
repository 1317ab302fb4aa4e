#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod assignment;
pub mod expr;
pub mod parser;
pub mod scanner;
pub mod solver;
pub mod token;
