//! Lexiquest - adaptive vocabulary quizzing
//!
//! Lexiquest picks quiz words at random, weighted toward the words you have
//! practiced least, and lowers a word's weight every time you practice it.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod progress;
pub mod quiz;
pub mod selection;
pub mod wordlist;

pub use config::Config;
pub use error::QuizError;
pub use quiz::QuizService;
