//! Terminal speed reader: one word at a time, with the optimal recognition
//! point highlighted and punctuation-aware pacing.

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod reading;
pub mod storage;
pub mod ui;
