pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod global;
pub mod meeting;
pub mod normalizer;
pub mod status;
