//! Command-line driver: configuration and the scripted inventory walkthrough.

pub mod config;
pub mod demo;
