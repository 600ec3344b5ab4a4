//! Wisdom Sanctuary: quiz-matched mentor conversations.

pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod journey;
