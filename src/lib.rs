//! AgriFresh - Produce spoilage scoring and dispatch decisions
//!
//! This crate scores storage conditions for spoilage risk and turns the
//! estimate into a dispatch priority, either by a fixed business rule or by
//! asking a hosted language model and extracting its structured answer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
