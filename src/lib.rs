//! linear-classifiers: linear models for labeled tabular data.
//!
//! This crate provides two single-output linear models (a perceptron and an
//! Adaline) behind a shared training/inference trait, a generic one-vs-all
//! wrapper that composes K binary models into a multi-class classifier, and
//! the data handling, ingestion, and evaluation helpers used by the
//! `evaluate` binary.
//!
//! The design favors small, testable modules; training is deterministic
//! given a fixed input order, and the only randomness in the crate lives in
//! the train/test partitioning helper.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod models;
pub mod multiclass;
pub mod stats;
