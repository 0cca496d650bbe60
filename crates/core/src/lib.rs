//! Core domain types and storage contract for the taskman service.
//!
//! This crate is pure: no I/O, no HTTP. It defines the [`task::Task`]
//! entity, the [`storage::TaskRepository`] trait implemented by storage
//! backends, and the error types shared between them.

pub mod storage;
pub mod task;
