//! API layer - REST and native (in-process) entry points

pub mod native;
pub mod rest;
