//! Infrastructure layer - storage adapters

pub mod storage;
