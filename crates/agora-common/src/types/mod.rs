//! Core data types for the Agora dashboard core

pub mod loadable;
pub mod outcome;
pub mod proposal;
