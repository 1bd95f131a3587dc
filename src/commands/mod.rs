//! Command implementations for textsim

pub mod compare;
pub mod dispatch;
pub mod short;
