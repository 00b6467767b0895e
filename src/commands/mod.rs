//! Command implementations for sqf

pub mod dispatch;
pub mod doctor;
pub mod preview;
pub mod report;

mod context;
