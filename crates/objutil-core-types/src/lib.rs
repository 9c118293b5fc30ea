//! Core types shared across ObjUtil facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by anything that wants to filter ObjUtil log events:
//!
//! - **Field keys**: component, op, event, duration and payload sizes
//! - **Event names**: start / end / end_error

pub mod schema;
