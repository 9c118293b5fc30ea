//! Structured logging for the object utilities
//!
//! `init` installs the process subscriber, the `log_op_*` macros mark
//! operation boundaries and `test_capture` records events for assertions.
//!
//! ```rust
//! use objutil_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Only `ObjUtil::pick` can fail, so it is the one operation with
//! start/end events. The pure helpers log at `debug`, keeping a render
//! loop quiet under the production filter.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
