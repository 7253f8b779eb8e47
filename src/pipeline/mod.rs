//! Pipeline stages for one `pdftotext` run.
//!
//! Each submodule implements exactly one step and is tested on its own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ command ──▶ process ──▶ postprocess ──▶ sink
//! (resolve)  (argv)    (spawn+timeout) (trim)     (save only)
//! ```
//!
//! 1. [`input`]: check a local path, or spool a handle / bytes to a temp file
//! 2. [`command`]: assemble `<binary> <options…> <input> -`
//! 3. [`process`]: spawn the child and wait for it under the timeout
//! 4. [`postprocess`]: decode stdout and trim its edges
//! 5. [`sink`]: write the text to a path or handle (`save` only)

pub mod command;
pub mod input;
pub mod postprocess;
pub mod process;
pub mod sink;
