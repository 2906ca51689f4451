/*!
 * Process Module
 * Process descriptors and runtime-field initialization
 */

pub mod runtime;
pub mod types;

// Re-export for convenience
pub use runtime::reset_runtime_fields;
pub use types::{Process, SystemProcessSample, MAX_PROCESS_NAME};
