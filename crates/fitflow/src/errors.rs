//! Error handling and exit codes.

use fitflow_core::constants::exit_codes;
use fitflow_core::error::FlowError;

/// Map a run error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(flow) = err.downcast_ref::<FlowError>() {
        return flow_exit_code(flow);
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return exit_codes::ERROR_STORAGE;
    }
    exit_codes::ERROR_GENERIC
}

fn flow_exit_code(err: &FlowError) -> i32 {
    match err {
        FlowError::Config(_) => exit_codes::ERROR_CONFIG,
        e if e.is_storage() => exit_codes::ERROR_STORAGE,
        _ => exit_codes::ERROR_GENERIC,
    }
}
