//! Prints the `queryVideos` reply for a desktop directory.
//!
//! Run with:
//! ```bash
//! cargo run -p core-service --example inventory_demo -- ~/Videos
//! ```

use bridge_traits::log_sink::LogLevel;
use core_runtime::logging::{init_logging, LoggingConfig};
use core_service::codec::{decode_envelope, encode_call};
use core_service::{bootstrap_desktop, MethodCall, MethodResult, METHOD_GET_SDK_INT, METHOD_QUERY_VIDEOS};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default().with_level(LogLevel::Debug))?;

    let roots: Vec<String> = env::args().skip(1).collect();
    let core = bootstrap_desktop(roots)?;

    for method in [METHOD_GET_SDK_INT, METHOD_QUERY_VIDEOS, "deleteVideo"] {
        let reply = core.handle_message(&encode_call(&MethodCall::new(method))?);
        match decode_envelope(&reply)? {
            MethodResult::Success(value) => {
                println!("{} -> {}", method, serde_json::to_string_pretty(&value)?)
            }
            MethodResult::Error { code, message, .. } => {
                println!("{} -> error {}: {}", method, code, message.unwrap_or_default())
            }
            MethodResult::NotImplemented => println!("{} -> not implemented", method),
        }
    }

    Ok(())
}
