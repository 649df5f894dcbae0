//! Output formatting utilities for the CLI.

use serde::Serialize;

/// A command result that can be printed for humans or as JSON.
pub trait CommandOutput: Serialize {
    /// Plain text form.
    fn to_human(&self) -> String;

    /// JSON form.
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print `result` to stdout in the requested mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        print!("{}", result.to_human());
    }
}
