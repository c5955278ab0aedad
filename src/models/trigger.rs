//! Scheduler trigger event handling.

use serde_json::Value;

/// Event field selecting a dry run.
pub const DRY_RUN_FIELD: &str = "dryrun";

/// Decide whether a trigger event requests a dry run.
///
/// - absent field: `false`
/// - boolean: as given
/// - string: `true` for "true", "yes" or "y" (any case), otherwise `false`
/// - anything else, including null: `true`, so ambiguous input never sends
pub fn is_dry_run(event: &Value) -> bool {
    let Some(flag) = event.get(DRY_RUN_FIELD) else {
        return false;
    };

    match flag {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.to_lowercase().as_str(), "true" | "yes" | "y"),
        _ => true,
    }
}
