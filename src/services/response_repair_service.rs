use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Extracts the JSON object embedded in a raw model reply.
///
/// The reply is sliced to the span between the first `{` and the last `}`,
/// which drops any surrounding prose or markdown fencing, then parsed
/// strictly. If the strict parse fails, a bounded set of normalization rules
/// is applied and the parse retried exactly once: newlines and carriage
/// returns collapse to spaces, and doubled quotes (`""`, an artifact of some
/// model quoting styles) collapse to single quotes. No further repair is
/// attempted after that.
pub fn extract_json(reply: &str) -> AppResult<Value> {
    let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) else {
        return Err(AppError::NoJsonFound);
    };
    if end < start {
        return Err(AppError::NoJsonFound);
    }

    let slice = &reply[start..=end];

    match serde_json::from_str(slice) {
        Ok(value) => Ok(value),
        Err(strict_err) => {
            let normalized = normalize(slice);
            serde_json::from_str(&normalized)
                .map_err(|_| AppError::UnparsableJson(strict_err.to_string()))
        }
    }
}

fn normalize(slice: &str) -> String {
    slice
        .replace(['\n', '\r'], " ")
        .replace("\"\"", "\"")
}
