use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;

use crate::generation_engine::checks::band_index;
use crate::generation_engine::models::LottoResult;

const COLOR_GROUPS: [&str; 5] = ["1-10", "11-20", "21-30", "31-40", "41-45"];

/// Color group key the web client maps to ball styling, by number band.
pub fn color_group(number: u8) -> &'static str {
    COLOR_GROUPS[band_index(number)]
}

/// One-line share/copy text, e.g. `[random] 3, 7, 19, 24, 31, 42`.
pub fn to_share_text(result: &LottoResult) -> String {
    let numbers = result
        .numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}] {}", result.method, numbers)
}

/// Build the result payload the web client renders: one entry per ball with
/// its color group, plus the method tag and an RFC 3339 timestamp.
pub fn to_client_payload(result: &LottoResult) -> Value {
    let balls: Vec<Value> = result
        .numbers
        .iter()
        .map(|&n| {
            json!({
                "value": n,
                "colorGroup": color_group(n),
            })
        })
        .collect();
    json!({
        "id": result.id,
        "method": result.method.to_string(),
        "generatedAt": result.generated_at.format(&Rfc3339).unwrap_or_default(),
        "balls": balls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation_engine::generator::create_result;
    use crate::generation_engine::models::GenerationMethod;

    #[test]
    fn color_groups_follow_the_bands() {
        assert_eq!(color_group(1), "1-10");
        assert_eq!(color_group(10), "1-10");
        assert_eq!(color_group(11), "11-20");
        assert_eq!(color_group(33), "31-40");
        assert_eq!(color_group(45), "41-45");
    }

    #[test]
    fn share_text_carries_method_and_numbers() {
        let result = create_result([3, 7, 19, 24, 31, 42], GenerationMethod::Random);
        assert_eq!(to_share_text(&result), "[random] 3, 7, 19, 24, 31, 42");
    }

    #[test]
    fn client_payload_has_six_grouped_balls() {
        let result = create_result([5, 15, 25, 35, 41, 45], GenerationMethod::Balanced);
        let payload = to_client_payload(&result);

        assert_eq!(payload["method"], "balanced");
        assert_eq!(payload["id"], Value::String(result.id.clone()));
        let balls = payload["balls"].as_array().unwrap();
        assert_eq!(balls.len(), 6);
        assert_eq!(balls[0]["value"], 5);
        assert_eq!(balls[0]["colorGroup"], "1-10");
        assert_eq!(balls[5]["colorGroup"], "41-45");
        assert!(!payload["generatedAt"].as_str().unwrap().is_empty());
    }
}
