//! Interpretation request payload
//!
//! Projects a casting into the JSON shape consumed by the text-generation
//! backend, and renders the prompt sent along with it. Nothing here talks
//! to the network.

use serde::Serialize;

use crate::domain::{DivinationResult, Hexagram, Trigram};

/// Timestamp layout used in the payload and prompt.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Upper/lower trigram names and natures of one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramSummary {
    pub upper: String,
    pub upper_nature: String,
    pub lower: String,
    pub lower_nature: String,
}

impl HexagramSummary {
    pub fn from_hexagram(hexagram: &Hexagram) -> Self {
        let (upper, lower) = (hexagram.upper(), hexagram.lower());
        Self {
            upper: label(upper),
            upper_nature: upper.element.to_string(),
            lower: label(lower),
            lower_nature: lower.element.to_string(),
        }
    }
}

fn label(trigram: &Trigram) -> String {
    format!("{} {}", trigram.display_name, trigram.name)
}

/// Request body for the interpretation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationRequest {
    pub stock_code: String,
    pub user_number: i64,
    pub timestamp: String,
    pub moving_line: u8,
    pub original: HexagramSummary,
    pub nuclear: HexagramSummary,
    pub changed: HexagramSummary,
}

impl InterpretationRequest {
    pub fn from_result(result: &DivinationResult) -> Self {
        Self {
            stock_code: result.identifier.clone(),
            user_number: result.user_number,
            timestamp: result.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            moving_line: result.moving_line.get(),
            original: HexagramSummary::from_hexagram(&result.original),
            nuclear: HexagramSummary::from_hexagram(&result.nuclear),
            changed: HexagramSummary::from_hexagram(&result.changed),
        }
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the prompt text for a text-generation model.
    pub fn render_prompt(&self) -> String {
        let hexagram = |title: &str, h: &HexagramSummary| {
            format!(
                "{title}: Upper {} ({}), Lower {} ({}).",
                h.upper, h.upper_nature, h.lower, h.lower_nature
            )
        };
        format!(
            r#"Role: master of Meihua Yishu (Plum Blossom divination) and stock market analyst.

Task: interpret the divination below for a user asking whether buying this stock will be profitable.

Context:
- Stock code: {stock_code}
- User number: {user_number}
- Divination time: {timestamp}

Hexagrams:
1. {original}
2. {nuclear}
3. {changed}
4. Moving line (動爻): line {moving_line}.

Requirements:
Answer with a single JSON object, no markdown fences, written in Traditional Chinese
except for "predictionEnglish":
{{
  "originalText": "judgement and explanation of the original hexagram",
  "movingLineText": "line statement and explanation of the moving line",
  "nuclearText": "short meaning of the nuclear hexagram",
  "changedText": "short meaning of the changed hexagram",
  "prediction": "financial analysis and outlook based on the five-phase body/use relation",
  "predictionEnglish": "English translation of prediction"
}}
"#,
            stock_code = self.stock_code,
            user_number = self.user_number,
            timestamp = self.timestamp,
            original = hexagram("Original hexagram (本卦)", &self.original),
            nuclear = hexagram("Nuclear hexagram (互卦)", &self.nuclear),
            changed = hexagram("Changed hexagram (變卦)", &self.changed),
            moving_line = self.moving_line,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::divine;
    use chrono::{FixedOffset, TimeZone};

    fn aapl() -> DivinationResult {
        let now = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 15, 10, 20, 10)
            .unwrap();
        divine("AAPL", 5, now)
    }

    #[test]
    fn given_result_when_projecting_then_uses_trigram_names_and_natures() {
        let request = InterpretationRequest::from_result(&aapl());

        assert_eq!(request.stock_code, "AAPL");
        assert_eq!(request.timestamp, "2024-03-15 10:20:10");
        assert_eq!(request.moving_line, 5);
        assert_eq!(request.original.upper, "巽 Xun");
        assert_eq!(request.original.upper_nature, "Wind");
        assert_eq!(request.original.lower, "乾 Qian");
        assert_eq!(request.original.lower_nature, "Heaven");
    }

    #[test]
    fn given_request_when_serializing_then_camel_case_fields() {
        let json = InterpretationRequest::from_result(&aapl()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stockCode"], "AAPL");
        assert_eq!(value["userNumber"], 5);
        assert_eq!(value["movingLine"], 5);
        assert_eq!(value["original"]["upperNature"], "Wind");
        assert!(value["nuclear"]["lowerNature"].is_string());
    }

    #[test]
    fn given_request_when_rendering_prompt_then_contains_all_fields() {
        let prompt = InterpretationRequest::from_result(&aapl()).render_prompt();
        assert!(prompt.contains("Stock code: AAPL"));
        assert!(prompt.contains("User number: 5"));
        assert!(prompt.contains("Upper 巽 Xun (Wind), Lower 乾 Qian (Heaven)"));
        assert!(prompt.contains("line 5."));
        assert!(prompt.contains("\"predictionEnglish\""));
    }
}
