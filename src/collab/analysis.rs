use rand::Rng;

use crate::{
    effects::mode::EffectMode,
    foundation::error::{FractalError, FractalResult},
};

/// Score returned when the analysis service cannot be reached or answers garbage.
pub const FALLBACK_SCORE: u8 = 65;

/// Scored feedback for one project concept.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViralAnalysis {
    /// 0..=100.
    pub score: u8,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

impl ViralAnalysis {
    /// Result used when no API key is configured. Score is uniform in `[70, 100)`.
    pub fn mock(rng: &mut impl Rng) -> Self {
        Self {
            score: rng.gen_range(70..100),
            feedback: "Analysis requires valid API Key. Showing mock data. \
                       The content shows strong visual rhythm."
                .to_string(),
            suggestions: strings(&[
                "Add a hook in the first 3 seconds",
                "Increase saturation",
                "Use a trending audio track",
            ]),
        }
    }

    /// Result used when a configured service call fails.
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            feedback: "Could not reach AI analysis service.".to_string(),
            suggestions: strings(&[
                "Check internet connection",
                "Try a different title",
                "Add more fractal depth",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAnalysis {
    score: i64,
    feedback: String,
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Validate the model's JSON answer.
///
/// Accepts the object bare or inside a Markdown code fence. Rejects missing fields,
/// wrong types, unknown fields and scores outside `0..=100`.
pub fn parse_analysis(text: &str) -> FractalResult<ViralAnalysis> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(FractalError::collaborator("analysis response was empty"));
    }
    let raw: RawAnalysis = serde_json::from_str(body)?;
    let score = u8::try_from(raw.score)
        .ok()
        .filter(|s| *s <= 100)
        .ok_or_else(|| {
            FractalError::validation(format!("analysis score {} is out of range", raw.score))
        })?;
    Ok(ViralAnalysis {
        score,
        feedback: raw.feedback.trim().to_string(),
        suggestions: raw
            .suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    })
}

fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Instruction sent to the text model for a virality analysis.
pub fn analysis_prompt(title: &str, description: &str, mode: EffectMode) -> String {
    format!(
        "Analyze the viral potential of a short-form video concept for a platform called 'FractalFlow'.\n\
         \n\
         Project Details:\n\
         Title: \"{title}\"\n\
         Description: \"{description}\"\n\
         Effect Mode: \"{mode}\"\n\
         \n\
         Provide a JSON response with:\n\
         - score: integer 0-100\n\
         - feedback: A short 1-sentence analysis of why it might go viral.\n\
         - suggestions: Array of 3 short, actionable tips to improve virality.",
        mode = mode.tag(),
    )
}

/// JSON schema the text model is asked to answer in.
pub fn analysis_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER" },
            "feedback": { "type": "STRING" },
            "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["score", "feedback", "suggestions"]
    })
}

#[cfg(test)]
#[path = "../../tests/unit/collab/analysis.rs"]
mod tests;
