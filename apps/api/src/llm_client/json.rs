//! Output cleaner for model text that is supposed to be JSON.
//!
//! Models wrap JSON in markdown fences or add a sentence before/after it.
//! Everything here is best effort: callers fall back to raw text or a
//! default payload when decoding fails.

use serde::de::DeserializeOwned;

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = if let Some(stripped) = text.strip_prefix("```json") {
        stripped
    } else if let Some(stripped) = text.strip_prefix("```JSON") {
        stripped
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
    } else {
        return text;
    };

    let inner = inner.trim_start();
    inner
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(inner.trim_end())
}

/// Decodes model output as `T`.
///
/// Tries the fence-stripped text first, then the outermost `{...}` span and
/// the outermost `[...]` span independently, for replies that surround the
/// JSON with prose.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let stripped = strip_json_fences(text);
    let err = match serde_json::from_str(stripped) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    [('{', '}'), ('[', ']')]
        .into_iter()
        .filter_map(|(open, close)| outermost_span(stripped, open, close))
        .filter(|span| span.len() < stripped.len())
        .find_map(|span| serde_json::from_str(span).ok())
        .ok_or(err)
}

/// Slice from the first `open` to the last `close`, inclusive.
fn outermost_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"key\": 1}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": 1}");
    }

    #[test]
    fn test_parse_json_fenced_object() {
        let value: Value = parse_json("```json\n{\"match_score\": 70}\n```").unwrap();
        assert_eq!(value["match_score"], 70);
    }

    #[test]
    fn test_parse_json_recovers_object_from_prose() {
        let text = "Sure! Here is the analysis:\n{\"advice\": \"Add Docker\"}\nGood luck.";
        let value: Value = parse_json(text).unwrap();
        assert_eq!(value["advice"], "Add Docker");
    }

    #[test]
    fn test_parse_json_recovers_array_from_prose() {
        let value: Vec<u32> = parse_json("The numbers are [1, 2, 3].").unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_json_object_after_bracketed_prose() {
        let text = "Match analysis [v2]:\n{\"match_score\": 85, \"missing_keywords\": [\"python\"], \"advice\": \"Good\"}";
        let value: Value = parse_json(text).unwrap();
        assert_eq!(value["match_score"], 85);
        assert_eq!(value["missing_keywords"][0], "python");
    }

    #[test]
    fn test_parse_json_array_after_braced_prose() {
        let value: Vec<u32> = parse_json("Scores {draft}: [4, 5]").unwrap();
        assert_eq!(value, vec![4, 5]);
    }

    #[test]
    fn test_parse_json_plain_text_fails() {
        assert!(parse_json::<Value>("I could not analyse this resume.").is_err());
    }
}
