//! Prompt construction.

use crate::types::{GenerationMode, LanguageCode};

/// Build the combined text + image prompt for one lookup.
///
/// Pure and deterministic: the same inputs always yield the same string.
pub fn build_prompt(topic: &str, language: &LanguageCode, mode: GenerationMode) -> String {
    let common = common_instructions(language.display_name());
    let text = match mode {
        GenerationMode::Eli5 => format!(
            "Explain the term \"{topic}\" in 2-3 simple sentences, with common words, \
             as if you were explaining it to a 5-year-old child. {common}"
        ),
        GenerationMode::PracticalExamples => format!(
            "Provide a concise explanation of \"{topic}\" (around 3-4 sentences) focused on \
             its practical applications and real-world examples. {common}"
        ),
        GenerationMode::StepByStep => format!(
            "Explain how \"{topic}\" works or is done in a maximum of 5 clear, sequential steps. \
             Start each step on a new line with a number (1., 2., 3., ...). {common}"
        ),
        GenerationMode::Summary => format!(
            "Provide a schematic summary of the key points for \"{topic}\". Present it as a \
             short, unordered list of 3-5 points. Start each point on a new line with a \
             bullet point (·). {common}"
        ),
        GenerationMode::FunFacts => format!(
            "Provide a short, unordered list of 3-5 interesting and little-known fun facts \
             about \"{topic}\". Start each fact on a new line with a bullet point (·). {common}"
        ),
        GenerationMode::Encyclopedia => format!(
            "Provide a concise (around 4-6 sentences), technical, precise, and complete \
             encyclopedia-style single-paragraph definition for the term: \"{topic}\". \
             Be neutral. {common}"
        ),
    };

    format!("{text} {}", image_instruction(topic))
}

/// Prompt for a raw mode tag; unknown tags use the encyclopedia template.
pub fn build_prompt_for_tag(topic: &str, language: &LanguageCode, mode_tag: &str) -> String {
    build_prompt(topic, language, GenerationMode::from_tag(mode_tag))
}

fn common_instructions(language_name: &str) -> String {
    format!(
        "The response must be in {language_name}. Be informative. Do not use markdown, \
         titles, or any special formatting. Respond with only the text of the response itself."
    )
}

fn image_instruction(topic: &str) -> String {
    format!(
        "Also, generate a single illustrative, high-quality, landscape-format image \
         relevant to the topic \"{topic}\"."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SUFFIX: &str = "Also, generate a single illustrative, high-quality, landscape-format image relevant to the topic \"Rust\".";

    fn marker(mode: GenerationMode) -> &'static str {
        match mode {
            GenerationMode::Encyclopedia => "encyclopedia-style single-paragraph definition",
            GenerationMode::Eli5 => "as if you were explaining it to a 5-year-old child",
            GenerationMode::PracticalExamples => "practical applications and real-world examples",
            GenerationMode::StepByStep => "a maximum of 5 clear, sequential steps",
            GenerationMode::Summary => "schematic summary of the key points",
            GenerationMode::FunFacts => "little-known fun facts",
        }
    }

    #[test]
    fn every_mode_has_its_own_instruction() {
        for mode in GenerationMode::ALL {
            let prompt = build_prompt("Rust", &LanguageCode::Es, mode);
            assert!(prompt.contains("\"Rust\""), "{mode}: {prompt}");
            assert!(prompt.contains("The response must be in Spanish."), "{mode}");
            assert!(prompt.ends_with(SUFFIX), "{mode}");
            for other in GenerationMode::ALL.into_iter().filter(|m| *m != mode) {
                assert!(!prompt.contains(marker(other)), "{mode} leaked {other}");
            }
            assert!(prompt.contains(marker(mode)), "{mode}");
        }
    }

    #[test]
    fn encyclopedia_prompt_is_exact() {
        let prompt = build_prompt("Rust", &LanguageCode::En, GenerationMode::Encyclopedia);
        assert_eq!(
            prompt,
            "Provide a concise (around 4-6 sentences), technical, precise, and complete \
             encyclopedia-style single-paragraph definition for the term: \"Rust\". Be neutral. \
             The response must be in English. Be informative. Do not use markdown, titles, or \
             any special formatting. Respond with only the text of the response itself. \
             Also, generate a single illustrative, high-quality, landscape-format image \
             relevant to the topic \"Rust\"."
        );
    }

    #[test]
    fn unknown_language_resolves_to_english() {
        let prompt = build_prompt("Rust", &LanguageCode::from_code("xx"), GenerationMode::Eli5);
        assert!(prompt.contains("The response must be in English."));
    }

    #[test]
    fn unknown_mode_tag_uses_encyclopedia_template() {
        let lang = LanguageCode::De;
        assert_eq!(
            build_prompt_for_tag("Rust", &lang, "haiku"),
            build_prompt("Rust", &lang, GenerationMode::Encyclopedia)
        );
    }
}
