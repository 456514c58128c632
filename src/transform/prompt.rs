//! Rewriting prompt sent to the language model

use crate::tone::ToneId;

/// Build the instruction prompt for rewriting `text` in `tone`
pub fn build_prompt(text: &str, tone: ToneId) -> String {
    let phrase = tone.prompt_phrase();
    format!(
        "Please rewrite the following text to match a {phrase} tone. Keep the core meaning and \
information intact, but adjust the language style, formality level, and word choice to fit \
the requested tone.

Original text: \"{text}\"

Instructions:
- Maintain all factual information and key points
- Adjust vocabulary, sentence structure, and phrasing to match the {phrase} tone
- Keep the same approximate length unless the tone naturally requires expansion or compression
- Return only the rewritten text without explanations or meta-commentary
- Don't add em dashes or quotation marks to the text.

Rewritten text:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::{Formality, Length};

    #[test]
    fn test_prompt_names_tone_and_quotes_text() {
        let prompt = build_prompt("hi there", ToneId::new(Formality::Casual, Length::Expanded));
        assert!(prompt.contains("match a casual expanded tone"));
        assert!(prompt.contains("Original text: \"hi there\""));
        assert!(prompt.trim_end().ends_with("Rewritten text:"));
    }

    #[test]
    fn test_prompt_forbids_em_dashes() {
        let prompt = build_prompt("x", ToneId::new(Formality::Balanced, Length::Balanced));
        assert!(prompt.contains("balanced neutral tone"));
        assert!(prompt.contains("Don't add em dashes"));
    }
}
