//! Prompt templates and model-output parsing for the generation endpoints.

/// Framework used when the request names none
pub const DEFAULT_FRAMEWORK: &str = "unittest";

/// Prompt asking for a bullet list of single-sentence test-case summaries.
pub fn summaries_prompt(code_content: &str) -> String {
    format!(
        "Generate a bullet-point list of test case summaries for the following code. \
         Each summary should be a brief, single-sentence description of a test scenario. \
         Include functional, edge, and negative cases. \
         Do not generate any extra text, only the list.\n\nCode:\n{code_content}"
    )
}

/// Prompt asking for a single test-code block for one scenario.
pub fn test_code_prompt(code_content: &str, summary: &str, framework: &str) -> String {
    format!(
        "Generate the full, detailed test case code in Python using the '{framework}' framework \
         for the following code, based on the scenario: '{summary}'. \
         Return only the code block, with proper indentation and docstrings. \
         Do not include any extra text or explanations.\n\n\
         Code:\n{code_content}\n\nScenario: {summary}"
    )
}

/// Split model output into one summary per line.
///
/// Trims whitespace, strips a leading `- ` bullet marker, drops blank lines.
pub fn parse_summaries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("- ").trim_start_matches('-').trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summaries_strips_bullets_and_blank_lines() {
        let text = "- case one\n- case two\n";
        assert_eq!(parse_summaries(text), vec!["case one", "case two"]);
    }

    #[test]
    fn parse_summaries_handles_indentation_and_bare_lines() {
        let text = "  - covers empty input\n\nplain line\n   \n";
        assert_eq!(parse_summaries(text), vec!["covers empty input", "plain line"]);
    }

    #[test]
    fn parse_summaries_drops_bullet_only_lines() {
        assert!(parse_summaries("-\n- \n\n").is_empty());
    }

    #[test]
    fn summaries_prompt_embeds_the_code() {
        let prompt = summaries_prompt("def add(a, b): return a + b");
        assert!(prompt.contains("def add(a, b): return a + b"));
        assert!(prompt.contains("functional, edge, and negative"));
    }

    #[test]
    fn test_code_prompt_names_framework_and_scenario() {
        let prompt = test_code_prompt("def f(): pass", "covers empty input", "pytest");
        assert!(prompt.contains("test case code in Python"));
        assert!(prompt.contains("'pytest'"));
        assert!(prompt.contains("Scenario: covers empty input"));
        assert!(prompt.contains("def f(): pass"));
    }
}
