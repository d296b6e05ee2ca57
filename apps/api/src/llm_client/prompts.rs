// Shared prompt fragments for every Gemini call.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Disclaimer the model must open every health-related answer with.
pub const MEDICAL_DISCLAIMER: &str = "⚠️ **Disclaimer:** I am an AI, not a doctor. \
    This is for informational purposes only. \
    Please consult a healthcare professional for medical advice.";

/// Non-negotiable safety rules appended after the persona instruction.
/// Replace `{disclaimer}` before sending.
pub const CRITICAL_RULES_TEMPLATE: &str = r#"CRITICAL RULES:
1. MEDICAL DISCLAIMER: You MUST start every health-related response with: "{disclaimer}"
2. EMERGENCY PROTOCOL: If the user mentions severe symptoms (chest pain, difficulty breathing, severe bleeding, thoughts of self-harm), you MUST immediately tell them to call emergency services (911/988) and DO NOT provide other advice.
3. FORMAT: Use Markdown. Use bullet points for lists."#;

/// Instruction that enforces bare JSON output.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON in this EXACT format \
    (no markdown code blocks, no text outside the JSON object):";

/// Renders the critical rules block with the disclaimer filled in.
pub fn critical_rules() -> String {
    render_template(CRITICAL_RULES_TEMPLATE, &[("disclaimer", MEDICAL_DISCLAIMER)])
}

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are copied verbatim and never rescanned, so user text
/// containing `{...}` reaches the model unchanged. Braces that do not name a
/// known placeholder (such as JSON examples) are left as-is.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = values.iter().find_map(|(name, value)| {
            tail.strip_prefix(*name)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_rules_embed_disclaimer_verbatim() {
        let rules = critical_rules();
        assert!(rules.contains(MEDICAL_DISCLAIMER));
        assert!(!rules.contains("{disclaimer}"));
    }

    #[test]
    fn test_render_template_does_not_rescan_values() {
        let rendered = render_template(
            "{a} and {b}",
            &[("a", "{b}"), ("b", "{a}")],
        );
        assert_eq!(rendered, "{b} and {a}");
    }

    #[test]
    fn test_render_template_keeps_unknown_braces() {
        let rendered = render_template(r#"{"kcal": {n}} {missing"#, &[("n", "2000")]);
        assert_eq!(rendered, r#"{"kcal": 2000} {missing"#);
    }

    #[test]
    fn test_critical_rules_name_emergency_numbers() {
        let rules = critical_rules();
        assert!(rules.contains("911/988"));
        assert!(rules.contains("thoughts of self-harm"));
    }
}
