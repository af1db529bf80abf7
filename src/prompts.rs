pub const IMAGE_GENERATION: &str = include_str!("../data/prompts/image_generation.txt");
pub const VOCABULARY_ANALYSIS: &str = include_str!("../data/prompts/vocabulary_analysis.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!IMAGE_GENERATION.is_empty());
        assert!(!VOCABULARY_ANALYSIS.is_empty());
    }

    #[test]
    fn test_image_generation_has_placeholders() {
        assert!(IMAGE_GENERATION.contains("{{description}}"));
        assert!(IMAGE_GENERATION.contains("{{scene}}"));
    }

    #[test]
    fn test_vocabulary_analysis_has_placeholders() {
        assert!(VOCABULARY_ANALYSIS.contains("{{character}}"));
        assert!(VOCABULARY_ANALYSIS.contains("{{scene}}"));
    }

    #[test]
    fn test_vocabulary_analysis_names_all_fields() {
        for field in ["english", "korean", "chinese", "box2d"] {
            assert!(VOCABULARY_ANALYSIS.contains(field));
        }
    }
}
