//! File names offered when an image is downloaded.
//!
//! The latest image uses the first 30 characters of its prompt, history
//! entries the first 20 plus their position. Spaces become underscores and
//! characters that would break a path are replaced as well.

const PREFIX: &str = "ai_generated_";
const LATEST_PROMPT_CHARS: usize = 30;
const HISTORY_PROMPT_CHARS: usize = 20;

/// `ai_generated_<prompt[..30]>.png`
pub fn download_file_name(prompt: &str) -> String {
    format!("{PREFIX}{}.png", slug(prompt, LATEST_PROMPT_CHARS))
}

/// `ai_generated_<prompt[..20]>_<index>.png`
pub fn history_file_name(prompt: &str, index: usize) -> String {
    format!("{PREFIX}{}_{index}.png", slug(prompt, HISTORY_PROMPT_CHARS))
}

fn slug(prompt: &str, max_chars: usize) -> String {
    prompt
        .chars()
        .take(max_chars)
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_name_truncates_to_thirty_chars() {
        assert_eq!(
            download_file_name("A serene lake at sunset with mountains behind"),
            "ai_generated_A_serene_lake_at_sunset_with_m.png"
        );
        assert_eq!(download_file_name("fox"), "ai_generated_fox.png");
    }

    #[test]
    fn history_name_truncates_to_twenty_chars_and_appends_index() {
        assert_eq!(
            history_file_name("A futuristic city at night", 3),
            "ai_generated_A_futuristic_city_at_3.png"
        );
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = download_file_name("東京の夜景、ネオンと雨、サイバーパンクの街並み、遠くに富士山が見える");
        assert!(name.starts_with("ai_generated_東京の夜景"));
        let stem = name
            .strip_prefix("ai_generated_")
            .unwrap()
            .strip_suffix(".png")
            .unwrap();
        assert_eq!(stem.chars().count(), 30);
    }

    #[test]
    fn path_separators_are_replaced() {
        assert_eq!(download_file_name("cats/dogs: a story"), "ai_generated_cats_dogs__a_story.png");
    }
}
