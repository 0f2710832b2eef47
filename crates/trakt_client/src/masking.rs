const VISIBLE_PREFIX: usize = 4;

/// Hide all but the first few characters of a credential for logging.
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= VISIBLE_PREFIX {
        return "[MASKED]".to_string();
    }
    let prefix: String = token.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}[MASKED]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_keeps_prefix() {
        assert_eq!(mask_token("abcdef123456"), "abcd[MASKED]");
    }

    #[test]
    fn test_mask_token_hides_short_values() {
        assert_eq!(mask_token("abc"), "[MASKED]");
        assert_eq!(mask_token(""), "[MASKED]");
    }
}
