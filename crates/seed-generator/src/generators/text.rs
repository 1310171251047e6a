//! Name and free-text generators backed by `fake`.

use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

/// Generate a given name.
pub fn generate_first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

/// Generate a family name.
pub fn generate_last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// Generate lorem sentences totalling at most `max_chars` characters.
pub fn generate_filler_text<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    let mut text = String::new();
    let mut len = 0;

    loop {
        let sentence: String = Sentence(3..8).fake_with_rng(rng);
        let sentence_len = sentence.chars().count();
        let needed = if text.is_empty() {
            sentence_len
        } else {
            len + 1 + sentence_len
        };

        if needed > max_chars {
            if text.is_empty() {
                return truncate_at_word(&sentence, max_chars);
            }
            return text;
        }

        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&sentence);
        len = needed;
    }
}

/// Cut `s` to at most `max_chars` characters, preferring a word boundary.
fn truncate_at_word(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(pos) if pos > 0 => cut[..pos].to_string(),
        _ => cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_filler_text_bounded() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let text = generate_filler_text(&mut rng, 100);
            assert!(!text.is_empty());
            assert!(text.chars().count() <= 100, "too long: {text}");
        }
    }

    #[test]
    fn test_filler_text_tiny_limit() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_filler_text(&mut rng, 5).chars().count() <= 5);
        assert_eq!(generate_filler_text(&mut rng, 0), "");
    }

    #[test]
    fn test_truncate_at_word() {
        assert_eq!(truncate_at_word("alpha beta gamma", 12), "alpha beta");
        assert_eq!(truncate_at_word("alphabet", 4), "alph");
        assert_eq!(truncate_at_word("short", 10), "short");
    }

    #[test]
    fn test_names_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        let a = generate_first_name(&mut rng1);
        let b = generate_first_name(&mut rng2);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(!generate_last_name(&mut rng1).is_empty());
    }
}
