// src/domain/slug/counter.rs

/// Separator between a numeric counter prefix and the rest of a slug.
pub const DEFAULT_COUNTER_SEPARATOR: &str = "_";

/// Prefixes `1_` to a slug, or bumps an existing leading counter by one:
/// `article` -> `1_article`, `1_article` -> `2_article`.
pub fn add_counter_to_slug(slug: &str) -> String {
    add_counter_with_separator(slug, DEFAULT_COUNTER_SEPARATOR)
}

pub fn add_counter_with_separator(slug: &str, separator: &str) -> String {
    match slug.split_once(separator) {
        Some((counter, rest)) if !separator.is_empty() && is_counter(counter) => {
            format!("{}{separator}{rest}", increment(counter))
        }
        _ => format!("1{separator}{slug}"),
    }
}

fn is_counter(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

/// Decimal increment on the digit string itself, so counters never overflow.
/// Leading zeros are dropped the way an integer round trip would.
fn increment(counter: &str) -> String {
    let trimmed = counter.trim_start_matches('0');
    let mut digits: Vec<char> = if trimmed.is_empty() {
        vec!['0']
    } else {
        trimmed.chars().collect()
    };

    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return digits.into_iter().collect();
        }
    }

    std::iter::once('1').chain(digits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_counter_when_missing() {
        assert_eq!(add_counter_to_slug("article"), "1_article");
        assert_eq!(add_counter_to_slug("hello-world"), "1_hello-world");
    }

    #[test]
    fn increments_existing_counter() {
        assert_eq!(add_counter_to_slug("1_article"), "2_article");
        assert_eq!(add_counter_to_slug("9_article"), "10_article");
        assert_eq!(add_counter_to_slug("199_article"), "200_article");
    }

    #[test]
    fn only_a_leading_numeric_segment_counts() {
        assert_eq!(add_counter_to_slug("v2_article"), "1_v2_article");
        assert_eq!(add_counter_to_slug("_article"), "1__article");
        assert_eq!(add_counter_to_slug("2024"), "1_2024");
        assert_eq!(add_counter_to_slug("3_a_b"), "4_a_b");
    }

    #[test]
    fn leading_zeros_are_dropped() {
        assert_eq!(add_counter_to_slug("007_bond"), "8_bond");
        assert_eq!(add_counter_to_slug("0_bond"), "1_bond");
    }

    #[test]
    fn counter_does_not_overflow() {
        let huge = format!("{}_x", "9".repeat(30));
        assert_eq!(add_counter_to_slug(&huge), format!("1{}_x", "0".repeat(30)));
    }

    #[test]
    fn custom_separator() {
        assert_eq!(add_counter_with_separator("article", "~"), "1~article");
        assert_eq!(add_counter_with_separator("4~article", "~"), "5~article");
        assert_eq!(add_counter_with_separator("4_article", "~"), "1~4_article");
    }
}
