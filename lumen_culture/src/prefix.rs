//! Opening phrases keyed by content type and tradition.

use lumen_core::ContentType;

/// `(content type, tradition, prefix)`
const PREFIXES: &[(&str, &str, &str)] = &[
    ("protection", "christian", "In the name of Jesus,"),
    ("protection", "buddhist", "With loving-kindness,"),
    ("protection", "hindu", "Om Namah Shivaya,"),
    ("protection", "islamic", "Bismillah,"),
    ("protection", "jewish", "Baruch HaShem,"),
    ("protection", "pagan", "By the power of three,"),
    ("healing", "christian", "By His stripes we are healed,"),
    ("healing", "buddhist", "May all beings be free from suffering,"),
    ("healing", "hindu", "Om Shanti,"),
    ("healing", "islamic", "In sha Allah,"),
    ("healing", "jewish", "Refuah shleimah,"),
    ("cleansing", "pagan", "By earth, air, fire and water,"),
    ("cleansing", "indigenous", "With sacred smoke,"),
];

/// Prefix for this combination, if one is defined.
#[must_use]
pub fn prefix_for(content_type: &ContentType, tradition: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(content, trad, _)| *content == content_type.as_str() && *trad == tradition)
        .map(|(_, _, prefix)| *prefix)
}

/// Prepend the prefix for this combination, if any.
#[must_use]
pub fn apply_prefix(
    text: &str,
    content_type: &ContentType,
    tradition: &str,
) -> (String, Option<&'static str>) {
    prefix_for(content_type, tradition).map_or_else(
        || (text.to_string(), None),
        |prefix| (format!("{prefix} {text}"), Some(prefix)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefix() {
        assert_eq!(
            prefix_for(&ContentType::Protection, "christian"),
            Some("In the name of Jesus,")
        );
        assert_eq!(
            prefix_for(&ContentType::Protection, "buddhist"),
            Some("With loving-kindness,")
        );
    }

    #[test]
    fn test_missing_combination() {
        assert_eq!(prefix_for(&ContentType::Guidance, "christian"), None);
        assert_eq!(prefix_for(&ContentType::Protection, "secular"), None);
        assert_eq!(
            prefix_for(&ContentType::Other("affirmation".to_string()), "hindu"),
            None
        );
    }

    #[test]
    fn test_apply_prefix() {
        let (text, prefix) = apply_prefix("be well", &ContentType::Healing, "hindu");
        assert_eq!(text, "Om Shanti, be well");
        assert_eq!(prefix, Some("Om Shanti,"));

        let (text, prefix) = apply_prefix("be well", &ContentType::Healing, "secular");
        assert_eq!(text, "be well");
        assert_eq!(prefix, None);
    }
}
