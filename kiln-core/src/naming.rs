//! Case conversions shared by the scaffolding pipeline.
//!
//! All conversions go through [`split_words`], so the pascal, camel, snake,
//! and kebab spellings of one input are case-only transformations of the
//! same word sequence.

/// A pluralization function. The built-in [`pluralize`] is a best-effort
/// English heuristic; callers needing irregular plurals can supply their own.
pub type Pluralizer = fn(&str) -> String;

/// Split an identifier into words.
///
/// Accepts snake_case, kebab-case, camelCase, and PascalCase uniformly:
/// separators are normalized first, then each token is split where an
/// uppercase letter follows a lowercase one.
pub fn split_words(s: &str) -> Vec<String> {
    let normalized = s.replace('-', "_");
    let mut words = Vec::new();
    for token in normalized.split('_') {
        if token.is_empty() {
            continue;
        }
        let mut current = String::new();
        let mut prev_lower = false;
        for c in token.chars() {
            if c.is_uppercase() && prev_lower {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = c.is_lowercase();
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert a string to PascalCase (e.g., "order-item" -> "OrderItem")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "order-item" -> "orderItem")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "OrderItem" -> "order_item")
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to kebab-case (e.g., "OrderItem" -> "order-item")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Pluralize a lowercase identifier with an English heuristic.
///
/// Irregular plurals are not handled ("person" -> "persons").
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') || s.ends_with('x') || s.ends_with("ch") || s.ends_with("sh") {
        return format!("{}es", s);
    }
    if s.len() > 1 && s.ends_with('y') {
        let prev = s.as_bytes()[s.len() - 2];
        if !matches!(prev, b'a' | b'e' | b'i' | b'o' | b'u') {
            return format!("{}ies", &s[..s.len() - 1]);
        }
    }
    format!("{}s", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_all_spellings() {
        let expected = vec!["order".to_string(), "item".to_string()];
        assert_eq!(split_words("order_item"), expected);
        assert_eq!(split_words("order-item"), expected);
        assert_eq!(split_words("orderItem"), expected);
        assert_eq!(split_words("OrderItem"), expected);
    }

    #[test]
    fn test_split_words_empty_segments() {
        assert_eq!(split_words("__a__b__"), vec!["a", "b"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order"), "Order");
        assert_eq!(to_pascal_case("order-item"), "OrderItem");
        assert_eq!(to_pascal_case("order_item"), "OrderItem");
        assert_eq!(to_pascal_case("orderItem"), "OrderItem");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("order-item"), "orderItem");
        assert_eq!(to_camel_case("OrderItem"), "orderItem");
        assert_eq!(to_camel_case("order"), "order");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("OrderItem"), "order_item");
        assert_eq!(to_snake_case("order-item"), "order_item");
        assert_eq!(to_snake_case("orderItem"), "order_item");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("OrderItem"), "order-item");
        assert_eq!(to_kebab_case("order_item"), "order-item");
    }

    #[test]
    fn test_snake_pascal_round_trip() {
        for input in ["order-item", "OrderItem", "paymentMethod", "user", "a_b_c"] {
            let snake = to_snake_case(input);
            assert_eq!(to_snake_case(&to_pascal_case(&snake)), snake);
        }
    }

    #[test]
    fn test_pluralize_table() {
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("match"), "matches");
    }

    #[test]
    fn test_pluralize_is_heuristic() {
        // Known limitation: irregular plurals are not special-cased.
        assert_eq!(pluralize("person"), "persons");
    }
}
