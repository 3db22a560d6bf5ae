//! Depth-aware splitting of a gradient's argument list.

/// Split the text between a gradient function's outer parentheses on
/// top-level commas.
///
/// Commas nested inside parentheses (as in `rgb(255, 0, 0)`) stay part of
/// the current token. Each token is trimmed; a trailing empty token is
/// dropped. Unbalanced parentheses are not an error: the depth counter may
/// go negative, in which case no later comma splits.
pub fn split_gradient_parts(content: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for ch in content.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_top_level_commas() {
        let parts = split_gradient_parts("90deg, #e7000b 0%, #496adc 100%");
        assert_eq!(parts, vec!["90deg", "#e7000b 0%", "#496adc 100%"]);
    }

    #[test]
    fn keeps_nested_commas() {
        let parts = split_gradient_parts("90deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 100%");
        assert_eq!(
            parts,
            vec!["90deg", "rgb(255, 0, 0) 0%", "rgb(0, 0, 255) 100%"]
        );
    }

    #[test]
    fn trims_each_part() {
        let parts = split_gradient_parts(" 90deg , #e7000b 0% , #496adc 100% ");
        assert_eq!(parts, vec!["90deg", "#e7000b 0%", "#496adc 100%"]);
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(split_gradient_parts("").is_empty());
        assert!(split_gradient_parts("   ").is_empty());
    }

    #[test]
    fn inner_empty_parts_are_kept() {
        let parts = split_gradient_parts("red,,blue,");
        assert_eq!(parts, vec!["red", "", "blue"]);
    }

    #[test]
    fn unbalanced_close_stops_splitting() {
        let parts = split_gradient_parts("a), b, c");
        assert_eq!(parts, vec!["a), b, c"]);
    }

    #[test]
    fn unclosed_paren_swallows_the_rest() {
        let parts = split_gradient_parts("red, rgb(1, 2, 3 0%, blue");
        assert_eq!(parts, vec!["red", "rgb(1, 2, 3 0%, blue"]);
    }
}
