//! Array helpers.

use crate::value::Value;

/// Count occurrences of `target` in `items` using the same structural
/// equality as the transforms (SameValueZero at number leaves, so `NaN`
/// occurrences are counted).
pub fn count_occurrences(items: &[Value], target: &Value) -> usize {
    items.iter().filter(|item| *item == target).count()
}

/// Every `nth` element: indices `nth-1`, `2·nth-1`, and so on.
///
/// Returns an empty vector when `nth` is zero.
pub fn every_nth<T: Clone>(items: &[T], nth: usize) -> Vec<T> {
    if nth == 0 {
        return Vec::new();
    }
    items.iter().skip(nth - 1).step_by(nth).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_repeated_values() {
        let items: Vec<Value> = vec![1.into(), 2.into(), 3.into(), 1.into()];
        assert_eq!(count_occurrences(&items, &Value::from(1)), 2);
    }

    #[test]
    fn string_and_number_do_not_match() {
        let items: Vec<Value> = vec!["1".into(), 1.into(), 2.into()];
        assert_eq!(count_occurrences(&items, &Value::from("1")), 1);
    }

    #[test]
    fn counts_nan_occurrences() {
        let items = vec![
            Value::Number(f64::NAN),
            Value::Bool(true),
            Value::Number(f64::NAN),
            Value::from(json!([3])),
        ];
        assert_eq!(count_occurrences(&items, &Value::Number(f64::NAN)), 2);
    }

    #[test]
    fn counts_structural_matches() {
        let items = vec![Value::from(json!({"a": 1})), Value::from(json!({"a": 2}))];
        assert_eq!(count_occurrences(&items, &Value::from(json!({"a": 1}))), 1);
    }

    #[test]
    fn every_second_element() {
        assert_eq!(every_nth(&[1, 2, 3, 4, 5, 6], 2), vec![2, 4, 6]);
    }

    #[test]
    fn every_first_element_is_identity() {
        assert_eq!(every_nth(&[1, 2, 3], 1), vec![1, 2, 3]);
    }

    #[test]
    fn nth_zero_yields_nothing() {
        assert_eq!(every_nth(&[1, 2, 3], 0), Vec::<i32>::new());
    }

    #[test]
    fn nth_beyond_length_yields_nothing() {
        assert_eq!(every_nth(&[1, 2, 3], 4), Vec::<i32>::new());
    }
}
