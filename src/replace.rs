//! Deep value replacement over JSON-like value graphs.

use crate::value::{Mapping, Value};

/// What to match when replacing values.
///
/// A literal is matched by structural equality (SameValueZero at number
/// leaves); a predicate is evaluated against every node. Making the two
/// cases explicit removes the source's ambiguity between "replace this
/// function value" and "compute the matcher from this function".
pub enum Matcher {
    Literal(Value),
    Predicate(Box<dyn Fn(&Value) -> bool>),
}

impl Matcher {
    pub fn literal(value: impl Into<Value>) -> Self {
        Matcher::Literal(value.into())
    }

    pub fn predicate(predicate: impl Fn(&Value) -> bool + 'static) -> Self {
        Matcher::Predicate(Box::new(predicate))
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Matcher::Literal(target) => value == target,
            Matcher::Predicate(predicate) => predicate(value),
        }
    }
}

/// What to substitute at a matched node.
///
/// A computed substitute is resolved exactly once, against the entire
/// top-level value, before recursion begins; every replacement site then
/// receives the same resolved value. It is never re-evaluated per node.
pub enum Substitute {
    Literal(Value),
    Compute(Box<dyn Fn(&Value) -> Value>),
}

impl Substitute {
    pub fn literal(value: impl Into<Value>) -> Self {
        Substitute::Literal(value.into())
    }

    pub fn compute(compute: impl Fn(&Value) -> Value + 'static) -> Self {
        Substitute::Compute(Box::new(compute))
    }

    fn resolve(&self, top_level: &Value) -> Value {
        match self {
            Substitute::Literal(value) => value.clone(),
            Substitute::Compute(compute) => compute(top_level),
        }
    }
}

/// Replace every node matching `matcher` with the substitute.
///
/// Matching is checked at every level, outermost first; recursion stops at
/// a replaced node. The input is never mutated; unreplaced containers are
/// rebuilt, and every replacement site shares the same substitute reference.
///
/// There is deliberately no cycle guard here: cyclic input is out of
/// contract and recurses until stack exhaustion.
pub fn replace_value(value: &Value, matcher: &Matcher, substitute: &Substitute) -> Value {
    let resolved = substitute.resolve(value);
    replace_resolved(value, matcher, &resolved)
}

fn replace_resolved(value: &Value, matcher: &Matcher, substitute: &Value) -> Value {
    if matcher.matches(value) {
        return substitute.clone();
    }

    match value {
        Value::Sequence(items) => Value::sequence(
            items
                .borrow()
                .iter()
                .map(|item| replace_resolved(item, matcher, substitute))
                .collect(),
        ),
        Value::Mapping(mapping) => {
            let mut out = Mapping::new();
            let mapping = mapping.borrow();
            for (key, val) in mapping.iter() {
                out.insert(key.clone(), replace_resolved(val, matcher, substitute));
            }
            Value::mapping(out)
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_matching_leaf_in_mapping() {
        let input = Value::from(json!({"x": 1}));
        let output = replace_value(&input, &Matcher::literal(1), &Substitute::literal(2));
        assert_eq!(output, Value::from(json!({"x": 2})));
    }

    #[test]
    fn replaces_whole_value_on_top_level_match() {
        let input = Value::from(json!({"x": 1}));
        let matcher = Matcher::literal(Value::from(json!({"x": 1})));
        let output = replace_value(&input, &matcher, &Substitute::literal(2));
        assert_eq!(output, Value::from(2));
    }

    #[test]
    fn nan_matches_nan_in_sequences() {
        let input = Value::sequence(vec![
            Value::Number(f64::NAN),
            Value::Number(f64::NAN),
            Value::from(2),
            Value::from(3),
        ]);
        let output = replace_value(&input, &Matcher::literal(f64::NAN), &Substitute::literal("3"));
        assert_eq!(output, Value::from(json!(["3", "3", 2, 3])));
    }

    #[test]
    fn predicate_matcher_is_evaluated_per_node() {
        let input = Value::from(json!([1, 2, 3, 1]));
        let matcher = Matcher::predicate(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
        let output = replace_value(&input, &matcher, &Substitute::literal("3"));
        assert_eq!(output, Value::from(json!([1, "3", 3, 1])));
    }

    #[test]
    fn computed_substitute_resolves_once_at_top_level() {
        let input = Value::from(json!([2, 2, 2]));
        let substitute = Substitute::compute(|top| {
            // Sees the whole sequence, not the matched node.
            let len = top
                .as_sequence()
                .map(|items| items.borrow().len())
                .unwrap_or(0);
            Value::from(len as i64)
        });
        let output = replace_value(&input, &Matcher::literal(2), &substitute);
        assert_eq!(output, Value::from(json!([3, 3, 3])));
    }

    #[test]
    fn matches_nested_structures_deeply() {
        let input = Value::from(json!({"outer": {"inner": [1, {"x": 1}]}}));
        let matcher = Matcher::literal(Value::from(json!({"x": 1})));
        let output = replace_value(&input, &matcher, &Substitute::literal("gone"));
        assert_eq!(output, Value::from(json!({"outer": {"inner": [1, "gone"]}})));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = Value::from(json!({"x": [1, 2]}));
        let snapshot = Value::from(json!({"x": [1, 2]}));
        let _ = replace_value(&input, &Matcher::literal(1), &Substitute::literal(9));
        assert_eq!(input, snapshot);
    }

    #[test]
    fn no_match_rebuilds_equal_structure() {
        let input = Value::from(json!({"a": {"b": [true, null]}}));
        let output = replace_value(&input, &Matcher::literal("absent"), &Substitute::literal(0));
        assert_eq!(output, input);
    }

    #[test]
    fn substitute_reference_is_shared_across_sites() {
        let input = Value::from(json!([1, 1]));
        let substitute = Value::from(json!({"s": true}));
        let output = replace_value(
            &input,
            &Matcher::literal(1),
            &Substitute::Literal(substitute.clone()),
        );
        let seq = output.as_sequence().unwrap();
        let seq = seq.borrow();
        assert_eq!(seq[0], substitute);
        assert_eq!(seq[1], substitute);
    }
}
