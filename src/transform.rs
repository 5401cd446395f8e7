//! Recursive key-renaming over JSON-like value graphs.
//!
//! The transform walks nested mappings and sequences, rewriting every
//! mapping key through a caller-supplied rename function. A visited set of
//! node identities guards against reference cycles: a container node seen
//! earlier in the same top-level call is carried over as the original
//! reference instead of being descended into again.

use std::collections::HashSet;

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};

use crate::value::{Mapping, Value};

/// Rewrite every mapping key in `value` through `rename`.
///
/// The input is never mutated. The output is newly allocated, except that
/// scalar leaves are copied and container nodes that would reintroduce a
/// cycle (or that were already transformed earlier in the same call) are
/// passed through as the original shared reference, keys unrenamed. That
/// pass-through is what guarantees termination on cyclic graphs; it is an
/// approximate semantic, not full deep correctness under cycles.
pub fn transform_keys<F>(value: &Value, rename: F) -> Value
where
    F: Fn(&str) -> String,
{
    let mut visited = HashSet::new();
    walk(value, &rename, &mut visited)
}

/// Rewrite every mapping key to lowerCamelCase.
pub fn camel_case_keys(value: &Value) -> Value {
    transform_keys(value, |key| key.to_lower_camel_case())
}

/// Rewrite every mapping key to snake_case.
pub fn snake_case_keys(value: &Value) -> Value {
    transform_keys(value, |key| key.to_snake_case())
}

/// Rewrite every mapping key to PascalCase.
pub fn pascal_case_keys(value: &Value) -> Value {
    transform_keys(value, |key| key.to_pascal_case())
}

fn walk<F>(value: &Value, rename: &F, visited: &mut HashSet<usize>) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        Value::Sequence(items) => {
            if let Some(id) = value.identity() {
                visited.insert(id);
            }
            let transformed = items
                .borrow()
                .iter()
                .map(|item| descend(item, rename, visited))
                .collect();
            Value::sequence(transformed)
        }
        Value::Mapping(mapping) => {
            if let Some(id) = value.identity() {
                visited.insert(id);
            }
            let mut out = Mapping::new();
            let mapping = mapping.borrow();
            for (key, val) in mapping.iter() {
                out.insert(rename(key), descend(val, rename, visited));
            }
            Value::mapping(out)
        }
        scalar => scalar.clone(),
    }
}

// The visited set records each container on entry and never removes it, so
// a node re-encountered anywhere later in the call tree (cyclic or shared)
// is carried over untransformed.
fn descend<F>(value: &Value, rename: &F, visited: &mut HashSet<usize>) -> Value
where
    F: Fn(&str) -> String,
{
    match value.identity() {
        Some(id) if visited.contains(&id) => value.clone(),
        Some(_) => walk(value, rename, visited),
        None => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn renames_nested_mapping_keys() {
        let input = Value::from(json!({"a-b": {"c_d": 1}}));
        let expected = Value::from(json!({"aB": {"cD": 1}}));
        assert_eq!(camel_case_keys(&input), expected);
    }

    #[test]
    fn recurses_through_sequences_of_mappings() {
        let input = Value::from(json!([{"first_key": 1}, {"second_key": [{"third_key": 2}]}]));
        let expected = Value::from(json!([{"firstKey": 1}, {"secondKey": [{"thirdKey": 2}]}]));
        assert_eq!(camel_case_keys(&input), expected);
    }

    #[test]
    fn identity_rename_is_structural_noop() {
        let input = Value::from(json!({"a_b": [1, {"c-d": null}], "e": true}));
        let output = transform_keys(&input, |key| key.to_string());
        assert_eq!(output, input);
    }

    #[test]
    fn output_does_not_alias_input_containers() {
        let input = Value::from(json!({"a": {"b": 1}}));
        let output = transform_keys(&input, |key| key.to_string());
        assert_ne!(input.identity(), output.identity());
    }

    #[test]
    fn scalars_pass_through_unchanged() {
        assert_eq!(transform_keys(&Value::Null, |k| k.to_string()), Value::Null);
        assert_eq!(
            camel_case_keys(&Value::from("plain_string")),
            Value::from("plain_string")
        );
    }

    #[test]
    fn camel_then_snake_round_trips() {
        let input = Value::from(json!({"a_b": 1}));
        assert_eq!(snake_case_keys(&camel_case_keys(&input)), input);
    }

    #[test]
    fn pascal_case_keys_capitalizes() {
        let input = Value::from(json!({"some_key": 1}));
        let expected = Value::from(json!({"SomeKey": 1}));
        assert_eq!(pascal_case_keys(&input), expected);
    }

    #[test]
    fn self_referential_mapping_terminates() {
        let node = Rc::new(RefCell::new(Mapping::new()));
        let value = Value::Mapping(Rc::clone(&node));
        node.borrow_mut().insert("inner_self", value.clone());
        node.borrow_mut().insert("plain_key", 1);

        let output = camel_case_keys(&value);
        let out_map = output.as_mapping().unwrap();
        let out_map = out_map.borrow();

        // Keys of the mapping itself are renamed once.
        assert_eq!(
            out_map.keys().collect::<Vec<_>>(),
            vec!["innerSelf", "plainKey"]
        );

        // The cyclic occurrence is the original node, untransformed.
        let inner = out_map.get("innerSelf").unwrap();
        assert_eq!(inner.identity(), value.identity());
    }

    #[test]
    fn shared_node_is_transformed_once_then_passed_through() {
        let shared = Value::from(json!({"shared_key": 1}));
        let mut mapping = Mapping::new();
        mapping.insert("first_ref", shared.clone());
        mapping.insert("second_ref", shared.clone());

        let output = camel_case_keys(&Value::mapping(mapping));
        let out_map = output.as_mapping().unwrap();
        let out_map = out_map.borrow();

        // First occurrence transformed, later occurrence left original.
        assert_eq!(
            out_map.get("firstRef").unwrap(),
            &Value::from(json!({"sharedKey": 1}))
        );
        assert_eq!(out_map.get("secondRef").unwrap().identity(), shared.identity());
    }
}
