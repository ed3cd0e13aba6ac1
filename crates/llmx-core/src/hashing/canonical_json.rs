//! Canonical JSON mínimo: claves ordenadas y sin espacios, para que dos
//! valores iguales produzcan siempre el mismo texto (y el mismo hash).

use serde_json::Value;
use std::collections::BTreeMap;

fn quote(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let items: Vec<String> = tree.into_iter().map(|(k, v)| format!("{}:{}", quote(k), v)).collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn object_keys_are_sorted() {
        let val = json!({ "zoom": 2.0, "id": "intro" });
        assert_eq!(to_canonical_json(&val), "{\"id\":\"intro\",\"zoom\":2.0}");
    }

    #[test]
    fn nested_arrays_keep_order() {
        let val = json!({ "tokens": [ { "text": "un", "id": 0 }, { "text": "able", "id": 1 } ] });
        assert_eq!(to_canonical_json(&val),
                   "{\"tokens\":[{\"id\":0,\"text\":\"un\"},{\"id\":1,\"text\":\"able\"}]}");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(to_canonical_json(&json!("don't \"quote\"")), "\"don't \\\"quote\\\"\"");
    }
}
