use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use taskdesk_shared::Result;

/// Escape HTML-significant characters and trim surrounding whitespace.
///
/// `&` is left alone and none of the produced entities contain an escaped
/// character, so sanitizing twice yields the same string.
pub fn sanitize_input(input: &str) -> String {
    input
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
        .trim()
        .to_owned()
}

/// Sanitize every string reachable from `value`, including strings nested in
/// arrays. Numbers, booleans and nulls are copied as-is.
pub fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_input(s)),
        Value::Object(record) => Value::Object(sanitize_object(record)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        other => other.clone(),
    }
}

/// Return a sanitized copy of `record`. Keys are kept verbatim.
pub fn sanitize_object(record: &Map<String, Value>) -> Map<String, Value> {
    record
        .iter()
        .map(|(key, value)| (key.to_owned(), sanitize_value(value)))
        .collect()
}

/// Sanitize a typed payload through its JSON shape.
pub fn sanitize_payload<T>(payload: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let value = serde_json::to_value(payload)?;

    Ok(serde_json::from_value(sanitize_value(&value))?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskdesk_shared::user::{Company, UserPayload};

    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(sanitize_input("<script>"), "&lt;script&gt;");
        assert_eq!(
            sanitize_input(r#"<a href="/x">"#),
            "&lt;a href=&quot;&#x2F;x&quot;&gt;"
        );
    }

    #[test]
    fn trims_after_escaping() {
        assert_eq!(sanitize_input(" 'x' "), "&#x27;x&#x27;");
        assert_eq!(sanitize_input("   "), "");
    }

    #[test]
    fn sanitizing_twice_is_stable() {
        for input in ["<b>", " 'q' ", "a/b", "\"quoted\"", "&amp; already"] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once, "{input}");
        }
    }

    #[test]
    fn nested_records_are_sanitized_without_touching_input() {
        let input = json!({ "a": "<b>", "c": { "d": "'" } });
        let Value::Object(record) = &input else {
            unreachable!()
        };

        let output = sanitize_object(record);

        assert_eq!(
            Value::Object(output),
            json!({ "a": "&lt;b&gt;", "c": { "d": "&#x27;" } })
        );
        assert_eq!(input, json!({ "a": "<b>", "c": { "d": "'" } }));
    }

    #[test]
    fn non_text_values_pass_through() {
        let input = json!({ "id": 7, "done": true, "owner": null, "score": 1.5 });

        assert_eq!(sanitize_value(&input), input);
    }

    #[test]
    fn arrays_are_sanitized_element_wise() {
        let input = json!({ "tags": ["<i>", { "label": " x/y " }, 3] });

        assert_eq!(
            sanitize_value(&input),
            json!({ "tags": ["&lt;i&gt;", { "label": "x&#x2F;y" }, 3] })
        );
    }

    #[test]
    fn typed_payload_keeps_its_shape() -> anyhow::Result<()> {
        let payload = UserPayload {
            name: " <b>Jo</b> ".to_owned(),
            email: "jo@example.com".to_owned(),
            phone: "555-1234".to_owned(),
            website: None,
            address: None,
            company: Some(Company {
                name: "O'Reilly".to_owned(),
                catch_phrase: None,
                bs: Some("a/b".to_owned()),
            }),
        };

        let sanitized = sanitize_payload(&payload)?;

        assert_eq!(sanitized.name, "&lt;b&gt;Jo&lt;&#x2F;b&gt;");
        assert_eq!(sanitized.email, "jo@example.com");
        assert_eq!(sanitized.website, None);
        let company = sanitized.company.expect("company kept");
        assert_eq!(company.name, "O&#x27;Reilly");
        assert_eq!(company.bs.as_deref(), Some("a&#x2F;b"));

        Ok(())
    }
}
