//! Field selection trees
//!
//! A selection is a JSON array. Each item is either a field name or an
//! object mapping a relation name to a nested selection:
//!
//! ```json
//! ["id", "title", {"author": ["name"]}, {"comments": ["text"]}]
//! ```

use serde_json::Value;

/// One requested field, with a nested selection for relations
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub selection: Option<Selection>,
}

impl Field {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selection: None,
        }
    }

    pub fn nested(name: impl Into<String>, selection: Selection) -> Self {
        Self {
            name: name.into(),
            selection: Some(selection),
        }
    }
}

/// Ordered list of requested fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    fields: Vec<Field>,
}

impl Selection {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Parse a selection from its JSON form
    pub fn parse(value: &Value) -> Result<Self, String> {
        let items = value
            .as_array()
            .ok_or_else(|| format!("Selection must be an array, got {}", value))?;

        let mut fields = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(name) => fields.push(Field::leaf(name.as_str())),
                Value::Object(nested) => {
                    for (name, inner) in nested {
                        fields.push(Field::nested(name.as_str(), Self::parse(inner)?));
                    }
                }
                other => return Err(format!("Invalid selection item: {}", other)),
            }
        }
        Ok(Self { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested_selection() {
        let selection =
            Selection::parse(&json!(["id", {"author": ["name", {"posts": ["title"]}]}])).unwrap();

        assert_eq!(
            selection,
            Selection::new(vec![
                Field::leaf("id"),
                Field::nested(
                    "author",
                    Selection::new(vec![
                        Field::leaf("name"),
                        Field::nested("posts", Selection::new(vec![Field::leaf("title")])),
                    ])
                ),
            ])
        );
    }

    #[test]
    fn test_parse_keeps_object_key_order() {
        let selection = Selection::parse(&json!([{"posts": ["title"], "comments": ["text"]}])).unwrap();
        let names: Vec<_> = selection.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["posts", "comments"]);
    }

    #[test]
    fn test_parse_rejects_non_arrays() {
        assert!(Selection::parse(&json!("id")).is_err());
        assert!(Selection::parse(&json!(["id", 3])).is_err());
        assert!(Selection::parse(&json!([{"author": "name"}])).is_err());
    }
}
