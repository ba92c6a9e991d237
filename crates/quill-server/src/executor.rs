//! Selection execution
//!
//! The top-level operation runs first; then every selected relation on each
//! returned record is resolved depth first, in selection order. A failing
//! relation nulls out that one field and records an error with its path.

use futures::future::{BoxFuture, FutureExt};
use quill_core::{DataService, Error, Relation, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::record::{Output, Record};
use crate::selection::Selection;

/// An error attached to one position in the result tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub kind: &'static str,
    pub path: Vec<Value>,
}

impl FieldError {
    pub fn from_error(error: &Error, path: Vec<Value>) -> Self {
        Self {
            message: error.to_string(),
            kind: error.kind(),
            path,
        }
    }
}

/// Result of executing one operation
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub data: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

fn child(path: &[Value], segment: impl Into<Value>) -> Vec<Value> {
    let mut path = path.to_vec();
    path.push(segment.into());
    path
}

/// Resolves selections against a data service
pub struct Executor<'a, S: DataService + ?Sized> {
    service: &'a S,
}

impl<'a, S: DataService + ?Sized> Executor<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Shape an operation's output into `{"<operation>": value}`
    pub async fn execute(
        &self,
        operation: &str,
        output: Result<Output>,
        selection: Option<&Selection>,
    ) -> ExecutionResult {
        let mut errors = Vec::new();
        let path = vec![Value::from(operation)];

        let value = match output {
            Ok(output) => {
                self.resolve_output(output, selection, path, &mut errors)
                    .await
            }
            Err(e) => {
                tracing::debug!("Operation {} failed: {}", operation, e);
                errors.push(FieldError::from_error(&e, path));
                Value::Null
            }
        };

        let mut data = Map::new();
        data.insert(operation.to_string(), value);
        ExecutionResult {
            data: Value::Object(data),
            errors,
        }
    }

    fn resolve_output<'b>(
        &'b self,
        output: Output,
        selection: Option<&'b Selection>,
        path: Vec<Value>,
        errors: &'b mut Vec<FieldError>,
    ) -> BoxFuture<'b, Value> {
        async move {
            match output {
                Output::Nothing => Value::Null,
                Output::Many(records) => {
                    let mut items = Vec::with_capacity(records.len());
                    for (index, record) in records.into_iter().enumerate() {
                        let item = self
                            .resolve_output(Output::One(record), selection, child(&path, index), errors)
                            .await;
                        items.push(item);
                    }
                    Value::Array(items)
                }
                Output::One(record) => self.resolve_record(record, selection, path, errors).await,
            }
        }
        .boxed()
    }

    async fn resolve_record(
        &self,
        record: Record,
        selection: Option<&Selection>,
        path: Vec<Value>,
        errors: &mut Vec<FieldError>,
    ) -> Value {
        let scalars = match record.scalars() {
            Ok(scalars) => scalars,
            Err(e) => {
                let error = Error::Internal(format!("Failed to serialize {}: {}", record.kind(), e));
                errors.push(FieldError::from_error(&error, path));
                return Value::Null;
            }
        };

        let Some(selection) = selection else {
            return Value::Object(scalars);
        };

        let mut object = Map::new();
        for field in selection.fields() {
            let field_path = child(&path, field.name.as_str());

            let value = if let Some(relation) = Relation::parse(record.kind(), &field.name) {
                match self.fetch_related(&record, relation).await {
                    Ok(related) => {
                        self.resolve_output(related, field.selection.as_ref(), field_path, errors)
                            .await
                    }
                    Err(e) => {
                        if matches!(e, Error::BrokenReference { .. }) {
                            tracing::warn!("{}", e);
                        }
                        errors.push(FieldError::from_error(&e, field_path));
                        Value::Null
                    }
                }
            } else if let Some(value) = scalars.get(&field.name) {
                if field.selection.is_some() {
                    let error = Error::Validation(format!(
                        "Field {} on {} has no sub-fields",
                        field.name,
                        record.kind()
                    ));
                    errors.push(FieldError::from_error(&error, field_path));
                    Value::Null
                } else {
                    value.clone()
                }
            } else {
                let error = Error::Validation(format!(
                    "Unknown field {} on {}",
                    field.name,
                    record.kind()
                ));
                errors.push(FieldError::from_error(&error, field_path));
                Value::Null
            };

            object.insert(field.name.clone(), value);
        }
        Value::Object(object)
    }

    async fn fetch_related(&self, record: &Record, relation: Relation) -> Result<Output> {
        let service = self.service;
        let output = match (record, relation) {
            (Record::Account(a), Relation::AccountPosts) => {
                Output::many(service.account_posts(a).await?)
            }
            (Record::Account(a), Relation::AccountComments) => {
                Output::many(service.account_comments(a).await?)
            }
            (Record::Post(p), Relation::PostAuthor) => Output::one(service.post_author(p).await?),
            (Record::Post(p), Relation::PostComments) => {
                Output::many(service.post_comments(p).await?)
            }
            (Record::Comment(c), Relation::CommentAuthor) => {
                Output::one(service.comment_author(c).await?)
            }
            (Record::Comment(c), Relation::CommentPost) => {
                Output::one(service.comment_post(c).await?)
            }
            (record, relation) => {
                return Err(Error::Internal(format!(
                    "{} does not apply to {}",
                    relation,
                    record.kind()
                )))
            }
        };
        Ok(output)
    }
}
