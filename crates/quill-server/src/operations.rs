//! Operation catalog

use serde::Serialize;

/// Whether an operation reads or writes the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Kind of the named operation, or `None` if there is no such operation
    pub fn of(name: &str) -> Option<Self> {
        match name {
            "listAccounts" | "listPosts" | "listComments" | "account" | "post" | "comment" => {
                Some(Self::Query)
            }
            "createAccount" | "deleteAccount" | "createPost" | "deletePost" | "createComment"
            | "deleteComment" => Some(Self::Mutation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// Operation descriptor returned by `operations/list`
#[derive(Debug, Serialize)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub description: &'static str,
    /// Shape of the result, e.g. `[Post]` or `Account?`
    pub returns: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

fn id_schema(what: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "required": ["id"],
        "properties": {
            "id": {"type": "string", "description": format!("Id of the {}", what)}
        }
    })
}

/// Get all available operations
pub fn get_operations() -> Vec<Operation> {
    vec![
        Operation {
            name: "listAccounts",
            kind: OperationKind::Query,
            description: "List accounts. With a query, only accounts whose name contains it (case-insensitive).",
            returns: "[Account]",
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Substring to look for in account names"}
                }
            }),
        },
        Operation {
            name: "listPosts",
            kind: OperationKind::Query,
            description: "List posts. With a query, only posts whose title or body contains it (case-insensitive).",
            returns: "[Post]",
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Substring to look for in titles and bodies"}
                }
            }),
        },
        Operation {
            name: "listComments",
            kind: OperationKind::Query,
            description: "List all comments.",
            returns: "[Comment]",
            input_schema: serde_json::json!({"type": "object", "properties": {}}),
        },
        Operation {
            name: "account",
            kind: OperationKind::Query,
            description: "Get one account by id, or null.",
            returns: "Account?",
            input_schema: id_schema("account"),
        },
        Operation {
            name: "post",
            kind: OperationKind::Query,
            description: "Get one post by id, or null.",
            returns: "Post?",
            input_schema: id_schema("post"),
        },
        Operation {
            name: "comment",
            kind: OperationKind::Query,
            description: "Get one comment by id, or null.",
            returns: "Comment?",
            input_schema: id_schema("comment"),
        },
        Operation {
            name: "createAccount",
            kind: OperationKind::Mutation,
            description: "Create an account. Fails with DUPLICATE_EMAIL if the email is taken.",
            returns: "Account",
            input_schema: serde_json::json!({
                "type": "object",
                "required": ["name", "email"],
                "properties": {
                    "name": {"type": "string"},
                    "email": {"type": "string", "description": "Must be unique (case-sensitive)"},
                    "age": {"type": "integer", "minimum": 0}
                }
            }),
        },
        Operation {
            name: "deleteAccount",
            kind: OperationKind::Mutation,
            description: "Delete an account, its posts, the comments on those posts and every comment it wrote.",
            returns: "Account",
            input_schema: id_schema("account"),
        },
        Operation {
            name: "createPost",
            kind: OperationKind::Mutation,
            description: "Create a post. Fails with AUTHOR_NOT_FOUND if the author does not exist.",
            returns: "Post",
            input_schema: serde_json::json!({
                "type": "object",
                "required": ["title", "body", "published", "authorId"],
                "properties": {
                    "title": {"type": "string"},
                    "body": {"type": "string"},
                    "published": {"type": "boolean"},
                    "authorId": {"type": "string"}
                }
            }),
        },
        Operation {
            name: "deletePost",
            kind: OperationKind::Mutation,
            description: "Delete a post and its comments.",
            returns: "Post",
            input_schema: id_schema("post"),
        },
        Operation {
            name: "createComment",
            kind: OperationKind::Mutation,
            description: "Comment on a published post. Fails with AUTHOR_NOT_FOUND or POST_UNAVAILABLE.",
            returns: "Comment",
            input_schema: serde_json::json!({
                "type": "object",
                "required": ["text", "authorId", "postId"],
                "properties": {
                    "text": {"type": "string"},
                    "authorId": {"type": "string"},
                    "postId": {"type": "string"}
                }
            }),
        },
        Operation {
            name: "deleteComment",
            kind: OperationKind::Mutation,
            description: "Delete a comment.",
            returns: "Comment",
            input_schema: id_schema("comment"),
        },
    ]
}
