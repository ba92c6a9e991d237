//! JSON-RPC request handling

use std::sync::Arc;

use quill_core::{
    AccountId, CommentId, DataService, NewAccount, NewComment, NewPost, PostId, TextQuery,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::executor::Executor;
use crate::operations::{get_operations, OperationKind};
use crate::record::Output;
use crate::selection::Selection;
use crate::transport::{
    parse_line, Incoming, JsonRpcError, JsonRpcRequest, JsonRpcResponse, StdioTransport,
    INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
};

const SERVER_NAME: &str = "quill";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: serde_json::Value,
    #[serde(default)]
    selection: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct QueryArgs {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Deserialize)]
struct IdArgs {
    id: String,
}

fn arguments<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, JsonRpcError> {
    // A missing arguments object means "no arguments"
    let value = if value.is_null() {
        serde_json::json!({})
    } else {
        value
    };
    serde_json::from_value(value).map_err(|e| JsonRpcError {
        code: INVALID_PARAMS,
        message: format!("Invalid arguments: {}", e),
    })
}

/// Request handler for the Quill data service
///
/// Calls pass through `gate`: queries share it and mutations take it
/// exclusively, so a query's nested relation lookups never observe a
/// mutation that ran after its top-level read.
pub struct QuillServer<S: DataService> {
    service: Arc<S>,
    gate: RwLock<()>,
}

impl<S: DataService + 'static> QuillServer<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            gate: RwLock::new(()),
        }
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Serve line-delimited JSON-RPC on stdio until stdin closes
    pub async fn run_stdio(&self) -> anyhow::Result<()> {
        tracing::info!("Starting Quill server on stdio");
        let mut transport = StdioTransport::new();

        loop {
            let response = match transport.read_request().await {
                Ok(Incoming::Request(request)) => {
                    tracing::debug!("Received request: {:?}", request.method);
                    self.handle_request(request).await
                }
                Ok(Incoming::Malformed(e)) => {
                    tracing::warn!("Malformed request: {}", e);
                    JsonRpcResponse::error(
                        serde_json::Value::Null,
                        PARSE_ERROR,
                        format!("Parse error: {}", e),
                    )
                }
                Ok(Incoming::Eof) => {
                    tracing::info!("EOF on stdin, shutting down");
                    break;
                }
                Err(e) => {
                    tracing::error!("Failed to read request: {}", e);
                    break;
                }
            };

            if let Err(e) = transport.write_response(&response).await {
                tracing::error!("Failed to write response: {}", e);
            }
        }

        Ok(())
    }

    /// Handle one raw line of JSON-RPC
    pub async fn handle_line(&self, line: &str) -> JsonRpcResponse {
        match parse_line(line) {
            Incoming::Request(request) => self.handle_request(request).await,
            Incoming::Malformed(e) => JsonRpcResponse::error(
                serde_json::Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", e),
            ),
            Incoming::Eof => {
                JsonRpcResponse::error(serde_json::Value::Null, PARSE_ERROR, "Empty request")
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        if request.jsonrpc != "2.0" {
            tracing::debug!("Request uses jsonrpc version {:?}", request.jsonrpc);
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
            "operations/list" => JsonRpcResponse::success(
                request.id,
                serde_json::json!({ "operations": get_operations() }),
            ),
            "operations/call" => self.handle_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_initialize(&self, id: serde_json::Value) -> JsonRpcResponse {
        let result = serde_json::json!({
            "capabilities": {
                "operations": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION
            }
        });
        JsonRpcResponse::success(id, result)
    }

    async fn handle_call(&self, id: serde_json::Value, params: serde_json::Value) -> JsonRpcResponse {
        let params: CallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e))
            }
        };

        let selection = match params.selection.as_ref().map(Selection::parse).transpose() {
            Ok(selection) => selection,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid selection: {}", e))
            }
        };

        tracing::debug!(
            "Operation call: {} with args: {:?}",
            params.name,
            params.arguments
        );

        let Some(kind) = OperationKind::of(&params.name) else {
            return JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Unknown operation: {}", params.name),
            );
        };
        // Held until the whole selection is resolved
        let _shared;
        let _exclusive;
        match kind {
            OperationKind::Query => _shared = self.gate.read().await,
            OperationKind::Mutation => _exclusive = self.gate.write().await,
        }

        let output = match self.invoke(&params.name, params.arguments).await {
            Ok(output) => output,
            Err(e) => return JsonRpcResponse::error(id, e.code, e.message),
        };

        let result = Executor::new(self.service.as_ref())
            .execute(&params.name, output, selection.as_ref())
            .await;

        match serde_json::to_value(result) {
            Ok(val) => JsonRpcResponse::success(id, val),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Serialization error: {}", e)),
        }
    }

    /// Run one named operation
    ///
    /// The outer error rejects the call itself (unknown operation or bad
    /// arguments); the inner result is the operation's own outcome.
    async fn invoke(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<quill_core::Result<Output>, JsonRpcError> {
        let service = self.service.as_ref();

        let output = match name {
            "listAccounts" => {
                let a: QueryArgs = arguments(args)?;
                service
                    .list_accounts(&TextQuery::from(a.query))
                    .await
                    .map(Output::many)
            }
            "listPosts" => {
                let a: QueryArgs = arguments(args)?;
                service
                    .list_posts(&TextQuery::from(a.query))
                    .await
                    .map(Output::many)
            }
            "listComments" => service.list_comments().await.map(Output::many),
            "account" => {
                let a: IdArgs = arguments(args)?;
                service
                    .get_account(&AccountId::new(a.id))
                    .await
                    .map(Output::optional)
            }
            "post" => {
                let a: IdArgs = arguments(args)?;
                service
                    .get_post(&PostId::new(a.id))
                    .await
                    .map(Output::optional)
            }
            "comment" => {
                let a: IdArgs = arguments(args)?;
                service
                    .get_comment(&CommentId::new(a.id))
                    .await
                    .map(Output::optional)
            }
            "createAccount" => {
                let input: NewAccount = arguments(args)?;
                service
                    .create_account(input)
                    .await
                    .map(Output::one)
            }
            "deleteAccount" => {
                let a: IdArgs = arguments(args)?;
                service
                    .delete_account(&AccountId::new(a.id))
                    .await
                    .map(Output::one)
            }
            "createPost" => {
                let input: NewPost = arguments(args)?;
                service
                    .create_post(input)
                    .await
                    .map(Output::one)
            }
            "deletePost" => {
                let a: IdArgs = arguments(args)?;
                service
                    .delete_post(&PostId::new(a.id))
                    .await
                    .map(Output::one)
            }
            "createComment" => {
                let input: NewComment = arguments(args)?;
                service
                    .create_comment(input)
                    .await
                    .map(Output::one)
            }
            "deleteComment" => {
                let a: IdArgs = arguments(args)?;
                service
                    .delete_comment(&CommentId::new(a.id))
                    .await
                    .map(Output::one)
            }
            _ => {
                return Err(JsonRpcError {
                    code: METHOD_NOT_FOUND,
                    message: format!("Unknown operation: {}", name),
                })
            }
        };

        Ok(output)
    }
}
