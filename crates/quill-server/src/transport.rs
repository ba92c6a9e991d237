//! JSON-RPC message types and the stdio transport

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: serde_json::Value,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: serde_json::Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Outcome of reading one line from a transport
#[derive(Debug)]
pub enum Incoming {
    Request(JsonRpcRequest),
    /// The line was not a valid request; reply with a parse error
    Malformed(String),
    Eof,
}

/// Parse one line of line-delimited JSON-RPC
pub fn parse_line(line: &str) -> Incoming {
    match serde_json::from_str::<JsonRpcRequest>(line) {
        Ok(request) => Incoming::Request(request),
        Err(e) => Incoming::Malformed(e.to_string()),
    }
}

/// Line-delimited JSON-RPC over stdin/stdout
pub struct StdioTransport {
    reader: BufReader<Stdin>,
    writer: Stdout,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: tokio::io::stdout(),
        }
    }

    /// Read the next non-blank line from stdin
    pub async fn read_request(&mut self) -> std::io::Result<Incoming> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                return Ok(Incoming::Eof);
            }
            if !line.trim().is_empty() {
                return Ok(parse_line(&line));
            }
        }
    }

    /// Write a JSON-RPC response to stdout
    pub async fn write_response(&mut self, response: &JsonRpcResponse) -> std::io::Result<()> {
        let json = serde_json::to_string(response)?;
        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let incoming = parse_line(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        match incoming {
            Incoming::Request(request) => {
                assert_eq!(request.method, "ping");
                assert!(request.params.is_null());
            }
            other => panic!("expected request, got {:?}", other),
        }

        assert!(matches!(parse_line("not json"), Incoming::Malformed(_)));
    }

    #[test]
    fn test_error_response_omits_result() {
        let response = JsonRpcResponse::error(serde_json::json!(7), METHOD_NOT_FOUND, "nope");
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("result").is_none());
        assert_eq!(value["error"]["code"], -32601);
    }
}
