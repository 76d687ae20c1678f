//! Wire codecs for the agent endpoint

pub mod jsonrpc;

pub use jsonrpc::{JsonRpcCodec, JsonRpcError, JsonRpcRequest, JsonRpcResponse, Rejection};
