//! Endpoint descriptors and the transport-neutral request value.
//!
//! DESIGN
//! ======
//! An [`Endpoint`] is pure data: a name, an HTTP method, and a path template
//! with `{param}` placeholders. Building an [`ApiRequest`] renders the path and
//! flattens parameters once, so executors only have to put bytes on the wire.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error returned while building an [`ApiRequest`].
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// A `{param}` placeholder in the path template had no (or an empty) value.
    #[error("endpoint {endpoint} is missing path parameter `{param}`")]
    MissingPathParam { endpoint: &'static str, param: String },
    /// A path parameter value would change the route: it contains `/`, `?`, or `#`.
    #[error("endpoint {endpoint} path parameter `{param}` has reserved characters: {value:?}")]
    InvalidPathParam {
        endpoint: &'static str,
        param: String,
        value: String,
    },
    /// Query parameters or the request body failed to serialize.
    #[error("failed to encode request parameters: {0}")]
    Encode(#[from] serde_json::Error),
    /// Query parameters serialized to something other than an object.
    #[error("query parameters must serialize to a JSON object")]
    QueryShape,
}

/// HTTP method used by an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Uppercase method name as sent on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characters that would let a path argument escape its segment.
const RESERVED_IN_SEGMENT: [char; 3] = ['/', '?', '#'];

/// One row of the endpoint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted identifier, e.g. `"logs.detail"`.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template relative to the API origin, e.g. `"/api/logs/{log_id}"`.
    pub path: &'static str,
}

impl Endpoint {
    /// Describe a `GET` endpoint.
    #[must_use]
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::Get,
            path,
        }
    }

    /// Describe a `POST` endpoint.
    #[must_use]
    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::Post,
            path,
        }
    }

    /// Placeholder names in the path template, in order of appearance.
    #[must_use]
    pub fn path_params(&self) -> Vec<&'static str> {
        let mut params = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let tail = &rest[open + 1..];
            let Some(close) = tail.find('}') else {
                break;
            };
            params.push(&tail[..close]);
            rest = &tail[close + 1..];
        }
        params
    }

    /// Substitute every `{param}` placeholder with its value from `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MissingPathParam`] when a placeholder has no
    /// matching argument or the argument is empty, and
    /// [`ContractError::InvalidPathParam`] when the argument contains a
    /// path, query, or fragment delimiter.
    pub fn render_path(&self, args: &[(&str, &str)]) -> Result<String, ContractError> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open + 1..];
            let Some(close) = tail.find('}') else {
                // Unterminated brace; keep the remainder literally.
                out.push_str(&rest[open..]);
                return Ok(out);
            };
            let param = &tail[..close];
            let value = args
                .iter()
                .find(|(name, value)| *name == param && !value.is_empty())
                .map(|(_, value)| *value)
                .ok_or_else(|| ContractError::MissingPathParam {
                    endpoint: self.name,
                    param: param.to_owned(),
                })?;
            if value.contains(RESERVED_IN_SEGMENT) {
                return Err(ContractError::InvalidPathParam {
                    endpoint: self.name,
                    param: param.to_owned(),
                    value: value.to_owned(),
                });
            }
            out.push_str(value);
            rest = &tail[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// A fully built request for `endpoint`, typed by its response `R`.
pub struct ApiRequest<R> {
    endpoint: &'static Endpoint,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    response: PhantomData<fn() -> R>,
}

impl<R> ApiRequest<R> {
    /// Start a request by rendering the endpoint's path template.
    ///
    /// # Errors
    ///
    /// Propagates [`Endpoint::render_path`] failures.
    pub fn new(endpoint: &'static Endpoint, args: &[(&str, &str)]) -> Result<Self, ContractError> {
        Ok(Self {
            endpoint,
            path: endpoint.render_path(args)?,
            query: Vec::new(),
            body: None,
            response: PhantomData,
        })
    }

    /// Attach query parameters flattened from a serializable struct.
    ///
    /// # Errors
    ///
    /// See [`query_pairs`].
    pub fn with_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, ContractError> {
        self.query = query_pairs(params)?;
        Ok(self)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Encode`] if `body` fails to serialize.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ContractError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Endpoint this request targets.
    #[must_use]
    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.endpoint.method
    }

    /// Rendered path, without origin or query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in the order they should be sent.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Drop the response type so the payload can be consumed as raw JSON.
    #[must_use]
    pub fn untyped(self) -> ApiRequest<Value> {
        ApiRequest {
            endpoint: self.endpoint,
            path: self.path,
            query: self.query,
            body: self.body,
            response: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ApiRequest<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("endpoint", &self.endpoint.name)
            .field("method", &self.endpoint.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

/// Flatten a parameter struct into `(name, value)` query pairs.
///
/// `None`/`null` fields are omitted, strings are passed through raw, and every
/// other value uses its JSON text (`true`, `20`, `0.5`). A unit value yields
/// no pairs. Keys come out in lexicographic order.
///
/// # Errors
///
/// Returns [`ContractError::QueryShape`] if `params` is not a struct/map and
/// [`ContractError::Encode`] if it fails to serialize.
pub fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>, ContractError> {
    match serde_json::to_value(params)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| query_value(value).map(|value| (key, value)))
            .collect()),
        _ => Err(ContractError::QueryShape),
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Paged list envelope.
///
/// The dashboard contract names the fields `data`/`total`; the training-sample
/// route answers with `samples`/`count`, which are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "samples")]
    pub data: Vec<T>,
    #[serde(alias = "count", default)]
    pub total: u64,
}

/// `days` look-back window shared by the statistics endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

/// Deserialize `null` as the field type's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
