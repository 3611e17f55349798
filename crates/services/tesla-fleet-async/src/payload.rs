//! Decoded response bodies

use bytes::Bytes;
use serde_json::Value;

/// Body of a successful (2xx) response
///
/// Most endpoints answer JSON. A few, such as charging invoices, return PDF
/// or other opaque content, which is kept as-is instead of failing to decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The response had no body
    Empty,
    /// The body decoded as JSON
    Json(Value),
    /// The body was not JSON but was valid UTF-8
    Text(String),
    /// The body was neither JSON nor UTF-8
    Binary(Bytes),
}

impl Payload {
    /// Decodes a 2xx body: JSON first, then text, then raw bytes
    #[must_use]
    pub fn from_body(body: Bytes) -> Self {
        if body.is_empty() {
            return Self::Empty;
        }
        if let Ok(v) = serde_json::from_slice::<Value>(&body) {
            return Self::Json(v);
        }
        match std::str::from_utf8(&body) {
            Ok(s) => Self::Text(s.to_owned()),
            Err(_) => Self::Binary(body),
        }
    }

    /// Returns true for [`Payload::Empty`]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the JSON value, if any
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the JSON value, if any
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Raw body bytes for text and binary payloads
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(s) => Some(s.as_bytes()),
            Self::Binary(b) => Some(b),
            Self::Empty | Self::Json(_) => None,
        }
    }

    /// Unwraps the `response` envelope used by vehicle commands
    ///
    /// A JSON object carrying a `response` key yields that value; any other
    /// payload is returned unchanged.
    #[must_use]
    pub fn unwrap_response(self) -> Self {
        match self {
            Self::Json(Value::Object(mut map)) => match map.remove("response") {
                Some(inner) => Self::Json(inner),
                None => Self::Json(Value::Object(map)),
            },
            other => other,
        }
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Self::Json(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_empty() {
        assert_eq!(Payload::from_body(Bytes::new()), Payload::Empty);
    }

    #[test]
    fn json_body_is_decoded() {
        let p = Payload::from_body(Bytes::from_static(br#"{"response": {"id": 1}}"#));
        assert_eq!(p.as_json().unwrap()["response"]["id"], 1);
    }

    #[test]
    fn text_body_falls_back_to_text() {
        let p = Payload::from_body(Bytes::from_static(b"not json at all"));
        assert_eq!(p, Payload::Text("not json at all".into()));
    }

    #[test]
    fn binary_body_is_kept_verbatim() {
        let raw: &[u8] = b"%PDF-1.7\n\xff\xd8\xff\x00";
        let p = Payload::from_body(Bytes::copy_from_slice(raw));
        assert_eq!(p.as_bytes(), Some(raw));
        assert!(matches!(p, Payload::Binary(_)));
    }

    #[test]
    fn unwrap_response_takes_inner_value() {
        let p = Payload::Json(json!({"response": {"result": true, "reason": ""}}));
        assert_eq!(
            p.unwrap_response(),
            Payload::Json(json!({"result": true, "reason": ""}))
        );
    }

    #[test]
    fn unwrap_response_leaves_other_shapes() {
        let obj = Payload::Json(json!({"result": false}));
        assert_eq!(obj.clone().unwrap_response(), obj);

        let arr = Payload::Json(json!([1, 2]));
        assert_eq!(arr.clone().unwrap_response(), arr);

        assert_eq!(Payload::Empty.unwrap_response(), Payload::Empty);
    }

    #[test]
    fn null_response_is_still_unwrapped() {
        let p = Payload::Json(json!({"response": null, "error": "vehicle offline"}));
        assert_eq!(p.unwrap_response(), Payload::Json(Value::Null));
    }
}
