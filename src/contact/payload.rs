//! Inbound create/update bodies, before anything about their contents is trusted.

use serde::Deserialize;
use serde_json::Value;

use super::NewContact;
use crate::ServiceError;

/// The body of a create or update request. Fields are kept as raw JSON
/// so that "missing" can mean any falsy value, not just an absent key.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
}

fn is_absent(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

fn cast_to_string(path: &str, v: &Value, context: &str) -> Result<String, ServiceError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ServiceError::ValidationFailed(format!(
            "{}: {}: Cast to string failed for value \"{}\" at path \"{}\"",
            context, path, other, path
        ))),
    }
}

impl ContactPayload {
    /// Which fields are missing, if any, in the order clients are told about them.
    pub fn missing(&self) -> Option<&'static str> {
        match (is_absent(self.name.as_ref()), is_absent(self.number.as_ref())) {
            (true, true) => Some("name and number"),
            (true, false) => Some("name"),
            (false, true) => Some("number"),
            (false, false) => None,
        }
    }

    /// Turns the payload into a contact, or says why it can't be one yet.
    /// `context` prefixes the message if a field has a type no string can be made from.
    pub fn into_contact(self, context: &str) -> Result<NewContact, ServiceError> {
        if let Some(what) = self.missing() {
            return Err(ServiceError::MissingField(what));
        }

        Ok(NewContact {
            name: cast_to_string("name", &self.name.unwrap_or_default(), context)?,
            number: cast_to_string("number", &self.number.unwrap_or_default(), context)?,
        })
    }
}
