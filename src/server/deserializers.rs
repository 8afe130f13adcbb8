use serde::{Deserialize, Deserializer};
use serde_json::Value;

// clients send ids and difficulties either as numbers or as numeric strings,
// so the raw value is kept and interpreted after the emptiness check
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loose {
    #[default]
    Missing,
    Present(Value),
}

impl<'de> Deserialize<'de> for Loose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Loose::Present(Value::deserialize(deserializer)?))
    }
}

impl Loose {
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Loose::Present(Value::String(s)) if s.is_empty())
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            Loose::Present(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Loose::Present(Value::Number(n)) => n.as_i64(),
            Loose::Present(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Integers and strings in their textual form.
    pub fn as_key(&self) -> Option<String> {
        match self {
            Loose::Present(Value::Number(n)) => n.as_i64().map(|v| v.to_string()),
            Loose::Present(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}
