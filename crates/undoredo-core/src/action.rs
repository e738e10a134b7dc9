/// Action vocabulary shared by stores and enhancers.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use undoredo_config::{INIT_ACTION, REDO_ACTION, RESET_ACTION, UNDO_ACTION};

/// Something that can be dispatched to a store.
pub trait Action {
    /// The string-typed `type` of the action.
    fn action_type(&self) -> &str;

    /// Builds the action carrying a control signal.
    fn control(control: ControlAction) -> Self
    where
        Self: Sized;
}

/// Actions owned by the store and the history enhancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Dispatched once when a store is created.
    Init,
    Undo,
    Redo,
    Reset,
}

impl ControlAction {
    pub const ALL: [ControlAction; 4] = [Self::Init, Self::Undo, Self::Redo, Self::Reset];

    /// Wire name of the action type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => INIT_ACTION,
            Self::Undo => UNDO_ACTION,
            Self::Redo => REDO_ACTION,
            Self::Reset => RESET_ACTION,
        }
    }

    /// Maps an action type back to a control action.
    pub fn parse(action_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.as_str() == action_type)
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plain `{ "type": ..., "payload": ... }` action.
///
/// A missing `type` deserializes to an empty string and a missing payload
/// to `null`, so malformed actions still dispatch as ordinary actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonAction {
    #[serde(rename = "type", default)]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl JsonAction {
    pub fn new(action_type: impl Into<String>, payload: Value) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }

    /// An action without payload.
    pub fn bare(action_type: impl Into<String>) -> Self {
        Self::new(action_type, Value::Null)
    }
}

impl Action for JsonAction {
    fn action_type(&self) -> &str {
        &self.action_type
    }

    fn control(control: ControlAction) -> Self {
        Self::bare(control.as_str())
    }
}

impl Action for String {
    fn action_type(&self) -> &str {
        self
    }

    fn control(control: ControlAction) -> Self {
        control.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_control_names() {
        assert_eq!(ControlAction::Init.as_str(), "@@redux/INIT");
        assert_eq!(ControlAction::Undo.as_str(), "UNDO");
        assert_eq!(ControlAction::Redo.to_string(), "REDO");
        assert_eq!(ControlAction::Reset.as_str(), "RESET");
    }

    #[test]
    fn test_parse_round_trips_all_controls() {
        for control in ControlAction::ALL {
            assert_eq!(ControlAction::parse(control.as_str()), Some(control));
        }
        assert_eq!(ControlAction::parse("undo"), None);
        assert_eq!(ControlAction::parse("ADD-NODE"), None);
    }

    #[test]
    fn test_json_action_wire_format() {
        let action: JsonAction =
            serde_json::from_value(json!({"type": "ADD-NODE", "payload": {"node": {"id": "a"}}}))
                .expect("deserialize");
        assert_eq!(action.action_type(), "ADD-NODE");
        assert_eq!(action.payload["node"]["id"], "a");
    }

    #[test]
    fn test_json_action_missing_fields() {
        let action: JsonAction = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(action.action_type(), "");
        assert!(action.payload.is_null());
    }

    #[test]
    fn test_bare_action_omits_payload() {
        let json = serde_json::to_value(JsonAction::control(ControlAction::Undo)).expect("ser");
        assert_eq!(json, json!({"type": "UNDO"}));
    }

    #[test]
    fn test_string_action() {
        let action = String::control(ControlAction::Reset);
        assert_eq!(action.action_type(), "RESET");
    }
}
