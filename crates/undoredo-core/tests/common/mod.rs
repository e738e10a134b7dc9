// Shared fixtures: the graph domain reducers and action creators.

use serde_json::{json, Value};
use undoredo_core::{create_store, JsonAction, Reducer, Store, UndoRedoEnhancer};

pub type GraphStore = Store<Value, JsonAction>;

pub fn initial_state() -> Value {
    json!({"nodes": [], "connections": []})
}

pub fn generate_node() -> Value {
    let id = uuid::Uuid::new_v4().to_string();
    json!({"id": id, "name": format!("Node-{id}")})
}

pub fn connection(from: &Value, to: &Value) -> Value {
    json!({"from": from["id"], "to": to["id"]})
}

fn slice(state: &Value) -> Vec<Value> {
    state.as_array().cloned().unwrap_or_default()
}

pub fn nodes(state: &Value, action: &JsonAction) -> Value {
    let mut nodes = slice(state);
    match action.action_type.as_str() {
        "ADD-NODE" => {
            let node = &action.payload["node"];
            nodes.push(json!({"id": node["id"], "name": node["name"]}));
        }
        "REMOVE-NODE" => {
            let node_id = &action.payload["nodeId"];
            nodes.retain(|node| &node["id"] != node_id);
        }
        "MODIFY_NODE" => {
            let node_id = &action.payload["nodeId"];
            for node in nodes.iter_mut().filter(|node| &node["id"] == node_id) {
                node["name"] = action.payload["name"].clone();
            }
        }
        _ if state.is_null() => {}
        _ => return state.clone(),
    }
    Value::Array(nodes)
}

pub fn connections(state: &Value, action: &JsonAction) -> Value {
    match action.action_type.as_str() {
        "ADD-CONNECTION" => {
            let mut connections = slice(state);
            let conn = &action.payload["connection"];
            connections.push(json!({"from": conn["from"], "to": conn["to"]}));
            Value::Array(connections)
        }
        "SET-CONNECTIONS" => action.payload["connections"].clone(),
        _ if state.is_null() => json!([]),
        _ => state.clone(),
    }
}

/// `combineReducers({ nodes, connections })`.
pub fn graph_reducer() -> Reducer<Value, JsonAction> {
    Box::new(|state: &Value, action: &JsonAction| {
        json!({
            "nodes": nodes(&state["nodes"], action),
            "connections": connections(&state["connections"], action),
        })
    })
}

pub fn new_store() -> GraphStore {
    create_store(graph_reducer(), initial_state(), UndoRedoEnhancer::default())
}

pub fn add_node(node: &Value, store: &mut GraphStore) {
    store.dispatch(JsonAction::new("ADD-NODE", json!({"node": node})));
}

pub fn remove_node(node_id: &Value, store: &mut GraphStore) {
    store.dispatch(JsonAction::new("REMOVE-NODE", json!({"nodeId": node_id})));
}

pub fn modify_node(node_id: &Value, name: &str, store: &mut GraphStore) {
    store.dispatch(JsonAction::new("MODIFY_NODE", json!({"nodeId": node_id, "name": name})));
}

pub fn add_connection(conn: &Value, store: &mut GraphStore) {
    store.dispatch(JsonAction::new("ADD-CONNECTION", json!({"connection": conn})));
}

pub fn graph(nodes: &[&Value], connections: &[&Value]) -> Value {
    json!({"nodes": nodes, "connections": connections})
}
