/// Demo graph domain: `nodes` and `connections` slices with their reducers.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use undoredo_core::{JsonAction, Reducer, Snapshot, Strictness};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

/// The combined `{ nodes, connections }` state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphState {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl Snapshot for GraphState {
    fn same_as(&self, other: &Self, _strictness: Strictness) -> bool {
        self == other
    }
}

#[derive(Deserialize)]
struct AddNode {
    node: Node,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveNode {
    node_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModifyNode {
    node_id: String,
    name: String,
}

#[derive(Deserialize)]
struct AddConnection {
    connection: Connection,
}

#[derive(Deserialize)]
struct SetConnections {
    connections: Vec<Connection>,
}

/// Decodes the payload, logging and returning `None` when it doesn't fit.
fn payload<T: DeserializeOwned>(action: &JsonAction) -> Option<T> {
    match serde_json::from_value(action.payload.clone()) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::warn!("Ignoring {} with malformed payload: {e}", action.action_type);
            None
        }
    }
}

pub fn nodes(state: &[Node], action: &JsonAction) -> Vec<Node> {
    match action.action_type.as_str() {
        "ADD-NODE" => match payload::<AddNode>(action) {
            Some(AddNode { node }) => {
                let mut next = state.to_vec();
                next.push(node);
                next
            }
            None => state.to_vec(),
        },
        "REMOVE-NODE" => match payload::<RemoveNode>(action) {
            Some(RemoveNode { node_id }) => {
                state.iter().filter(|node| node.id != node_id).cloned().collect()
            }
            None => state.to_vec(),
        },
        "MODIFY_NODE" => match payload::<ModifyNode>(action) {
            Some(ModifyNode { node_id, name }) => state
                .iter()
                .map(|node| {
                    if node.id == node_id {
                        Node {
                            name: name.clone(),
                            ..node.clone()
                        }
                    } else {
                        node.clone()
                    }
                })
                .collect(),
            None => state.to_vec(),
        },
        _ => state.to_vec(),
    }
}

pub fn connections(state: &[Connection], action: &JsonAction) -> Vec<Connection> {
    match action.action_type.as_str() {
        "ADD-CONNECTION" => match payload::<AddConnection>(action) {
            Some(AddConnection { connection }) => {
                let mut next = state.to_vec();
                next.push(connection);
                next
            }
            None => state.to_vec(),
        },
        "SET-CONNECTIONS" => match payload::<SetConnections>(action) {
            Some(SetConnections { connections }) => connections,
            None => state.to_vec(),
        },
        _ => state.to_vec(),
    }
}

/// Combines the two slice reducers into one reducer over `GraphState`.
pub fn graph_reducer() -> Reducer<GraphState, JsonAction> {
    Box::new(|state: &GraphState, action: &JsonAction| GraphState {
        nodes: nodes(&state.nodes, action),
        connections: connections(&state.connections, action),
    })
}
