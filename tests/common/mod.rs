#![allow(dead_code)]
// Scripted in-memory game service shared by the integration tests

use async_trait::async_trait;
use serde_json::{json, Value};
use simeis_agent::{AgentResult, SimeisClient, Transport};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn key(&self) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == "key")
            .map(|(_, value)| value.as_str())
    }
}

/// Serves queued bodies per exact path; the last body queued for a path keeps being served
#[derive(Default)]
pub struct FakeServer {
    routes: Mutex<HashMap<String, VecDeque<Value>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, path: &str, body: Value) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(body);
        self
    }

    /// Queue a successful payload
    pub fn ok(&self, path: &str, mut payload: Value) -> &Self {
        payload["error"] = json!("ok");
        self.raw(path, payload)
    }

    /// Queue a service-level failure
    pub fn fail(&self, path: &str, message: &str) -> &Self {
        self.raw(path, json!({ "error": message }))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.paths().iter().filter(|p| *p == path).count()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.paths().iter().filter(|p| p.starts_with(prefix)).count()
    }

    pub fn called(&self, path: &str) -> bool {
        self.count(path) > 0
    }
}

#[async_trait]
impl Transport for FakeServer {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> AgentResult<Value> {
        self.calls.lock().unwrap().push(Call {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        });

        let mut routes = self.routes.lock().unwrap();
        let body = match routes.get_mut(path) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(body.unwrap_or_else(|| json!({ "error": format!("no route for {}", path) })))
    }
}

pub fn fake_client() -> SimeisClient<FakeServer> {
    SimeisClient::new(FakeServer::new())
}

// Fixtures

pub const STATION_ID: u64 = 1;
pub const SHIP_ID: u64 = 5;

pub fn ship(position: [i64; 3], state: Value) -> Value {
    json!({
        "id": SHIP_ID,
        "position": position,
        "state": state,
        "cargo": {"resources": {}, "usage": 0.0, "capacity": 100.0},
        "modules": {},
        "crew": {},
        "hull_decay": 0.0,
        "fuel_tank": 50.0,
        "fuel_tank_capacity": 50.0,
    })
}

pub fn idle_ship(position: [i64; 3]) -> Value {
    ship(position, json!("Idle"))
}

pub fn with_module(mut ship: Value, module_id: u64, modtype: &str) -> Value {
    ship["modules"][module_id.to_string()] = json!({"modtype": modtype, "rank": 1});
    ship
}

pub fn with_crew(mut target: Value, crew_id: u64, role: &str) -> Value {
    target["crew"][crew_id.to_string()] = json!({"member_type": role, "rank": 1});
    target
}

pub fn with_cargo(mut ship: Value, resources: Value) -> Value {
    ship["cargo"]["resources"] = resources;
    ship
}

pub fn station(position: [i64; 3], resources: Value) -> Value {
    json!({
        "id": STATION_ID,
        "position": position,
        "crew": {},
        "cargo": {"resources": resources, "usage": 0.0},
        "idle_crew": {},
        "trader": null,
    })
}

pub fn player(id: u64, money: f64, costs: f64, ships: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": "tester",
        "stations": { STATION_ID.to_string(): [0, 0, 0] },
        "money": money,
        "costs": costs,
        "ships": ships,
    })
}
