mod common;

use common::*;
use serde_json::json;
use simeis_agent::operations::{PollPolicy, ShipPoller};
use simeis_agent::AgentError;
use std::time::Duration;

fn policy(max_wait: Option<Duration>) -> PollPolicy {
    PollPolicy {
        interval: Duration::from_millis(1),
        max_wait,
    }
}

#[tokio::test]
async fn test_waits_until_idle() {
    let client = fake_client();
    client
        .transport()
        .ok("/ship/5", ship([0, 0, 0], json!({"Extracting": {"Stone": 1.0}})))
        .ok("/ship/5", ship([0, 0, 0], json!({"Extracting": {"Stone": 1.0}})))
        .ok("/ship/5", idle_ship([0, 0, 0]));

    let ship = ShipPoller::new(&client, policy(None))
        .wait_idle(SHIP_ID)
        .await
        .unwrap();

    assert!(ship.is_idle());
    assert_eq!(client.transport().count("/ship/5"), 3);
}

#[tokio::test]
async fn test_idle_ship_is_checked_once() {
    let client = fake_client();
    client.transport().ok("/ship/5", idle_ship([1, 1, 1]));

    let ship = ShipPoller::new(&client, policy(None))
        .wait_idle(SHIP_ID)
        .await
        .unwrap();

    assert_eq!(ship.position, (1, 1, 1));
    assert_eq!(client.transport().count("/ship/5"), 1);
}

#[tokio::test]
async fn test_busy_ship_times_out() {
    let client = fake_client();
    client
        .transport()
        .ok("/ship/5", ship([0, 0, 0], json!({"InFlight": {"dist_done": 0.1}})));

    let result = ShipPoller::new(&client, policy(Some(Duration::from_millis(20))))
        .wait_idle(SHIP_ID)
        .await;

    match result {
        Err(AgentError::PollTimeout { ship_id, waited_secs }) => {
            assert_eq!(ship_id, SHIP_ID);
            assert!(waited_secs >= 0.02);
        }
        other => panic!("expected a timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_poll_error_propagates() {
    let client = fake_client();
    client.transport().fail("/ship/5", "Ship 5 not found");

    let result = ShipPoller::new(&client, policy(None)).wait_idle(SHIP_ID).await;
    assert!(result.unwrap_err().is_service());
}

#[tokio::test]
async fn test_travel_sends_ship_and_waits_for_arrival() {
    let client = fake_client();
    client
        .transport()
        .ok(
            "/ship/5/navigate/-3/0/12",
            json!({"direction": [0.0, 0.0, 1.0], "distance": 12.4, "duration": 0.001,
                   "fuel_consumption": 2.0, "hull_usage": 0.2}),
        )
        .ok("/ship/5", ship([0, 0, 0], json!({"InFlight": {"dist_done": 0.5}})))
        .ok("/ship/5", idle_ship([-3, 0, 12]));

    let cost = ShipPoller::new(&client, policy(None))
        .travel_to(SHIP_ID, &(-3, 0, 12))
        .await
        .unwrap();

    assert_eq!(cost.distance, 12.4);
    assert_eq!(
        client.transport().paths(),
        vec!["/ship/5/navigate/-3/0/12", "/ship/5", "/ship/5"]
    );
}

#[test]
fn test_default_policy_matches_default_config() {
    let policy = PollPolicy::default();
    assert_eq!(policy.interval, Duration::from_secs(2));
    assert_eq!(policy.max_wait, Some(Duration::from_secs(3600)));
}
