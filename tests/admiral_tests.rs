mod common;

use common::*;
use serde_json::json;
use simeis_agent::operations::HomeBase;
use simeis_agent::{Admiral, AgentConfig, AgentPhase};

fn test_config() -> AgentConfig {
    let mut config = AgentConfig::default();
    config.polling.idle_interval_seconds = 0.001;
    config.polling.max_wait_seconds = 5;
    config
}

#[tokio::test]
async fn test_status_reports_player_finances() {
    let client = fake_client();
    client.transport().ok("/player/7", player(7, 900.0, 3.0, vec![]));

    let player = Admiral::new(client, test_config(), 7)
        .report_status(AgentPhase::Mining)
        .await
        .unwrap();

    assert_eq!(player.money(), 900.0);
    assert_eq!(player.survival_secs(), Some(300.0));
}

#[tokio::test]
async fn test_one_cycle_mines_then_sells() {
    let at_home = with_module(idle_ship([0, 0, 0]), 77, "Miner");
    let at_planet = with_module(idle_ship([3, 4, 0]), 77, "Miner");
    let full_at_planet = with_cargo(at_planet.clone(), json!({"Stone": 10.0}));
    let full_at_home = with_cargo(at_home.clone(), json!({"Stone": 10.0}));

    let client = fake_client();
    client
        .transport()
        .ok("/player/7", player(7, 900.0, 3.0, vec![]))
        .ok("/station/1", station([0, 0, 0], json!({})))
        .ok(
            "/station/1/scan",
            json!({"planets": [{"position": [3, 4, 0], "temperature": 300, "solid": true}]}),
        )
        .ok("/ship/5", at_home.clone())
        .ok("/ship/5", at_home.clone())
        .ok("/ship/5", at_planet)
        .ok("/ship/5", full_at_planet.clone())
        .ok("/ship/5", full_at_planet)
        .ok("/ship/5", full_at_home)
        .ok("/ship/5", at_home)
        .ok("/ship/5/navigate/3/4/0", json!({"distance": 5.0, "duration": 0.0}))
        .ok("/ship/5/navigate/0/0/0", json!({"distance": 5.0, "duration": 0.0}))
        .ok("/ship/5/extraction/start", json!({"Stone": 1.0}))
        .ok("/market/prices", json!({"prices": {"Stone": 3.0}}))
        .ok("/ship/5/unload/Stone/10", json!({"unloaded": 10.0}))
        .ok("/market/1/sell/Stone/10", json!({"added_money": 30.0}));

    let admiral = Admiral::new(client, test_config(), 7);
    let report = admiral
        .run_cycle(HomeBase {
            station_id: STATION_ID,
            ship_id: SHIP_ID,
        })
        .await
        .unwrap();

    assert_eq!(report.revenue(), 30.0);
    let server = admiral.client.transport();
    assert_eq!(server.count("/player/7"), 2);
    assert_eq!(server.count("/ship/5/extraction/start"), 1);
    assert_eq!(server.count("/market/1/sell/Stone/10"), 1);
}
