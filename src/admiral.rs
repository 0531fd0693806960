// Admiral module - bootstrap once, then mine and trade forever
use crate::client::{HttpTransport, SimeisClient, Transport};
use crate::config::AgentConfig;
use crate::error::AgentResult;
use crate::models::{Player, PlayerId};
use crate::operations::*;
use crate::v_summary;

/// Phase the agent is in, for status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    Mining,
    Trading,
}

pub struct Admiral<T: Transport = HttpTransport> {
    pub client: SimeisClient<T>,
    config: AgentConfig,
    player_id: PlayerId,
}

impl<T: Transport> Admiral<T> {
    pub fn new(client: SimeisClient<T>, config: AgentConfig, player_id: PlayerId) -> Self {
        Self {
            client,
            config,
            player_id,
        }
    }

    fn poll_policy(&self) -> PollPolicy {
        PollPolicy::from(&self.config.polling)
    }

    pub async fn bootstrap(&self) -> AgentResult<HomeBase> {
        v_summary!("🎖️  Admiral preparing home base...");
        Bootstrapper::new(&self.client, self.player_id).run().await
    }

    /// Print money, cost rate and how long the money lasts at that rate
    pub async fn report_status(&self, next: AgentPhase) -> AgentResult<Player> {
        let player = self.client.get_player(self.player_id).await?;
        let survival = match player.survival_secs() {
            Some(secs) => format!("{} secs", secs as i64),
            None => "unlimited".to_string(),
        };
        v_summary!(
            "📊 [{:?}] {:.2} credits, costs: {:.2}/s, time left before lost: {}",
            next,
            player.money(),
            player.costs(),
            survival
        );
        Ok(player)
    }

    /// One mining cycle followed by one trading cycle, each preceded by a status line
    pub async fn run_cycle(&self, home: HomeBase) -> AgentResult<TradeReport> {
        let policy = self.poll_policy();

        self.report_status(AgentPhase::Mining).await?;
        let mined = MiningOperations::new(&self.client, home, policy).run_cycle().await?;
        v_summary!("⛏️ Cargo filled: {:.1}/{:.1}", mined.cargo.usage, mined.cargo.capacity);

        self.report_status(AgentPhase::Trading).await?;
        let traded = TradingOperations::new(&self.client, home, policy).run_cycle().await?;
        v_summary!("💰 Sold {} lots for {:.2} credits", traded.sales.len(), traded.revenue());

        Ok(traded)
    }

    /// Never returns unless an error stops the agent
    pub async fn run_forever(&self) -> AgentResult<()> {
        let home = self.bootstrap().await?;
        let mut cycle_count: u64 = 0;

        loop {
            cycle_count += 1;
            v_summary!("\n🔄 ═══════ CYCLE #{} ═══════", cycle_count);
            self.run_cycle(home).await?;
        }
    }
}
