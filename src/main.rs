// Simeis trading agent - entry point
use clap::Parser;
use simeis_agent::operations::{Enrollment, IdentityManager};
use simeis_agent::storage::FileIdentityStore;
use simeis_agent::verbosity::set_verbosity_level;
use simeis_agent::{Admiral, AgentConfig, HttpTransport, SimeisClient, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(version, about = "Autonomous mining and trading agent for a Simeis server")]
struct Args {
    /// Player name; only its letters and digits are kept
    handle: String,

    /// Configuration file, created with defaults when missing
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Override the server URL from the configuration
    #[arg(long)]
    server: Option<String>,

    /// Increase output (-v progress, -vv every request)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AgentConfig::load_or_create(&args.config)?;
    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    if args.verbose > 0 {
        config.logging.verbosity = args.verbose.min(2);
    }
    config.validate()?;
    set_verbosity_level(config.logging.verbosity);
    config.print_summary();

    let mut client = SimeisClient::new(HttpTransport::new(&config)?);
    if let Err(e) = client.ping().await {
        eprintln!("❌ Server at {} is not answering: {}", config.server.base_url, e);
        return Err(e.into());
    }
    println!("🌐 Connection to server OK");

    let store = FileIdentityStore::new(&config.storage.identity_dir);
    let session = match IdentityManager::new(&store)
        .load_or_register(&mut client, &args.handle)
        .await?
    {
        Enrollment::Active(session) => session,
        Enrollment::Lost(player) => {
            println!(
                "!!! Player {} already lost ({:.2} credits), \
                 restart the server or pick another name",
                player.name,
                player.money()
            );
            std::process::exit(0);
        }
    };

    println!("🚀 Playing as {} (player {})", session.handle, session.player.id);
    let admiral = Admiral::new(client, config, session.player.id);

    if let Err(e) = admiral.run_forever().await {
        eprintln!("\n❌ Autonomous operations failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
