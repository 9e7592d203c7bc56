use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oac_forum::application::{
    BackendBridge, LawUseCase, PassportUseCase, ProfileUpdate, ProfileUseCase, SessionStart,
    SessionUseCase,
};
use oac_forum::domain::entities::{Payload, PassportApplication};
use oac_forum::infrastructure::config::{Command, PassportCommand};
use oac_forum::infrastructure::{
    AppConfig, CliArgs, HostEnvironment, StateStore, StorageManager, build_transport,
    pump_host_messages,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, Option<StorageManager>)> {
    let manager = match StorageManager::new() {
        Ok(manager) => Some(manager),
        Err(e) => {
            eprintln!("config directory unavailable ({e}), using defaults");
            None
        }
    };

    let mut config = match &manager {
        Some(manager) => manager
            .load_config(args.config.as_deref())
            .wrap_err("Failed to load configuration")?,
        None => AppConfig::default(),
    };
    config.merge_with_args(args);

    Ok((config, manager))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn listen(bridge: &BackendBridge, events: &[String]) -> Result<()> {
    if !bridge.mode().is_hosted() {
        warn!("Standalone mode produces no inbound events");
    }

    let mut handles = Vec::with_capacity(events.len());
    let mut forwarders = Vec::with_capacity(events.len());

    for event in events {
        let mut subscription = bridge.subscribe(event).await?;
        handles.push(subscription.unsubscribe_handle());

        forwarders.push(tokio::spawn(async move {
            let event = subscription.event().to_string();
            while let Some(payload) = subscription.recv().await {
                println!("{}", json!({ "event": event, "payload": payload }));
            }
        }));
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stats = pump_host_messages(stdin, bridge.registry())
        .await
        .wrap_err("Failed to read host messages")?;
    info!(?stats, "Input closed, releasing subscriptions");

    for handle in &handles {
        handle.unsubscribe().await;
    }
    for forwarder in forwarders {
        forwarder.await?;
    }

    Ok(())
}

async fn run(command: Command, bridge: BackendBridge, store: Arc<StateStore>) -> Result<()> {
    match command {
        Command::Send { event, payload } => {
            let payload: Payload =
                serde_json::from_str(&payload).wrap_err("Payload must be a JSON object")?;
            let reply = bridge.send(&event, payload).await?;
            print_json(&reply)?;
        }
        Command::Listen { events } => listen(&bridge, &events).await?,
        Command::Session { name } => {
            let session = SessionUseCase::new(bridge.clone(), store.clone());
            let start = session.start().await?;

            if let SessionStart::FirstUse { oab_number } = &start {
                let Some(name) = name else {
                    bail!("First use: pass --name to register OAB number {oab_number}");
                };
                let registration = session.register(&name, oab_number).await?;
                if !registration.acknowledged {
                    warn!("Registration stored locally only");
                }
            }

            let profiles = ProfileUseCase::new(bridge, store);
            let loaded = profiles.load(Some(start.oab_number())).await?;
            print_json(&loaded.profile)?;
        }
        Command::UpdateProfile { name, email, phone } => {
            ProfileUseCase::new(bridge, store)
                .update(&ProfileUpdate { name, email, phone })
                .await?;
            print_json(&json!({ "success": true }))?;
        }
        Command::Laws { query } => {
            let laws = LawUseCase::new(bridge);
            let result = match query {
                Some(query) => laws.search(&query).await?,
                None => laws.list().await?,
            };
            print_json(&result)?;
        }
        Command::Passports(command) => {
            let passports = PassportUseCase::new(bridge);
            match command {
                PassportCommand::Pending => print_json(&passports.pending().await?)?,
                PassportCommand::Create {
                    name,
                    identity,
                    birthdate,
                    photo,
                } => {
                    let id = passports
                        .create(&PassportApplication {
                            name,
                            identity,
                            birthdate,
                            photo: Some(photo),
                        })
                        .await?;
                    print_json(&json!({ "success": true, "id": id }))?;
                }
                PassportCommand::Approve { id } => {
                    passports.approve(&id).await?;
                    print_json(&json!({ "success": true }))?;
                }
                PassportCommand::Reject { id } => {
                    passports.reject(&id).await?;
                    print_json(&json!({ "success": true }))?;
                }
            }
        }
        Command::Exit => {
            SessionUseCase::new(bridge, store).exit().await;
            print_json(&Value::Bool(true))?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let (config, manager) = load_config(&args)?;

    init_logging(&config)?;

    info!(version = oac_forum::VERSION, "Starting OAC Forum bridge");

    let env = HostEnvironment::detect();
    let transport = build_transport(&config.bridge, &env)?;
    let bridge = BackendBridge::new(transport);

    let store = Arc::new(manager.map_or_else(StateStore::new, StateStore::with_manager));

    run(args.command, bridge, store).await
}
