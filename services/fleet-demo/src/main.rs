use anyhow::{bail, Context};
use dronefleet_core::{logging, Event, FleetConfig};
use dronefleet_fleet::{
    EnhanceOptions, FleetDrone, FleetManager, FleetObserver, MissionCountObserver, ObserverError,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

const DEMO_PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct VersionHandshake {
    version: &'static str,
    protocol_version: u32,
}

/// Prints every event as it is delivered
struct ConsoleObserver;

impl FleetObserver for ConsoleObserver {
    fn name(&self) -> &str {
        "console"
    }

    fn update(&self, event: &Event) -> Result<(), ObserverError> {
        println!("[OBS] {} -> {}", event.event_type, event.payload);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--version-json") {
        let handshake = VersionHandshake {
            version: env!("CARGO_PKG_VERSION"),
            protocol_version: DEMO_PROTOCOL_VERSION,
        };
        println!("{}", serde_json::to_string(&handshake)?);
        return Ok(());
    }

    let config = match parse_config_path(&args)? {
        Some(path) => FleetConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FleetConfig::default(),
    };
    logging::init_from_config(&config.logging);

    let mut fm = FleetManager::claim(&config)?;
    info!(
        capacity = config.pool.capacity,
        strategy = fm.selection_strategy(),
        "Starting fleet demo"
    );
    run(&mut fm)?;
    info!(stats = %fm.pool_stats(), "Fleet demo finished");
    Ok(())
}

fn run(fm: &mut FleetManager) -> anyhow::Result<()> {
    let counter = Rc::new(MissionCountObserver::new());
    fm.register_observer(Rc::new(ConsoleObserver));
    fm.register_observer(counter.clone());

    fm.preload_drones()?;
    println!("Pool stats after preload: {}", fm.pool_stats());

    let mission = fm
        .create_mission("Survey Sector 7")
        .add_waypoint("WP-1")
        .add_waypoint("WP-2")
        .duration(30)
        .priority(2)
        .payload("HD Camera")
        .build()?;
    println!("Mission built: {mission}");

    let legacy = json!({"title": "Legacy Patrol", "wps": ["L1", "L2"], "len": 15, "prio": 4});
    let adapted = fm.adapt_legacy_mission(&legacy)?;
    println!("Legacy adapted: {adapted}");

    let drone = fm.assign_mission_to_drone(&mission)?;
    println!("Assigned {drone}");
    println!("Capabilities: {}", drone.capabilities());
    println!("Pool stats after checkout: {}", fm.pool_stats());

    let enhanced = fm.enhance_drone(
        drone.clone(),
        EnhanceOptions {
            stealth: true,
            range_extender: true,
        },
    )?;
    println!("Enhanced capabilities: {}", enhanced.capabilities());

    fm.release_drone(&drone)?;
    println!("Pool stats after release: {}", fm.pool_stats());

    let lazy = fm.lazy_drone("combat", "Lazy-X")?;
    println!("Lazy proxy created: {lazy:?}");
    println!("Lazy proxy capabilities: {}", lazy.capabilities());

    println!("Observer mission stats: {}", counter.stats());
    Ok(())
}

fn parse_config_path(args: &[String]) -> anyhow::Result<Option<PathBuf>> {
    let mut args_iter = args.iter();
    while let Some(arg) = args_iter.next() {
        if arg == "--config" {
            match args_iter.next() {
                Some(path) => return Ok(Some(PathBuf::from(path))),
                None => bail!("--config was provided without a path"),
            }
        }
    }
    Ok(None)
}
