use bevy::{ecs::event::Events, log::LogPlugin, prelude::*};
use std::env;

use flyer::{
    components::{AircraftParameters, ControlInput, FlightTrail},
    plugins::{AircraftPlugin, EnvironmentPlugin, FlightModelPlugin},
    resources::ScenarioConfig,
    systems::GroundContactEvent,
    utils::{Result, SimError},
};

fn main() -> Result<()> {
    let scenario = match env::args().nth(1) {
        Some(path) => ScenarioConfig::from_file(&path)?,
        None => ScenarioConfig::default(),
    };
    let parameters = AircraftParameters::from_source(scenario.aircraft.clone())?;
    let aircraft_name = parameters.name.clone();

    let mut app = App::new();
    app.add_plugins(LogPlugin::default())
        .add_plugins(FlightModelPlugin::new(
            scenario.physics.clone(),
            scenario.contact.clone(),
        )?)
        .add_plugins(EnvironmentPlugin::with_config(
            &scenario.environment,
            parameters.air_density,
        )?)
        .add_plugins(AircraftPlugin::new(
            parameters,
            scenario.initial_state.to_state(),
        ));

    // Runs Startup; FixedUpdate is stepped by hand below
    app.update();

    info!("Running {} ticks", scenario.ticks);
    for _ in 0..scenario.ticks {
        let world = app.world_mut();
        let mut inputs = world.query::<&mut ControlInput>();
        for mut input in inputs.iter_mut(world) {
            *input = scenario.controls;
        }

        world.run_schedule(FixedUpdate);

        for event in world.resource_mut::<Events<GroundContactEvent>>().drain() {
            debug!("{:?}", event.transition);
        }
    }

    let world = app.world_mut();
    let mut trails = world.query::<&FlightTrail>();
    let snapshot = trails
        .iter(world)
        .find_map(|trail| trail.latest().copied())
        .ok_or(SimError::NoTelemetry(aircraft_name))?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
