use bevy::prelude::*;
use flyer::{
    components::{AircraftParameters, AircraftSource, ConfigError},
    plugins::EnvironmentPlugin,
    resources::{Environment, EnvironmentConfig, ScenarioConfig, WindConfig},
};
use pretty_assertions::assert_eq;

use crate::common::{assert_state_valid, write_temp_yaml, TestAppBuilder, LIGHT_GA_YAML};

#[test]
fn test_bundled_light_ga_matches_preset() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/light_ga.yaml");
    let loaded = AircraftParameters::from_file(path).expect("bundled config should load");

    assert_eq!(loaded, AircraftParameters::light_ga());
}

#[test]
fn test_flies_aircraft_loaded_from_file() {
    let file = write_temp_yaml(LIGHT_GA_YAML);
    let params =
        AircraftParameters::from_source(AircraftSource::File(file.path().to_path_buf()))
            .expect("temp config should load");
    assert_eq!(params.name, "TestTrainer");
    assert_eq!(params.propulsion.max_thrust, 18000.0);

    let mut app = TestAppBuilder::new().with_parameters(params).build();
    app.run_ticks(120);

    assert_state_valid(app.state());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = AircraftParameters::from_file("/definitely/not/here.yaml");
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_invalid_parameters_are_not_spawned() {
    let mut params = AircraftParameters::light_ga();
    params.mass.mass = -5.0;

    let app = TestAppBuilder::new().with_parameters(params).build();

    assert!(!app.has_aircraft());
}

#[test]
fn test_scenario_file_round_trip() {
    let aircraft_file = write_temp_yaml(LIGHT_GA_YAML);
    let scenario_yaml = format!(
        r#"
aircraft: !File {}
ticks: 30
initial_state:
  position: [0.0, 0.0, -50.0]
  velocity: [35.0, 0.0, 0.0]
environment:
  wind: !RandomConstant {{ max_north: 2.0, max_east: 1.0, seed: 3 }}
"#,
        aircraft_file.path().display()
    );
    let scenario_file = write_temp_yaml(&scenario_yaml);

    let scenario = ScenarioConfig::from_file(scenario_file.path()).expect("scenario should load");
    assert_eq!(scenario.ticks, 30);
    assert!(matches!(
        scenario.environment.wind,
        WindConfig::RandomConstant { seed: Some(3), .. }
    ));

    let params = AircraftParameters::from_source(scenario.aircraft.clone())
        .expect("scenario aircraft should load");
    let mut app = TestAppBuilder::new()
        .with_parameters(params)
        .with_initial_state(scenario.initial_state.to_state())
        .build();
    app.run_ticks(scenario.ticks);

    assert_state_valid(app.state());
    assert_eq!(app.clock().ticks, 30);
}

#[test]
fn test_environment_plugin_rejects_bad_density() {
    let config = EnvironmentConfig {
        air_density: Some(-1.0),
        ..Default::default()
    };
    assert!(EnvironmentPlugin::with_config(&config, 1.225).is_err());
}

#[test]
fn test_unset_density_comes_from_aircraft() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/takeoff_roll.yaml");
    let scenario = ScenarioConfig::from_file(path).expect("bundled scenario should load");
    assert_eq!(scenario.environment.air_density, None);

    let mut params = AircraftParameters::light_ga();
    params.air_density = 0.95;
    let plugin = EnvironmentPlugin::with_config(&scenario.environment, params.air_density)
        .expect("environment should build");

    let mut app = App::new();
    app.add_plugins(plugin);
    assert_eq!(app.world().resource::<Environment>().air_density, 0.95);
}
