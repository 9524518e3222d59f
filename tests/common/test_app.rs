use bevy::{ecs::event::Events, prelude::*};
use flyer::{
    components::{AirData, AircraftParameters, AircraftState, ControlInput, FlightTrail},
    plugins::{AircraftPlugin, EnvironmentPlugin, FlightModelPlugin},
    resources::{Environment, GroundContactConfig, PhysicsConfig, SimulationClock},
    systems::{ContactTransition, GroundContactEvent},
};

// Builder for creating a headless test application around one aircraft
pub struct TestAppBuilder {
    parameters: AircraftParameters,
    initial_state: AircraftState,
    physics_config: PhysicsConfig,
    contact_config: GroundContactConfig,
    environment: Environment,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            parameters: AircraftParameters::light_ga(),
            initial_state: AircraftState::default(),
            physics_config: PhysicsConfig::default(),
            contact_config: GroundContactConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(mut self, parameters: AircraftParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_initial_state(mut self, state: AircraftState) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = config;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        // No TimePlugin: ticks are driven explicitly through `TestApp::tick`
        app.add_plugins(
            FlightModelPlugin::new(self.physics_config, self.contact_config)
                .expect("test physics config should be valid"),
        )
        .add_plugins(EnvironmentPlugin::with_environment(self.environment))
        .add_plugins(AircraftPlugin::new(self.parameters, self.initial_state));

        // Run Startup to spawn the aircraft
        app.update();

        let aircraft = {
            let world = app.world_mut();
            let mut query = world.query_filtered::<Entity, With<AircraftState>>();
            query.iter(world).next()
        };

        TestApp { app, aircraft }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    aircraft: Option<Entity>,
}

impl TestApp {
    pub fn has_aircraft(&self) -> bool {
        self.aircraft.is_some()
    }

    fn aircraft(&self) -> Entity {
        self.aircraft.expect("no aircraft was spawned")
    }

    /// Runs one fixed tick.
    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Runs one tick with `input` as the pilot input.
    pub fn tick_with(&mut self, input: ControlInput) {
        let aircraft = self.aircraft();
        if let Some(mut current) = self.app.world_mut().get_mut::<ControlInput>(aircraft) {
            *current = input;
        }
        self.tick();
    }

    pub fn run_ticks_with(&mut self, ticks: usize, input: ControlInput) {
        for _ in 0..ticks {
            self.tick_with(input);
        }
    }

    pub fn component<T: Component>(&self) -> &T {
        self.app
            .world()
            .get::<T>(self.aircraft())
            .expect("aircraft is missing a component")
    }

    pub fn component_mut<T: Component>(&mut self) -> Mut<T> {
        let aircraft = self.aircraft();
        self.app
            .world_mut()
            .get_mut::<T>(aircraft)
            .expect("aircraft is missing a component")
    }

    pub fn state(&self) -> &AircraftState {
        self.component::<AircraftState>()
    }

    pub fn air_data(&self) -> &AirData {
        self.component::<AirData>()
    }

    pub fn trail(&self) -> &FlightTrail {
        self.component::<FlightTrail>()
    }

    pub fn input(&self) -> &ControlInput {
        self.component::<ControlInput>()
    }

    pub fn clock(&self) -> SimulationClock {
        *self.app.world().resource::<SimulationClock>()
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.app.world_mut().insert_resource(environment);
    }

    /// Every contact transition sent since the app was built.
    pub fn transitions(&self) -> Vec<ContactTransition> {
        self.app
            .world()
            .resource::<Events<GroundContactEvent>>()
            .iter_current_update_events()
            .map(|event| event.transition)
            .collect()
    }
}
