use thicket_agents::Habitat;
use thicket_core::{Location, Species, StepId};
use thicket_engine::{SeedingConfig, SimConfig, Simulator, Snapshot, WeatherConfig};
use thicket_test_utils::fixtures::{female_prey_field, plant_in_clearing};
use thicket_test_utils::{assert_occupancy_consistent, quiet_params, HabitatBuilder};

/// Always sunny, never regrows, no disease.
fn sunny() -> SimConfig {
    SimConfig {
        seeding: SeedingConfig::empty(),
        weather: WeatherConfig {
            fog_threshold: 0.0,
            rain_threshold: 0.0,
            regrowth_probability: 0.0,
        },
        lifecycle: quiet_params(),
        ..SimConfig::default()
    }
}

/// Always foggy.
fn foggy() -> SimConfig {
    SimConfig {
        weather: WeatherConfig {
            fog_threshold: 1.0,
            rain_threshold: 1.0,
            regrowth_probability: 0.0,
        },
        ..sunny()
    }
}

fn age_of(habitat: &Habitat, loc: Location) -> u32 {
    habitat.occupant(loc).unwrap().unwrap().state().age
}

#[test]
fn nocturnal_and_diurnal_agents_alternate() {
    let (habitat, ids) = HabitatBuilder::new(1, 12)
        .with(Species::Mouse, 0, 0)
        .with(Species::Snake, 0, 11)
        .build();
    let mut sim = Simulator::with_habitat(sunny(), habitat).unwrap();

    let night = sim.step().unwrap();
    assert!(!night.is_day());
    assert_eq!(night.stats.acted, 1);
    assert_eq!(sim.habitat().agent(ids[0]).unwrap().state().age, 1);
    assert_eq!(sim.habitat().agent(ids[1]).unwrap().state().age, 0);

    let day = sim.step().unwrap();
    assert!(day.is_day());
    assert_eq!(day.stats.acted, 1);
    assert_eq!(sim.habitat().agent(ids[0]).unwrap().state().age, 1);
    assert_eq!(sim.habitat().agent(ids[1]).unwrap().state().age, 1);
}

#[test]
fn fog_freezes_predators_only() {
    let (habitat, ids) = HabitatBuilder::new(1, 12)
        .with(Species::Mouse, 0, 0)
        .with(Species::Eagle, 0, 11)
        .build();
    let mut sim = Simulator::with_habitat(foggy(), habitat).unwrap();
    let eagle_before = *sim.habitat().agent(ids[1]).unwrap();

    for _ in 0..4 {
        let s = sim.step().unwrap();
        assert_eq!(s.stats.frozen, 1);
    }
    let eagle = sim.habitat().agent(ids[1]).unwrap();
    assert_eq!(eagle.state(), eagle_before.state());
    assert_eq!(eagle.location(), eagle_before.location());
    assert_eq!(sim.habitat().agent(ids[0]).unwrap().state().age, 2);
}

#[test]
fn newborns_wait_for_the_next_step() {
    let (habitat, _) = plant_in_clearing();
    let mut sim = Simulator::with_habitat(sunny(), habitat).unwrap();

    let s1 = sim.step().unwrap();
    assert_eq!(s1.stats.births, 8);
    assert_eq!(s1.population(Species::Plant), 9);
    assert_eq!(age_of(sim.habitat(), Location::new(2, 2)), 1);
    assert_eq!(age_of(sim.habitat(), Location::new(1, 1)), 0);
    assert_eq!(age_of(sim.habitat(), Location::new(3, 3)), 0);

    // Plants are nocturnal; the day step leaves them alone.
    sim.step().unwrap();
    assert_eq!(age_of(sim.habitat(), Location::new(1, 1)), 0);

    sim.step().unwrap();
    assert_eq!(age_of(sim.habitat(), Location::new(1, 1)), 1);
}

#[test]
fn rain_then_sun_regrows_every_empty_cell() {
    let config = SimConfig {
        seed: 17,
        grid: thicket_engine::GridConfig { depth: 4, width: 4 },
        weather: WeatherConfig {
            fog_threshold: 0.0,
            rain_threshold: 0.5,
            regrowth_probability: 1.0,
        },
        ..sunny()
    };
    let mut sim = Simulator::new(config).unwrap();
    assert_eq!(sim.latest().census.total(), 0);

    let mut regrew = false;
    for _ in 0..200 {
        let s = sim.step().unwrap();
        if s.two_day_report == "RainSun" {
            assert_eq!(s.stats.regrown, 16);
            assert_eq!(s.population(Species::Plant), 16);
            regrew = true;
            break;
        }
        assert_eq!(s.stats.regrown, 0);
    }
    assert!(regrew, "no rain-then-sun in 200 steps");
}

#[test]
fn population_without_mates_never_grows() {
    let habitat = female_prey_field(10);
    let mut sim = Simulator::with_habitat(sunny(), habitat).unwrap();
    let mut previous = sim.latest().census.total();
    assert!(previous > 0);
    let summary = sim
        .run_for(
            120,
            |_: &Snapshot| true,
            |s: &Snapshot| {
                assert_eq!(s.stats.births, 0);
                assert!(s.census.total() <= previous);
                previous = s.census.total();
            },
        )
        .unwrap();
    assert_eq!(summary.final_step, StepId(120));
    assert_occupancy_consistent(sim.habitat());
}

#[test]
fn single_mouse_scenario_moves_off_its_cell() {
    let (habitat, ids) = HabitatBuilder::new(3, 3)
        .with(Species::Mouse, 1, 1)
        .build();
    let mut sim = Simulator::with_habitat(sunny(), habitat).unwrap();
    sim.step().unwrap();
    let mouse = sim.habitat().agent(ids[0]).unwrap();
    assert_eq!(mouse.state().age, 1);
    assert_eq!(
        mouse.state().food_level,
        Some(Species::Mouse.traits().food_value as i32 - 1)
    );
    assert_ne!(mouse.location(), Some(Location::new(1, 1)));
}

#[test]
fn predator_eats_prey_in_its_phase() {
    let (habitat, ids) = HabitatBuilder::new(3, 3)
        .with(Species::Scorpion, 1, 1)
        .with(Species::Cricket, 0, 0)
        .build();
    let mut sim = Simulator::with_habitat(sunny(), habitat).unwrap();
    let s = sim.step().unwrap();
    assert!(!s.is_day());
    assert_eq!(s.stats.deaths(thicket_core::DeathCause::Eaten), 1);
    assert!(sim.habitat().agent(ids[1]).is_none());
    assert_eq!(
        sim.habitat().agent(ids[0]).unwrap().state().food_level,
        Some(Species::Cricket.traits().food_value as i32)
    );
}
