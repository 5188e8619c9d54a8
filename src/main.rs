//! Galaxy Golf entry point
//!
//! Headless native driver: plays a course with the demo player at the nominal
//! tick rate and logs what happens. Set `RUST_LOG=debug` for per-shot output.
//!
//! Usage: `galaxy-golf [course.json] [seed] [settings.json]`

use galaxy_golf::{
    CourseDef, GameEvent, Level, Settings, demo::DemoPlayer, input::apply_inputs,
    view::LevelView,
};

/// Give up after this many simulated seconds
const MAX_SECONDS: u64 = 300;

const DEFAULT_SEED: u64 = 2020;

fn load_course(path: Option<&str>) -> CourseDef {
    let Some(path) = path else {
        log::info!("No course file given, using the sample course");
        return CourseDef::sample();
    };

    match std::fs::read_to_string(path) {
        Ok(json) => match CourseDef::from_json(&json) {
            Ok(course) => {
                log::info!(
                    "Loaded course from {} ({} obstacles)",
                    path,
                    course.obstacles.len()
                );
                course
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {} - using the sample course", path, e);
                CourseDef::sample()
            }
        },
        Err(e) => {
            log::warn!("Failed to read {}: {} - using the sample course", path, e);
            CourseDef::sample()
        }
    }
}

fn load_settings(path: Option<&str>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };

    match std::fs::read_to_string(path) {
        Ok(json) => match Settings::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {} - using defaults", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read {}: {} - using defaults", path, e);
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Galaxy Golf (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let course = load_course(args.first().map(String::as_str));
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let settings = load_settings(args.get(2).map(String::as_str));

    let mut level = Level::from_course(settings, &course);
    let mut player = DemoPlayer::new(seed);
    log::info!("Demo player seeded with {}", seed);

    let ticks_per_second = (level.settings().ticks_per_second.round() as u64).max(1);
    let max_ticks = ticks_per_second * MAX_SECONDS;
    let mut respawns = 0u32;

    while level.tick_count() < max_ticks && !level.is_holed() {
        if let Some(shot) = player.next_shot(&level) {
            apply_inputs(&mut level, shot);
        }

        for event in level.tick() {
            if event == GameEvent::Respawned {
                respawns += 1;
            }
        }

        if level.tick_count() % ticks_per_second == 0 {
            match LevelView::capture(&level).to_json() {
                Ok(json) => log::trace!("{}", json),
                Err(e) => log::warn!("Failed to serialize frame: {}", e),
            }
        }
    }

    let seconds = level.tick_count() as f32 / level.settings().ticks_per_second;
    if level.is_holed() {
        log::info!(
            "Holed in {} shots ({} respawns) after {:.1}s",
            player.shots(),
            respawns,
            seconds
        );
    } else {
        log::warn!(
            "Gave up after {} shots ({} respawns), {:.1}s simulated",
            player.shots(),
            respawns,
            seconds
        );
    }

    match LevelView::capture(&level).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
