//! Sky Splat entry point
//!
//! Headless demo runner: drives a seeded session with a simple autopilot at
//! a fixed timestep, prints the outcome and updates the persisted best
//! scores. Usage: `sky-splat [arcade|chaos] [seed]`.

use std::path::Path;

use sky_splat::BestScores;
use sky_splat::consts::SIM_DT;
use sky_splat::levels::LevelConfig;
use sky_splat::sim::{FlightInput, GameMode, GameSession, SessionConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "arcade".to_string());
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let config = match mode.as_str() {
        "chaos" => SessionConfig::mission(seed, LevelConfig::level1()),
        _ => SessionConfig::arcade(seed),
    };
    let game_mode = if config.level.is_some() {
        GameMode::Chaos
    } else {
        GameMode::Arcade
    };
    log::info!("starting {} run with seed {seed}", game_mode.label());

    let mut session = GameSession::new(config);
    let mut step: u64 = 0;

    // Autopilot: chase the nearest unhit target laterally, charge a drop
    // whenever its depth is in the projectile's reachable band.
    while !session.is_finished() {
        let aim = session
            .targets()
            .iter()
            .filter(|t| !t.hit)
            .min_by(|a, b| a.pos.z.total_cmp(&b.pos.z))
            .map(|t| t.pos);

        if let Some(target_pos) = aim {
            let x = session.launcher().position().x;
            session.set_flight_input(FlightInput {
                left: target_pos.x < x - 0.05,
                right: target_pos.x > x + 0.05,
                ..Default::default()
            });

            if (2.3..=3.3).contains(&target_pos.z) {
                session.start_charge();
                session.release_drop();
            }
        } else {
            session.set_flight_input(FlightInput::default());
        }

        session.tick(SIM_DT);
        step += 1;

        // Once per simulated second
        if step % 120 == 0 {
            let hud = session.hud();
            log::info!(
                "t+{:>3}s score {} combo x{} | {} | {}",
                step / 120,
                hud.score,
                hud.combo,
                hud.wind_indicator,
                hud.drop_status
            );
        }
    }

    let Some(outcome) = session.outcome() else {
        return;
    };
    println!("Mode: {}", outcome.mode.label());
    println!("Score: {}", outcome.score);
    println!(
        "Status: {}",
        if outcome.success { "Success" } else { "Mission Failed" }
    );
    println!("Summary: {}", outcome.summary);

    let path = Path::new(sky_splat::highscores::DEFAULT_PATH);
    let mut best = BestScores::load(path);
    if best.record(outcome.mode, outcome.score) {
        println!("New best for {}!", outcome.mode.label());
    } else {
        println!("Best for {}: {}", outcome.mode.label(), best.best(outcome.mode));
    }
    if let Err(err) = best.save(path) {
        log::warn!("could not save best scores: {err}");
    }
}
