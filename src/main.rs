//! Viewer binary: macroquad driver around the core simulation.
//!
//! Owns the pacing (ticks per frame), the track authoring, and the RNG; the
//! core is advanced through [`Simulation::advance`] and read back through
//! its render accessors.

use macroquad::prelude::*;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ::rand::Rng as _;

use raceline::simulation::params::Params;
use raceline::simulation::sim::Simulation;
use raceline::simulation::track::{Barrier, Obstacle, Track};

mod graphics;

const SAVE_PATH: &str = "raceline_save.json";

/// Two concentric obstacle rings with random clutter between them, plus a
/// barrier sweeping across the start straight.
fn build_track() -> Track {
    let mut track = Track::new();
    track.push_ring(400.0, 400.0, 270.0, 50, 10.0);
    track.push_ring(400.0, 400.0, 350.0, 80, 10.0);

    let mut rng = ::rand::rng();
    for _ in 0..10 {
        track.obstacles.push(Obstacle {
            x: rng.random_range(200.0..500.0),
            y: rng.random_range(0.0..600.0),
            radius: 20.0,
        });
    }

    let slot = track.obstacles.len();
    track.obstacles.push(Obstacle {
        x: 400.0,
        y: 90.0,
        radius: 15.0,
    });
    track.barrier = Some(Barrier {
        slot,
        origin: [400.0, 90.0],
        amplitude: [60.0, 0.0],
        period_ticks: 400,
    });

    track
}

#[macroquad::main("Raceline")]
async fn main() {
    let params = Params::default();
    let mut rng = StdRng::from_entropy();
    let mut sim: Option<Simulation> = None;

    println!("Starting car steering evolution");

    loop {
        if sim.is_none() {
            clear_background(LIGHTGRAY);
            let text = "Start a new evolution by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_down(KeyCode::Enter) {
                let simulation = Simulation::new(build_track(), &params, &mut rng)
                    .expect("reference configuration is valid");
                sim = Some(simulation);
            }
            next_frame().await;
            continue;
        }

        clear_background(WHITE);

        if let Some(ref mut sim) = sim {
            let summaries = sim
                .advance(&params, params.ticks_per_update, &mut rng)
                .expect("population was validated at construction");
            for summary in summaries {
                println!(
                    "generation {}: champion {:.0}, mean {:.0}",
                    summary.generation, summary.champion_score, summary.mean_score
                );
            }

            if is_key_pressed(KeyCode::S) {
                match sim.save_to_file(SAVE_PATH) {
                    Ok(()) => println!("saved to {SAVE_PATH}"),
                    Err(e) => println!("save failed: {e}"),
                }
            }
            if is_key_pressed(KeyCode::L) {
                match Simulation::load_from_file(SAVE_PATH) {
                    Ok(loaded) => *sim = loaded,
                    Err(e) => println!("load failed: {e}"),
                }
            }

            graphics::draw_track(&sim.track);
            graphics::draw_cars(sim);
            graphics::draw_hud(sim, &params);
        }

        next_frame().await
    }
}
