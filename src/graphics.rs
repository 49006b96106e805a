//! Drawing routines for the viewer binary.
//!
//! Reads only the core's render accessors: car pose, sensor probes, the
//! collided flag, and the champion index.

use macroquad::prelude::*;

use raceline::simulation::params::Params;
use raceline::simulation::sim::Simulation;
use raceline::simulation::track::Track;

pub fn draw_track(track: &Track) {
    for obstacle in &track.obstacles {
        draw_circle(obstacle.x, obstacle.y, obstacle.radius, DARKGRAY);
    }
}

pub fn draw_cars(sim: &Simulation) {
    let index = sim.track.index().expect("failed to build obstacle index");
    let champion = sim.population.champion_index();

    for (i, car) in sim.population.cars.iter().enumerate() {
        let body_color = if car.collided {
            Color::from_rgba(130, 130, 130, 100)
        } else if i == champion {
            Color::from_rgba(255, 170, 0, 200)
        } else {
            Color::from_rgba(0, 90, 255, 130)
        };
        draw_circle(car.pos[0], car.pos[1], car.radius, body_color);

        for probe in car.sensor_probes(&sim.track, &index) {
            let probe_color = if probe.hit { RED } else { BLACK };
            draw_circle(probe.x, probe.y, car.sensor_radius, probe_color);
        }
    }
}

pub fn draw_hud(sim: &Simulation, params: &Params) {
    let champion = sim.population.champion_index();
    let best_score = sim.population.cars[champion].score;
    let text = format!(
        "generation {}   tick {}/{}   alive {}/{}   best {:.0}",
        sim.population.generation,
        sim.population.ticks_in_generation,
        params.max_ticks_per_generation,
        sim.population.alive_count(),
        sim.population.cars.len(),
        best_score,
    );
    draw_text(&text, 10.0, 24.0, 24.0, BLACK);
}
