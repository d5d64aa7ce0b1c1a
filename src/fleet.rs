//! The fleet is just the `Vec<Alien>` owned by the game; these functions build
//! it and move it as one formation.

use tracing::trace;

use crate::alien::Alien;
use crate::settings::Settings;

/// Lay out a full grid of aliens sized to the screen.
///
/// Both margins are one alien; columns repeat every two alien widths and rows
/// every two alien heights, leaving two widths free on the right and three
/// heights free at the bottom for the ship.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let (w, h) = (settings.alien_width, settings.alien_height);
    let mut aliens = Vec::new();

    let mut y = h;
    while y < settings.screen_height - 3 * h {
        let mut x = w;
        while x < settings.screen_width - 2 * w {
            aliens.push(Alien::new(settings, x as f32, y as f32));
            x += 2 * w;
        }
        y += 2 * h;
    }
    aliens
}

/// Move every alien one tick, then turn the fleet around if anyone reached a
/// side. Returns whether the fleet changed direction.
pub fn update_fleet(aliens: &mut [Alien], settings: &mut Settings) -> bool {
    for alien in aliens.iter_mut() {
        alien.update(settings);
    }
    check_fleet_edges(aliens, settings)
}

fn check_fleet_edges(aliens: &mut [Alien], settings: &mut Settings) -> bool {
    if aliens.iter().any(|a| a.check_edges(settings)) {
        change_fleet_direction(aliens, settings);
        true
    } else {
        false
    }
}

fn change_fleet_direction(aliens: &mut [Alien], settings: &mut Settings) {
    for alien in aliens.iter_mut() {
        alien.y += settings.fleet_drop_speed;
    }
    settings.fleet_direction = -settings.fleet_direction;
    trace!(direction = settings.fleet_direction, "fleet reversed");
}
