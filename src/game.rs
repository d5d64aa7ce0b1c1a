use tracing::{debug, info, trace};

use crate::alien::Alien;
use crate::bullet::Bullet;
use crate::fleet;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::stats::GameStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the first game, or after the last ship is lost.
    Inactive,
    Active,
    /// Frozen for a moment after losing a ship, then back to `Active`.
    Stunned { frames_left: u32 },
}

/// Everything one game of Alien Invasion needs between frames.
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub phase: Phase,
    /// Whether the pointer should be usable, i.e. the play button is up.
    pub pointer_visible: bool,
    /// Set once a run ends; cleared by the next start.
    pub game_over: bool,
    /// Frames since launch, for animation only.
    pub tick: u64,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let stats = GameStats::new(&settings);
        let ship = Ship::new(&settings);
        let aliens = fleet::create_fleet(&settings);
        Self {
            settings,
            stats,
            ship,
            bullets: Vec::new(),
            aliens,
            phase: Phase::Inactive,
            pointer_visible: true,
            game_over: false,
            tick: 0,
        }
    }

    /// True while a run is in progress, including the post-hit pause.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Inactive)
    }

    pub fn start_game(&mut self) {
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.bullets.clear();
        self.aliens = fleet::create_fleet(&self.settings);
        self.ship.center_ship(&self.settings);
        self.ship.moving_left = false;
        self.ship.moving_right = false;
        self.pointer_visible = false;
        self.game_over = false;
        self.phase = Phase::Active;
        info!(
            ships = self.stats.ships_left,
            aliens = self.aliens.len(),
            high_score = self.stats.high_score,
            "game started"
        );
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.ship.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.ship.moving_right = moving;
    }

    /// Fire from the ship if play is live and the bullet cap allows it.
    /// Returns whether a bullet was created.
    pub fn fire_bullet(&mut self) -> bool {
        if self.phase != Phase::Active || self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        trace!(in_flight = self.bullets.len(), "bullet fired");
        true
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        self.tick += 1;
        match self.phase {
            Phase::Inactive => {}
            Phase::Stunned { frames_left } => {
                self.phase = if frames_left <= 1 {
                    Phase::Active
                } else {
                    Phase::Stunned { frames_left: frames_left - 1 }
                };
            }
            Phase::Active => {
                self.ship.update(&self.settings);
                self.update_bullets();
                self.update_aliens();
            }
        }
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_expired());
        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let mut spent = vec![false; self.bullets.len()];
        let mut destroyed = vec![false; self.aliens.len()];
        for (bi, bullet) in self.bullets.iter().enumerate() {
            let rect = bullet.rect();
            for (ai, alien) in self.aliens.iter().enumerate() {
                if rect.intersects(&alien.rect()) {
                    spent[bi] = true;
                    destroyed[ai] = true;
                }
            }
        }

        let kills = destroyed.iter().filter(|&&d| d).count() as u32;
        if kills > 0 {
            let mut spent = spent.into_iter();
            self.bullets.retain(|_| !spent.next().unwrap_or(false));
            let mut destroyed = destroyed.into_iter();
            self.aliens.retain(|_| !destroyed.next().unwrap_or(false));

            self.stats.add_score(self.settings.alien_points.saturating_mul(kills));
            if self.stats.check_high_score() {
                debug!(high_score = self.stats.high_score, "new high score");
            }
        }

        if self.aliens.is_empty() {
            self.start_new_level();
        }
    }

    fn start_new_level(&mut self) {
        self.bullets.clear();
        self.settings.increase_speed();
        self.aliens = fleet::create_fleet(&self.settings);
        self.stats.level += 1;
        info!(
            level = self.stats.level,
            alien_speed = self.settings.alien_speed,
            alien_points = self.settings.alien_points,
            "wave cleared"
        );
    }

    fn update_aliens(&mut self) {
        fleet::update_fleet(&mut self.aliens, &mut self.settings);

        let ship_rect = self.ship.rect();
        let screen_bottom = self.settings.screen_height;
        let hit = self.aliens.iter().any(|a| {
            let rect = a.rect();
            rect.intersects(&ship_rect) || rect.bottom() >= screen_bottom
        });
        if hit {
            self.ship_hit();
        }
    }

    /// Lose a ship to an alien collision or a landing.
    fn ship_hit(&mut self) {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            self.bullets.clear();
            self.aliens = fleet::create_fleet(&self.settings);
            self.ship.center_ship(&self.settings);
            self.phase = Phase::Stunned { frames_left: self.settings.stun_frames };
            info!(ships_left = self.stats.ships_left, "ship hit");
        } else {
            self.phase = Phase::Inactive;
            self.pointer_visible = true;
            self.game_over = true;
            info!(
                score = self.stats.score,
                level = self.stats.level,
                high_score = self.stats.high_score,
                "game over"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_game() -> Game {
        let mut game = Game::new(Settings::default());
        game.start_game();
        game
    }

    /// Park an alien right on top of the ship.
    fn alien_on_ship(game: &Game) -> Alien {
        let r = game.ship.rect();
        Alien::new(&game.settings, r.x as f32, (r.y - 10) as f32)
    }

    #[test]
    fn new_game_waits_for_start() {
        let mut game = Game::new(Settings::default());
        assert_eq!(game.phase, Phase::Inactive);
        assert!(game.pointer_visible);
        assert!(!game.aliens.is_empty());
        let before: Vec<f32> = game.aliens.iter().map(|a| a.x).collect();
        game.update();
        let after: Vec<f32> = game.aliens.iter().map(|a| a.x).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn start_resets_run_but_keeps_high_score() {
        let mut game = active_game();
        game.stats.score = 900;
        game.stats.high_score = 900;
        game.stats.level = 5;
        game.stats.ships_left = 0;
        game.settings.increase_speed();
        game.bullets.push(Bullet::new(&game.settings, &game.ship));
        game.ship.x = 0.0;

        game.start_game();
        assert_eq!(game.phase, Phase::Active);
        assert!(!game.pointer_visible);
        assert_eq!(game.stats.score, 0);
        assert_eq!(game.stats.level, 1);
        assert_eq!(game.stats.ships_left, game.settings.ship_limit);
        assert_eq!(game.stats.high_score, 900);
        assert_eq!(game.settings.alien_speed, Settings::default().alien_speed);
        assert!(game.bullets.is_empty());
        assert_eq!(game.aliens.len(), fleet::create_fleet(&game.settings).len());
        assert_eq!(game.ship.x, Ship::new(&game.settings).x);
    }

    #[test]
    fn fire_respects_bullet_cap() {
        let mut game = active_game();
        for n in 1..=game.settings.bullets_allowed {
            assert!(game.fire_bullet());
            assert_eq!(game.bullets.len(), n);
        }
        assert!(!game.fire_bullet());
        assert_eq!(game.bullets.len(), game.settings.bullets_allowed);
    }

    #[test]
    fn cannot_fire_when_not_active() {
        let mut game = Game::new(Settings::default());
        assert!(!game.fire_bullet());
        game.start_game();
        game.phase = Phase::Stunned { frames_left: 5 };
        assert!(!game.fire_bullet());
        assert!(game.bullets.is_empty());
    }

    #[test]
    fn expired_bullets_are_removed_before_collisions() {
        let mut game = active_game();
        let mut b = Bullet::new(&game.settings, &game.ship);
        b.y = -(b.height as f32) + game.settings.bullet_speed;

        // An alien poking above the top edge, overlapping where the bullet
        // ends up this frame.
        let alien = Alien::new(&game.settings, b.x - 20.0, -30.0);
        let mut moved = b.clone();
        moved.update(&game.settings);
        assert!(moved.is_expired());
        assert!(moved.rect().intersects(&alien.rect()));

        game.aliens = vec![alien];
        game.bullets.push(b);
        game.update();
        assert!(game.bullets.is_empty());
        assert_eq!(game.aliens.len(), 1);
        assert_eq!(game.stats.score, 0);
        assert_eq!(game.stats.level, 1);
    }

    #[test]
    fn bullet_destroys_alien_and_scores() {
        let mut game = active_game();
        let target = Alien::new(&game.settings, 500.0, 300.0);
        let spare = Alien::new(&game.settings, 100.0, 100.0);
        let mut b = Bullet::new(&game.settings, &game.ship);
        b.x = 520.0;
        b.y = 330.0;
        game.aliens = vec![target, spare];
        game.bullets.push(b);

        game.update();
        assert!(game.bullets.is_empty());
        assert_eq!(game.aliens.len(), 1);
        assert_eq!(game.stats.score, 50);
        assert_eq!(game.stats.high_score, 50);
    }

    #[test]
    fn one_bullet_can_take_out_overlapping_aliens() {
        let mut game = active_game();
        let a = Alien::new(&game.settings, 500.0, 300.0);
        let b = Alien::new(&game.settings, 510.0, 310.0);
        let spare = Alien::new(&game.settings, 100.0, 100.0);
        let mut shot = Bullet::new(&game.settings, &game.ship);
        shot.x = 530.0;
        shot.y = 340.0;
        game.aliens = vec![a, b, spare];
        game.bullets.push(shot);

        game.update();
        assert_eq!(game.aliens.len(), 1);
        assert_eq!(game.stats.score, 100);
    }

    #[test]
    fn clearing_the_wave_levels_up() {
        let mut game = active_game();
        let speed = game.settings.alien_speed;
        let mut shot = Bullet::new(&game.settings, &game.ship);
        shot.x = 520.0;
        shot.y = 330.0;
        game.aliens = vec![Alien::new(&game.settings, 500.0, 300.0)];
        game.bullets.push(shot);
        let mut stray = Bullet::new(&game.settings, &game.ship);
        stray.x = 10.0;
        stray.y = 700.0;
        game.bullets.push(stray);

        game.update();
        assert!(game.bullets.is_empty());
        assert!(!game.aliens.is_empty());
        assert_eq!(game.stats.level, 2);
        assert!(game.settings.alien_speed > speed);
        assert_eq!(game.settings.alien_points, 75);
    }

    #[test]
    fn ship_hit_with_spare_ships_respawns() {
        let mut game = active_game();
        let full_fleet = fleet::create_fleet(&game.settings).len();
        let mut stray = Bullet::new(&game.settings, &game.ship);
        stray.x = 10.0;
        stray.y = 400.0;
        game.bullets.push(stray);
        game.ship.x = 300.0;
        let alien = alien_on_ship(&game);
        game.aliens = vec![alien];

        game.update();
        assert_eq!(game.stats.ships_left, game.settings.ship_limit - 1);
        assert_eq!(game.ship.x, Ship::new(&game.settings).x);
        assert_eq!(game.aliens.len(), full_fleet);
        assert!(game.bullets.is_empty());
        assert_eq!(game.phase, Phase::Stunned { frames_left: game.settings.stun_frames });
        assert!(game.is_active());
    }

    #[test]
    fn landing_alien_counts_as_ship_hit() {
        let mut game = active_game();
        let s = &game.settings;
        let alien = Alien::new(s, 10.0, (s.screen_height - s.alien_height) as f32);
        game.aliens = vec![alien];
        game.update();
        assert_eq!(game.stats.ships_left, game.settings.ship_limit - 1);
    }

    #[test]
    fn last_ship_ends_the_game() {
        let mut game = active_game();
        game.stats.ships_left = 0;
        let alien = alien_on_ship(&game);
        game.aliens = vec![alien];

        game.update();
        assert_eq!(game.phase, Phase::Inactive);
        assert_eq!(game.stats.ships_left, 0);
        assert!(game.pointer_visible);
        assert!(game.game_over);
    }

    #[test]
    fn a_run_has_ship_limit_plus_one_lives() {
        let mut game = active_game();
        let mut hits = 0;
        while game.is_active() {
            game.phase = Phase::Active;
            let alien = alien_on_ship(&game);
            game.aliens = vec![alien];
            game.update();
            hits += 1;
            assert!(hits <= 10);
        }
        assert_eq!(hits, game.settings.ship_limit + 1);
        assert_eq!(game.stats.ships_left, 0);
    }

    #[test]
    fn stun_freezes_play_for_its_duration() {
        let mut game = active_game();
        let alien = alien_on_ship(&game);
        game.aliens = vec![alien];
        game.update();
        let frozen: Vec<f32> = game.aliens.iter().map(|a| a.x).collect();
        game.set_moving_right(true);
        let ship_x = game.ship.x;

        for _ in 0..game.settings.stun_frames {
            assert!(matches!(game.phase, Phase::Stunned { .. }));
            game.update();
        }
        assert_eq!(game.phase, Phase::Active);
        assert_eq!(game.ship.x, ship_x);
        assert_eq!(game.aliens.iter().map(|a| a.x).collect::<Vec<_>>(), frozen);

        game.update();
        assert!(game.ship.x > ship_x);
    }
}
