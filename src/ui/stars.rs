use rand::Rng;

use crate::settings::Settings;

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub brightness: u8,
}

/// Fixed backdrop, scattered once at startup.
#[derive(Clone, Debug, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(rng: &mut impl Rng, settings: &Settings, count: usize) -> Self {
        let w = settings.screen_width.max(1) as f32;
        let h = settings.screen_height.max(1) as f32;
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(0.0..h),
                brightness: rng.gen_range(40..=140),
            })
            .collect();
        Self { stars }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }
}
