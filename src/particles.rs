//! Deterministic particle field for the hero background.
//!
//! Coordinates live in a 100x100 viewbox so the SVG scales with the section.
//! The same seed always yields the same field, which keeps the server render
//! and the hydrated client in agreement.

pub const VIEWBOX: f32 = 100.0;
pub const PARTICLE_COUNT: usize = 60;
pub const LINK_DISTANCE: f32 = 15.0;
pub const HERO_SEED: u64 = 0x5A51_2024;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub drift_secs: f32,
    pub delay_secs: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleLink {
    pub from: usize,
    pub to: usize,
    /// 1.0 when touching, fading to 0.0 at the link distance.
    pub strength: f32,
}

// xorshift64*, plenty for decoration
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        lo + unit * (hi - lo)
    }
}

pub fn field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Particle {
            x: rng.range(0.0, VIEWBOX),
            y: rng.range(0.0, VIEWBOX),
            radius: rng.range(0.1, 0.4),
            opacity: rng.range(0.1, 0.4),
            drift_secs: rng.range(12.0, 24.0),
            delay_secs: rng.range(0.0, 6.0),
        })
        .collect()
}

pub fn links(particles: &[Particle], max_distance: f32) -> Vec<ParticleLink> {
    let mut out = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            if dist < max_distance {
                out.push(ParticleLink {
                    from: i,
                    to: j,
                    strength: 1.0 - dist / max_distance,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_deterministic() {
        assert_eq!(field(PARTICLE_COUNT, HERO_SEED), field(PARTICLE_COUNT, HERO_SEED));
        assert_ne!(field(8, 1), field(8, 2));
    }

    #[test]
    fn test_field_within_bounds() {
        let particles = field(500, HERO_SEED);
        assert_eq!(particles.len(), 500);
        for p in particles {
            assert!((0.0..=VIEWBOX).contains(&p.x));
            assert!((0.0..=VIEWBOX).contains(&p.y));
            assert!((0.1..=0.4).contains(&p.opacity));
            assert!(p.radius > 0.0);
        }
    }

    #[test]
    fn test_zero_seed_still_moves() {
        let particles = field(3, 0);
        assert_ne!(particles[0], particles[1]);
    }

    #[test]
    fn test_links_respect_distance() {
        let make = |x, y| Particle {
            x,
            y,
            radius: 0.2,
            opacity: 0.2,
            drift_secs: 12.0,
            delay_secs: 0.0,
        };
        let particles = [make(0.0, 0.0), make(3.0, 4.0), make(50.0, 50.0)];
        let found = links(&particles, 10.0);
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].from, found[0].to), (0, 1));
        assert!((found[0].strength - 0.5).abs() < 1e-6);
    }
}
