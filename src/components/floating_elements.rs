//! Decorative particles drifting behind the page.

use dioxus::prelude::*;
use rand::Rng;

const PARTICLE_COUNT: usize = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tint {
    Blue,
    Pink,
    White,
}

impl Tint {
    fn class(&self) -> &'static str {
        match self {
            Tint::Blue => "particle-blue",
            Tint::Pink => "particle-pink",
            Tint::White => "particle-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Particle {
    /// Percent of the viewport
    left: f32,
    top: f32,
    delay_s: f32,
    duration_s: f32,
    large: bool,
    diamond: bool,
    opacity: f32,
    tint: Tint,
}

impl Particle {
    fn class(&self) -> String {
        let size = if self.large { "particle-lg" } else { "particle-sm" };
        let shape = if self.diamond { "particle-diamond" } else { "particle-round" };
        format!("particle {size} {shape} {}", self.tint.class())
    }

    fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2};",
            self.left, self.top, self.delay_s, self.duration_s, self.opacity
        )
    }
}

fn generate_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let tint = if rng.random_bool(0.4) {
                Tint::Blue
            } else if rng.random_bool(0.5) {
                Tint::Pink
            } else {
                Tint::White
            };
            Particle {
                left: rng.random_range(0.0..100.0),
                top: rng.random_range(0.0..100.0),
                delay_s: rng.random_range(0.0..5.0),
                duration_s: rng.random_range(10.0..20.0),
                large: rng.random_bool(0.3),
                diamond: rng.random_bool(0.5),
                opacity: rng.random_range(0.3..0.8),
                tint,
            }
        })
        .collect()
}

#[component]
pub fn FloatingElements() -> Element {
    let particles = use_hook(|| generate_particles(&mut rand::rng(), PARTICLE_COUNT));

    rsx! {
        div { class: "floating-layer", "aria-hidden": "true",
            span { class: "ambient-glow ambient-glow--blue" }
            span { class: "ambient-glow ambient-glow--pink" }
            for (idx, particle) in particles.iter().enumerate() {
                span { key: "{idx}", class: particle.class(), style: particle.style() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_particles(&mut rng, PARTICLE_COUNT);

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((10.0..20.0).contains(&p.duration_s));
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = generate_particles(&mut StdRng::seed_from_u64(42), 5);
        let b = generate_particles(&mut StdRng::seed_from_u64(42), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn class_and_style_reflect_fields() {
        let p = Particle {
            left: 12.5,
            top: 50.0,
            delay_s: 1.0,
            duration_s: 15.0,
            large: true,
            diamond: false,
            opacity: 0.5,
            tint: Tint::Pink,
        };
        assert_eq!(p.class(), "particle particle-lg particle-round particle-pink");
        assert!(p.style().starts_with("left: 12.5%; top: 50.0%;"));
    }
}
