//! Timing and geometry for the decorative animations. Everything here is a
//! pure function of indices or scroll numbers so that the server-rendered
//! markup and the hydrated markup agree.

pub const PARTICLE_COUNT: usize = 20;

/// Hero entrance steps, in seconds after the page is revealed.
pub mod hero {
    pub const NAME: f64 = 0.2;
    pub const HEADLINE: f64 = 0.4;
    pub const SUMMARY: f64 = 0.6;
    pub const ACTIONS: f64 = 0.8;
    pub const CONTACT_LINE: f64 = 1.0;
    pub const SOCIALS: f64 = 1.2;
}

/// Delay before the `index`th element of a uniformly staggered group.
pub fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}

pub fn nav_label_delay(index: usize) -> f64 {
    stagger(index, 0.1)
}

pub fn card_delay(index: usize) -> f64 {
    stagger(index, 0.1)
}

pub fn tool_delay(category: usize, tool: usize) -> f64 {
    stagger(category, 0.1) + stagger(tool, 0.05)
}

pub fn timeline_dot_delay(job: usize) -> f64 {
    stagger(job, 0.2) + 0.3
}

pub fn achievement_delay(job: usize, item: usize) -> f64 {
    stagger(job, 0.2) + stagger(item, 0.1)
}

pub fn achievement_bullet_delay(job: usize, item: usize) -> f64 {
    achievement_delay(job, item) + 0.2
}

/// Inline style for an entrance delay.
pub fn delay_style(seconds: f64) -> String {
    format!("animation-delay: {seconds:.2}s")
}

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Vertical offset of the hero backdrop, in percent of its own height.
pub fn parallax_offset(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * 50.0
}

/// Start/end position (percent of the viewport) and loop duration of one
/// floating particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub duration: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; --drift-x: {:.1}vw; --drift-y: {:.1}vh; animation-duration: {:.1}s",
            self.from.0,
            self.from.1,
            self.to.0 - self.from.0,
            self.to.1 - self.from.1,
            self.duration,
        )
    }
}

// Fractional part of i * golden ratio conjugate: evenly spread, repeatable.
fn spread(i: usize, salt: f64) -> f64 {
    const PHI: f64 = 0.618_033_988_749_895;
    ((i as f64 + salt) * PHI).fract()
}

pub fn particle(index: usize) -> Particle {
    Particle {
        from: (spread(index, 0.0) * 100.0, spread(index, 0.31) * 100.0),
        to: (spread(index, 0.57) * 100.0, spread(index, 0.83) * 100.0),
        duration: 10.0 + spread(index, 0.13) * 10.0,
    }
}

pub fn particles() -> impl Iterator<Item = Particle> {
    (0..PARTICLE_COUNT).map(particle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_stagger_formulas() {
        assert!(close(nav_label_delay(3), 0.3));
        assert!(close(tool_delay(2, 3), 0.35));
        assert!(close(timeline_dot_delay(1), 0.5));
        assert!(close(achievement_delay(1, 2), 0.4));
        assert!(close(achievement_bullet_delay(1, 2), 0.6));
        assert!(close(card_delay(0), 0.0));
        assert_eq!(delay_style(0.35), "animation-delay: 0.35s");
    }

    #[test]
    fn test_scroll_progress_clamps() {
        assert!(close(scroll_progress(0.0, 3000.0, 1000.0), 0.0));
        assert!(close(scroll_progress(1000.0, 3000.0, 1000.0), 0.5));
        assert!(close(scroll_progress(2500.0, 3000.0, 1000.0), 1.0));
        assert!(close(scroll_progress(-40.0, 3000.0, 1000.0), 0.0));
        // page shorter than the viewport never scrolls
        assert!(close(scroll_progress(10.0, 800.0, 1000.0), 0.0));
        assert!(close(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0));
    }

    #[test]
    fn test_parallax() {
        assert!(close(parallax_offset(0.5), 25.0));
        assert!(close(parallax_offset(2.0), 50.0));
    }

    #[test]
    fn test_particles_deterministic_and_in_range() {
        let first = particles().collect::<Vec<_>>();
        let second = particles().collect::<Vec<_>>();
        assert_eq!(first.len(), PARTICLE_COUNT);
        assert_eq!(first, second);
        for p in first {
            for v in [p.from.0, p.from.1, p.to.0, p.to.1] {
                assert!((0.0..100.0).contains(&v));
            }
            assert!((10.0..20.0).contains(&p.duration));
        }
        assert_ne!(particle(0), particle(1));
    }
}
