use std::time::Duration;

/// How long the splash stays up before the page is revealed.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Loading splash state. `Ready` is terminal: once the page is shown the
/// splash never comes back for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    /// Transition taken when the splash timer fires.
    pub fn advance(self) -> Self {
        Self::Ready
    }

    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }

    pub fn delay_millis() -> f64 {
        SPLASH_DELAY.as_millis() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        assert_eq!(LoadPhase::default(), LoadPhase::Loading);
        assert!(!LoadPhase::default().is_ready());
    }

    #[test]
    fn test_ready_is_terminal() {
        let phase = LoadPhase::Loading.advance();
        assert!(phase.is_ready());
        assert_eq!(phase.advance(), LoadPhase::Ready);
        assert_eq!(phase.advance().advance(), LoadPhase::Ready);
    }

    #[test]
    fn test_timer_delay() {
        assert_eq!(LoadPhase::delay_millis(), 2000.0);
    }
}
