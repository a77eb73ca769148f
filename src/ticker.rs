use std::time::Duration;

/// Default event-poll interval in milliseconds.
///
/// The countdown itself advances in whole wall-clock seconds; polling faster
/// just keeps the display and drag feedback responsive.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }
}
