//! Timing and probability knobs for the controller and the default simulator.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub login_delay: Duration,
    pub signup_delay: Duration,
    pub follow_up_delay: Duration,
    pub notification_ttl: Duration,
    pub success_rate: f64,
}

impl FormConfig {
    pub const LOGIN_DELAY_MS: u64 = 1500;
    pub const SIGNUP_DELAY_MS: u64 = 2000;
    pub const FOLLOW_UP_DELAY_MS: u64 = 1500;
    pub const NOTIFICATION_TTL_MS: u64 = 5000;
    pub const SUCCESS_RATE: f64 = 0.9;
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(Self::LOGIN_DELAY_MS),
            signup_delay: Duration::from_millis(Self::SIGNUP_DELAY_MS),
            follow_up_delay: Duration::from_millis(Self::FOLLOW_UP_DELAY_MS),
            notification_ttl: Duration::from_millis(Self::NOTIFICATION_TTL_MS),
            success_rate: Self::SUCCESS_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FormConfig::default();
        assert_eq!(config.login_delay, Duration::from_millis(1500));
        assert_eq!(config.signup_delay, Duration::from_millis(2000));
        assert_eq!(config.follow_up_delay, Duration::from_millis(1500));
        assert_eq!(config.notification_ttl, Duration::from_secs(5));
        assert!((config.success_rate - 0.9).abs() < f64::EPSILON);
    }
}
