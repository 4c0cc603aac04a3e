//! Millisecond delays as the browser timer APIs take them.

/// Delay argument for `setTimeout` / `setInterval`, saturating at `i32::MAX`.
pub fn timer_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_delay_saturates() {
        assert_eq!(timer_delay(1500), 1500);
        assert_eq!(timer_delay(i32::MAX as u32), i32::MAX);
        assert_eq!(timer_delay(u32::MAX), i32::MAX);
    }
}
