// How much a contributor is owed.
//
// One payout step per full block of combined food + drink. Partial blocks
// earn nothing until they fill up.

/// Units added or removed by a single button press.
pub const CONTRIBUTION_STEP: u64 = 50;

/// Combined units needed for one payout step.
pub const UNITS_PER_PAYOUT: u64 = 50;

/// Currency paid for each full block of `UNITS_PER_PAYOUT`.
pub const PAYOUT_PER_BLOCK: u64 = 100_000;

/// `floor((food + drink) / 50) * 100000`
pub fn owed(food: u64, drink: u64) -> u64 {
    (food.saturating_add(drink) / UNITS_PER_PAYOUT).saturating_mul(PAYOUT_PER_BLOCK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owed_thresholds() {
        assert_eq!(owed(0, 0), 0);
        assert_eq!(owed(49, 0), 0);
        assert_eq!(owed(50, 0), 100_000);
        assert_eq!(owed(25, 25), 100_000);
        assert_eq!(owed(99, 0), 100_000);
        assert_eq!(owed(100, 0), 200_000);
    }

    #[test]
    fn test_owed_matches_formula() {
        for food in (0..400).step_by(7) {
            for drink in (0..400).step_by(11) {
                assert_eq!(owed(food, drink), ((food + drink) / 50) * 100_000);
            }
        }
    }

    #[test]
    fn test_owed_is_symmetric() {
        assert_eq!(owed(150, 0), owed(0, 150));
        assert_eq!(owed(30, 70), owed(70, 30));
    }
}
