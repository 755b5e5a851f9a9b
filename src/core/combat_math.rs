//! Combat math.
//!
//! Pure functions with no randomness and no side effects; the encounter loop
//! and the headless runner both go through these.

use super::constants::{DEFENSE_WEIGHT, MIN_DAMAGE};

/// Damage dealt by a hit of `attack_power` against `defense`.
///
/// `raw = attack_power - defense * 1.5`, floored, never below 1.
pub fn calculate_damage(attack_power: u32, defense: u32) -> u32 {
    let raw = attack_power as f64 - defense as f64 * DEFENSE_WEIGHT;
    let floored = raw.floor();
    if floored < MIN_DAMAGE as f64 {
        MIN_DAMAGE
    } else if floored >= u32::MAX as f64 {
        u32::MAX
    } else {
        floored as u32
    }
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_defense_passes_attack_through() {
        assert_eq!(calculate_damage(100, 0), 100);
    }

    #[test]
    fn test_high_defense_clamps_to_one() {
        assert_eq!(calculate_damage(10, 100), 1);
        assert_eq!(calculate_damage(0, 0), 1);
        assert_eq!(calculate_damage(0, u32::MAX), 1);
    }

    #[test]
    fn test_fractional_result_floors() {
        // 50 - 3 * 1.5 = 45.5
        assert_eq!(calculate_damage(50, 3), 45);
        // 10 - 6 * 1.5 = 1.0
        assert_eq!(calculate_damage(10, 6), 1);
        // 10 - 5 * 1.5 = 2.5
        assert_eq!(calculate_damage(10, 5), 2);
    }

    #[test]
    fn test_damage_is_always_at_least_one() {
        for attack in [0, 1, 7, 99, 1_000] {
            for defense in [0, 1, 13, 500, 100_000] {
                assert!(calculate_damage(attack, defense) >= 1);
            }
        }
    }

    #[test]
    fn test_apply_damage() {
        assert_eq!(apply_damage(100, 30), 70);
        assert_eq!(apply_damage(30, 100), 0);
        assert_eq!(apply_damage(50, 0), 50);
    }

    #[test]
    fn test_is_alive() {
        assert!(is_alive(1));
        assert!(!is_alive(0));
    }
}
