//! Damage formula shared by retaliation effects

use crate::config::constants;
use crate::monster::Monster;
use content_core::{Range, Technique};

/// Damage `technique` would deal from `user` to `target`
///
/// Returns the truncated damage and the element multiplier used. Strength
/// comes from the user's melee or ranged stat scaled by
/// `level_offset + level`; resistance from the target's armour or dodge,
/// never below `min_resist`. Reliable moves ignore both stats.
pub fn simple_damage_calculate(
    technique: &Technique,
    user: &Monster,
    target: &Monster,
) -> (u32, f64) {
    let constants = constants();
    let scale = f64::from(constants.level_offset.saturating_add(user.level));

    let (strength, resist) = match technique.range {
        Range::Melee => (f64::from(user.melee) * scale, target.armour),
        Range::Touch => (f64::from(user.melee) * scale, target.dodge),
        Range::Ranged => (f64::from(user.ranged) * scale, target.dodge),
        Range::Reach | Range::Special => (f64::from(user.ranged) * scale, target.armour),
        Range::Reliable => (scale, constants.min_resist),
    };
    let resist = f64::from(resist.max(constants.min_resist));

    let multiplier = element_multiplier(technique, target);
    let damage = strength * multiplier * technique.power / resist;

    // `as` saturates: negative or NaN becomes 0
    (damage as u32, multiplier)
}

/// Product of the matchups between every technique type and every target type
fn element_multiplier(technique: &Technique, target: &Monster) -> f64 {
    let constants = constants();
    technique
        .types
        .iter()
        .flat_map(|attack| target.types.iter().map(move |defend| (*attack, *defend)))
        .map(|(attack, defend)| constants.element_multiplier(attack, defend))
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ensure_constants_initialized;
    use crate::types::MonsterId;
    use content_core::ElementType;

    fn setup() -> (Monster, Monster) {
        ensure_constants_initialized();
        let user = Monster::new(MonsterId(1), "rockitten", 10, 100).with_stats(12, 6, 10, 10, 10);
        let target = Monster::new(MonsterId(2), "nut", 10, 80).with_stats(10, 10, 8, 4, 10);
        (user, target)
    }

    #[test]
    fn test_melee_uses_armour() {
        let (user, target) = setup();
        let ram = Technique::new("ram", Range::Melee);

        // 12 * 17 / 8 = 25.5
        let (damage, multiplier) = simple_damage_calculate(&ram, &user, &target);
        assert_eq!(damage, 25);
        assert_eq!(multiplier, 1.0);
    }

    #[test]
    fn test_range_picks_stats() {
        let (user, target) = setup();

        let touch = Technique::new("lick", Range::Touch);
        assert_eq!(simple_damage_calculate(&touch, &user, &target).0, 51); // 12 * 17 / 4

        let ranged = Technique::new("spit", Range::Ranged);
        assert_eq!(simple_damage_calculate(&ranged, &user, &target).0, 25); // 6 * 17 / 4

        let reach = Technique::new("whip", Range::Reach);
        assert_eq!(simple_damage_calculate(&reach, &user, &target).0, 12); // 6 * 17 / 8
    }

    #[test]
    fn test_reliable_ignores_stats() {
        let (user, target) = setup();
        let reliable = Technique::new("pound", Range::Reliable);
        assert_eq!(simple_damage_calculate(&reliable, &user, &target).0, 17);
    }

    #[test]
    fn test_power_scales() {
        let (user, target) = setup();
        let weak = Technique::new("ram", Range::Melee).with_power(0.5);
        assert_eq!(simple_damage_calculate(&weak, &user, &target).0, 12);

        let skip = Technique::new("skip", Range::Melee).with_power(0.0);
        assert_eq!(simple_damage_calculate(&skip, &user, &target).0, 0);
    }

    #[test]
    fn test_extreme_level_saturates() {
        let (mut user, target) = setup();
        user.level = u32::MAX;
        let ram = Technique::new("ram", Range::Melee);

        // 12 * u32::MAX / 8 does not fit: clamps instead of overflowing
        let (damage, _) = simple_damage_calculate(&ram, &user, &target);
        assert_eq!(damage, u32::MAX);
    }

    #[test]
    fn test_zero_resist_floored() {
        let (user, mut target) = setup();
        target.armour = 0;
        let ram = Technique::new("ram", Range::Melee);
        assert_eq!(simple_damage_calculate(&ram, &user, &target).0, 204);
    }

    #[test]
    fn test_element_multiplier() {
        let (user, target) = setup();
        let target = target.with_types(vec![ElementType::Metal]);
        let ram = Technique::new("ram", Range::Melee).with_types(vec![ElementType::Fire]);

        let (_, multiplier) = simple_damage_calculate(&ram, &user, &target);
        let expected = constants().element_multiplier(ElementType::Fire, ElementType::Metal);
        assert_eq!(multiplier, expected);

        // Untyped techniques are neutral
        let plain = Technique::new("ram", Range::Melee);
        assert_eq!(simple_damage_calculate(&plain, &user, &target).1, 1.0);
    }
}
