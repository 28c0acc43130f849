use duel_engine::{BattleController, Combatant, Dice, Side, Weapon, WeaponPool};
use proptest::prelude::*;

proptest! {
    #[test]
    fn health_tracks_saturating_damage(start in 1u32..1_000, hits in prop::collection::vec(0u32..400, 0..20)) {
        let mut c = Combatant::new("Target", start, 1);
        let mut expected = start;
        for hit in hits {
            c.apply_damage(hit, |_| {});
            expected = expected.saturating_sub(hit);
            prop_assert_eq!(c.health(), expected);
        }
    }

    #[test]
    fn the_dead_stay_dead(start in 1u32..200, heals in prop::collection::vec(1u32..50, 1..10)) {
        let mut c = Combatant::new("Target", start, 1);
        c.apply_damage(start, |_| {});
        for amount in heals {
            prop_assert!(!c.heal(amount));
            prop_assert_eq!(c.health(), 0);
        }
    }

    #[test]
    fn single_attack_deals_damage_times_strength(damage in 0u32..100, strength in 1u32..10) {
        let weapon = Weapon::new("Test", damage);
        let mut attacker = Combatant::new("A", 10, strength);
        let mut target = Combatant::new("B", 10_000, 1);
        attacker.equip(&weapon);
        prop_assert_eq!(attacker.attack(&mut target, |_| {}), Some(damage * strength));
        prop_assert_eq!(target.health(), 10_000 - damage * strength);
    }

    #[test]
    fn battles_end_with_exactly_one_fallen(
        seed in any::<u64>(),
        player_hp in 1u32..400,
        enemy_hp in 1u32..400,
        player_str in 1u32..6,
        enemy_str in 1u32..6,
        damages in prop::collection::vec(1u32..40, 1..6),
    ) {
        let pool: WeaponPool = damages
            .iter()
            .enumerate()
            .map(|(i, d)| Weapon::new(format!("W{}", i), *d))
            .collect();
        let mut player = Combatant::new("Player", player_hp, player_str);
        let mut enemy = Combatant::new("Enemy", enemy_hp, enemy_str);
        let outcome = BattleController::new(&mut player, &mut enemy, &pool, Dice::from_seed(seed))
            .start_battle(|_| {})
            .unwrap();

        prop_assert!(outcome.rounds <= enemy_hp);
        prop_assert_eq!(player.is_alive() as u8 + enemy.is_alive() as u8, 1);
        match outcome.defeated {
            Some(Side::Player) => prop_assert_eq!(outcome.player_health, 0),
            Some(Side::Enemy) => prop_assert_eq!(outcome.enemy_health, 0),
            None => prop_assert!(false, "uncapped battle ended undecided"),
        }
    }
}
