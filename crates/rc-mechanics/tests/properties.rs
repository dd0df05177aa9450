//! Property tests for the cost, escalation, progression and roll calculators.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rc_mechanics::dice::DIE_CATALOG;
use rc_mechanics::{
    CostPolicy, Die, EscalationScheme, RollEntry, Rune, escalation, mana_cost, progression, roll,
    roll_capped,
};

fn rune_strategy() -> impl Strategy<Value = Rune> {
    prop_oneof![
        Just(Rune::new("VAS")),
        Just(Rune::new("uus")),
        Just(Rune::new("Lor")),
        Just(Rune::new("Flam")),
        "[A-Za-z]{1,6}".prop_map(Rune::new),
    ]
}

fn catalog_die() -> impl Strategy<Value = u32> {
    prop::sample::select(DIE_CATALOG.to_vec())
}

proptest! {
    #[test]
    fn empty_spell_costs_die_plus_magic(die in catalog_die(), magic in 0u32..50) {
        prop_assert_eq!(
            mana_cost(CostPolicy::Additive, die, magic, &[]),
            u64::from(die) + u64::from(magic)
        );
    }

    #[test]
    fn adding_a_multiplier_never_lowers_cost(
        die in catalog_die(),
        magic in 0u32..20,
        spell in prop::collection::vec(rune_strategy(), 0..8),
        extra in prop_oneof![Just("VAS"), Just("UUS")],
        policy in prop_oneof![Just(CostPolicy::Additive), Just(CostPolicy::RuneCapped)],
    ) {
        let before = mana_cost(policy, die, magic, &spell);
        let mut more = spell.clone();
        more.push(Rune::new(extra));
        prop_assert!(mana_cost(policy, die, magic, &more) >= before);
    }

    #[test]
    fn rune_order_does_not_change_numbers(
        die in catalog_die(),
        magic in 0u32..20,
        spell in prop::collection::vec(rune_strategy(), 0..8),
    ) {
        let mut reversed = spell.clone();
        reversed.reverse();
        prop_assert_eq!(
            mana_cost(CostPolicy::Additive, die, magic, &spell),
            mana_cost(CostPolicy::Additive, die, magic, &reversed)
        );
        prop_assert_eq!(
            escalation(&EscalationScheme::STANDARD, &spell),
            escalation(&EscalationScheme::STANDARD, &reversed)
        );
    }

    #[test]
    fn escalation_counts_multipliers(vas in 0usize..6, uus in 0usize..6, plain in 0usize..6) {
        let mut spell = Vec::new();
        spell.extend(std::iter::repeat_n(Rune::new("Vas"), vas));
        spell.extend(std::iter::repeat_n(Rune::new("UUS"), uus));
        spell.extend(std::iter::repeat_n(Rune::new("Kal"), plain));
        let scheme = EscalationScheme::STEEP;
        prop_assert_eq!(
            escalation(&scheme, &spell) as usize,
            vas * scheme.vas as usize + uus * scheme.uus as usize
        );
    }

    #[test]
    fn progression_never_repeats_a_state(die in 1u32..120, steps in 0u32..20) {
        let p = progression(die, steps);
        let states = p.states();
        for (i, state) in states.iter().enumerate() {
            prop_assert!(!states[i + 1..].contains(state));
        }
        prop_assert_eq!(states.first().cloned(), Some(format!("D{die}")));
    }

    #[test]
    fn progression_ends_at_final_pool(die in catalog_die(), steps in 0u32..20) {
        let p = progression(die, steps);
        prop_assert_eq!(p.states().last().cloned(), Some(p.final_pool().render()));
    }

    #[test]
    fn roll_total_is_sum_of_entries(
        sides in prop::collection::vec(catalog_die(), 0..5),
        bonus in 0u32..10,
        seed in any::<u64>(),
    ) {
        let dice: Vec<Die> = sides.iter().map(|&s| Die::standard(s)).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let out = roll(&dice, bonus, &mut rng);
        let sum: u64 = out.entries.iter().map(|e| u64::from(e.value())).sum();
        prop_assert_eq!(out.total, sum);

        let initial = out.entries.iter().filter(|e| matches!(e, RollEntry::Die { .. })).count();
        prop_assert_eq!(initial, dice.len());
        if dice.is_empty() {
            prop_assert_eq!(out.history.len(), 1);
        }
    }

    #[test]
    fn capped_roll_never_exceeds_its_ceiling(
        sides in prop::collection::vec(prop::sample::select(vec![2u32, 4, 6]), 2..6),
        max in 0usize..4,
        seed in any::<u64>(),
    ) {
        let dice: Vec<Die> = sides.iter().map(|&s| Die::standard(s)).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let out = roll_capped(&dice, 0, &mut rng, max);
        prop_assert!(out.explosions() <= max);
        if out.capped {
            prop_assert_eq!(out.explosions(), max);
        }
    }
}
