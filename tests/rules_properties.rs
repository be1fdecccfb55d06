// Property-based tests for the pure battle rules
use enforcers_cardgame::battle::rules::{absorb_damage, is_synergy_active, resolve_cost, resolve_damage};
use enforcers_cardgame::battle::types::{BattleBuffs, CardCategory, Formation, StatusEffects};
use proptest::prelude::*;

const CATEGORIES: [CardCategory; 6] = [
    CardCategory::Destruction,
    CardCategory::Enhancement,
    CardCategory::Energy,
    CardCategory::Resource,
    CardCategory::Conversion,
    CardCategory::Control,
];

fn category() -> impl Strategy<Value = CardCategory> {
    prop::sample::select(CATEGORIES.to_vec())
}

fn formation() -> impl Strategy<Value = Formation> {
    prop::sample::select(vec![Formation::FrontBack, Formation::Spread])
}

fn hero() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "kayla".to_string(),
        "lina".to_string(),
        "ella".to_string(),
        "fiona".to_string(),
        "stranger".to_string(),
    ]))
}

fn expected_synergy(formation: Formation, hero: Option<&str>, category: CardCategory) -> bool {
    matches!(
        (hero, formation, category),
        (Some("kayla"), Formation::FrontBack, CardCategory::Destruction)
            | (Some("lina"), Formation::Spread, CardCategory::Destruction)
            | (Some("ella"), Formation::Spread, _)
            | (Some("fiona"), Formation::FrontBack, _)
    )
}

proptest! {
    #[test]
    fn cost_is_base_or_one_less(base in 0u32..20, hero in hero(), category in category(), formation in formation()) {
        let cost = resolve_cost(base, hero.as_deref(), category, formation);
        prop_assert!(cost <= base);
        prop_assert!(base - cost <= 1);
    }

    #[test]
    fn synergy_only_for_documented_pairs(hero in hero(), category in category(), formation in formation()) {
        prop_assert_eq!(
            is_synergy_active(formation, hero.as_deref(), category),
            expected_synergy(formation, hero.as_deref(), category)
        );
    }

    #[test]
    fn damage_is_monotonic(
        value in 0u32..200,
        temp in 0u32..50,
        next in 0u32..200,
        broken in any::<bool>(),
    ) {
        let target = StatusEffects { is_broken: broken, ..StatusEffects::default() };
        let buffs = BattleBuffs { next_destruction_buff: next, temp_attack_buff: temp, next_charm_buff: 0 };
        let base = resolve_damage(value, CardCategory::Destruction, &buffs, Some(&target));

        prop_assert!(resolve_damage(value + 1, CardCategory::Destruction, &buffs, Some(&target)) >= base);
        let more_temp = BattleBuffs { temp_attack_buff: temp + 1, ..buffs };
        prop_assert!(resolve_damage(value, CardCategory::Destruction, &more_temp, Some(&target)) >= base);
        let more_next = BattleBuffs { next_destruction_buff: next + 1, ..buffs };
        prop_assert!(resolve_damage(value, CardCategory::Destruction, &more_next, Some(&target)) >= base);
    }

    #[test]
    fn non_destruction_ignores_buffs(value in 0u32..200, temp in 0u32..50, next in 0u32..200, category in category()) {
        prop_assume!(category != CardCategory::Destruction);
        let buffs = BattleBuffs { next_destruction_buff: next, temp_attack_buff: temp, next_charm_buff: 0 };
        prop_assert_eq!(resolve_damage(value, category, &buffs, None), value);
    }

    #[test]
    fn broken_target_bonus_applies_to_every_category(value in 0u32..200, category in category()) {
        let broken = StatusEffects { is_broken: true, ..StatusEffects::default() };
        let buffs = BattleBuffs::default();
        prop_assert_eq!(
            resolve_damage(value, category, &buffs, Some(&broken)),
            (f64::from(value) * 1.5).floor() as u32
        );
        let intact = StatusEffects::default();
        prop_assert_eq!(resolve_damage(value, category, &buffs, Some(&intact)), value);
    }

    #[test]
    fn defense_absorbs_before_health(defense in 0i32..100, hp in 1i32..500, damage in 0u32..300) {
        let (mut d, mut h) = (defense, hp);
        absorb_damage(&mut d, &mut h, damage);
        let x = damage as i32;
        if x <= defense {
            prop_assert_eq!(h, hp);
            prop_assert_eq!(d, defense - x);
        } else {
            prop_assert_eq!(d, 0);
            prop_assert_eq!(h, (hp - (x - defense)).max(0));
        }
    }
}

#[test]
fn lina_destruction_costs_one_less_spread() {
    assert_eq!(resolve_cost(2, Some("lina"), CardCategory::Destruction, Formation::Spread), 1);
    assert_eq!(resolve_cost(2, Some("lina"), CardCategory::Destruction, Formation::FrontBack), 2);
    assert_eq!(resolve_cost(0, Some("lina"), CardCategory::Control, Formation::Spread), 0);
}
