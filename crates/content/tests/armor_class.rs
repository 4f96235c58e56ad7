//! Armor class from the rule table and from finalized characters.

mod common;

use common::{now, ruleset, Build};
use heroforge_domain::{
    calculate_armor_class, Ability, AbilityScoreMethod, AbilityScores, AcComponentKind,
    ArmorCategory, EquippedArmor, EquippedGear, EquippedShield,
};

fn dex(score: u8) -> AbilityScores {
    AbilityScores::new(10, score, 10, 10, 10, 10)
}

fn wearing(category: ArmorCategory, base_ac: u8) -> EquippedGear {
    EquippedGear {
        armor: Some(EquippedArmor {
            item: "test-armor".into(),
            name: "Test Armor".to_string(),
            category,
            base_ac,
        }),
        shield: None,
    }
}

fn with_shield(mut gear: EquippedGear) -> EquippedGear {
    gear.shield = Some(EquippedShield {
        item: "shield".into(),
        name: "Shield".to_string(),
    });
    gear
}

#[test]
fn unarmored_adds_full_dexterity() {
    let ac = calculate_armor_class(&EquippedGear::default(), &dex(14), None);
    assert_eq!(ac.total(), 12);
    assert_eq!(ac.component(AcComponentKind::Base).map(|c| c.value), Some(10));
    assert_eq!(ac.component(AcComponentKind::Ability).map(|c| c.value), Some(2));
}

#[test]
fn heavy_armor_ignores_dexterity() {
    let ac = calculate_armor_class(&wearing(ArmorCategory::Heavy, 16), &dex(18), None);
    assert_eq!(ac.total(), 16);
    assert!(ac.component(AcComponentKind::Ability).is_none());

    let clumsy = calculate_armor_class(&wearing(ArmorCategory::Heavy, 16), &dex(6), None);
    assert_eq!(clumsy.total(), 16);
}

#[test]
fn medium_armor_caps_dexterity_at_two() {
    let ac = calculate_armor_class(&wearing(ArmorCategory::Medium, 14), &dex(18), None);
    assert_eq!(ac.total(), 16);
    assert_eq!(ac.component(AcComponentKind::Ability).map(|c| c.value), Some(2));
}

#[test]
fn light_armor_adds_full_dexterity() {
    let ac = calculate_armor_class(&wearing(ArmorCategory::Light, 11), &dex(18), None);
    assert_eq!(ac.total(), 15);
}

#[test]
fn shield_adds_two_on_top_of_light_armor() {
    let gear = with_shield(wearing(ArmorCategory::Light, 11));
    let ac = calculate_armor_class(&gear, &dex(14), None);
    assert_eq!(ac.total(), 15);

    let kinds: Vec<AcComponentKind> = ac.components().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        [
            AcComponentKind::Armor,
            AcComponentKind::Ability,
            AcComponentKind::Shield
        ]
    );
}

#[test]
fn unarmored_defense_adds_a_second_ability() {
    let scores = AbilityScores::new(10, 14, 16, 10, 10, 10);
    let ac = calculate_armor_class(&EquippedGear::default(), &scores, Some(Ability::Constitution));
    assert_eq!(ac.total(), 15);
    assert_eq!(
        ac.components().iter().filter(|c| c.kind == AcComponentKind::Ability).count(),
        2
    );

    // Armor switches the feature off.
    let armored = calculate_armor_class(
        &wearing(ArmorCategory::Light, 11),
        &scores,
        Some(Ability::Constitution),
    );
    assert_eq!(armored.total(), 13);
}

#[test]
fn zero_modifiers_are_left_out() {
    let ac = calculate_armor_class(&EquippedGear::default(), &dex(10), Some(Ability::Wisdom));
    assert_eq!(ac.total(), 10);
    assert_eq!(ac.components().len(), 1);
}

#[test]
fn unarmored_wizard() {
    let ruleset = ruleset();
    // 13 dex +1 human
    let wizard = Build::human("wizard")
        .with_scores(AbilityScores::new(8, 13, 14, 15, 12, 10))
        .finalize(&ruleset);
    assert!(wizard.equipped().armor.is_none());
    assert_eq!(wizard.armor_class().total(), 12);
}

#[test]
fn fighter_in_chain_mail() {
    let ruleset = ruleset();
    let with_shield = Build::human("fighter").finalize(&ruleset);
    assert_eq!(
        with_shield.equipped().armor.as_ref().map(|a| a.item.as_str()),
        Some("chain-mail")
    );
    assert_eq!(with_shield.armor_class().total(), 18);

    let (_, mut choices) = common::class_choices("fighter");
    choices[3] = heroforge_domain::Choice::equipment_with_items(
        heroforge_domain::ChoiceSource::Class,
        "fighter-weapons-primary",
        "fighter-weapons-primary-b",
        ["greatsword", "longsword"],
    );
    let two_handed = Build::human("fighter")
        .with_class_choices(choices)
        .finalize(&ruleset);
    assert!(two_handed.equipped().shield.is_none());
    assert_eq!(two_handed.armor_class().total(), 16);
}

#[test]
fn cleric_in_scale_mail_is_capped() {
    let ruleset = ruleset();
    let mut draft = Build::human("cleric").draft(&ruleset);
    // 17 dex +1 human is +4, capped to +2 by medium armor
    draft
        .set_ability_scores(
            &ruleset,
            AbilityScores::new(10, 17, 14, 8, 15, 12),
            Some(AbilityScoreMethod::Manual),
            now(),
        )
        .unwrap();
    let cleric = draft.finalize(&ruleset, now()).unwrap();

    let ac = cleric.armor_class();
    assert_eq!(ac.component(AcComponentKind::Armor).map(|c| c.value), Some(14));
    assert_eq!(ac.component(AcComponentKind::Ability).map(|c| c.value), Some(2));
    assert_eq!(ac.component(AcComponentKind::Shield).map(|c| c.value), Some(2));
    assert_eq!(ac.total(), 18);
}

#[test]
fn rogue_in_leather() {
    let ruleset = ruleset();
    let rogue = Build::human("rogue")
        .with_scores(AbilityScores::new(8, 15, 14, 12, 10, 13))
        .finalize(&ruleset);
    assert_eq!(rogue.armor_class().total(), 14);
}

#[test]
fn monk_and_barbarian_use_unarmored_defense() {
    let ruleset = ruleset();

    // dex 16 (+3), wis 15 (+2)
    let monk = Build::human("monk")
        .with_scores(AbilityScores::new(10, 15, 13, 8, 14, 12))
        .finalize(&ruleset);
    assert_eq!(monk.unarmored_defense(), Some(Ability::Wisdom));
    assert_eq!(monk.armor_class().total(), 15);

    // dex 14 (+2), con 15 (+2)
    let barbarian = Build::human("barbarian")
        .with_scores(AbilityScores::new(15, 13, 14, 8, 12, 10))
        .finalize(&ruleset);
    assert_eq!(barbarian.armor_class().total(), 14);
}
