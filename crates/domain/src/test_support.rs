//! Shared fixtures for unit tests: a small ruleset served through
//! `MockRulesetContent`.

use chrono::{DateTime, TimeZone, Utc};

use crate::aggregates::Draft;
use crate::entities::{
    ArmorCategory, ArmorProficiency, AutomaticGrants, BackgroundData, ClassData, EquipmentOption,
    GrantSource, ItemData, ItemFilter, ItemGrant, ItemKind, RaceData, Requirement,
    RequirementKind, Requirements, RequirementsKey, ResourceData, SpellGrant, SpellcastingData,
    SubclassData, SubraceData, WeaponCategory,
};
use crate::game_systems::{MockRulesetContent, RestType, RulesetContent};
use crate::ids::{DraftId, PlayerId};
use crate::value_objects::{
    Ability, AbilityScoreMethod, AbilityScores, Choice, ChoiceSource, Selection, Skill,
};

pub(crate) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

pub(crate) fn new_draft() -> Draft {
    Draft::new(DraftId::new(), PlayerId::new(), now())
}

/// 15, 14, 13, 12, 10, 8 from strength down.
pub(crate) fn standard_scores() -> AbilityScores {
    AbilityScores::new(15, 14, 13, 12, 10, 8)
}

/// Every choice a fighter must make, answered without redundancy.
pub(crate) fn fighter_choices() -> Vec<Choice> {
    vec![
        Choice::skills(
            ChoiceSource::Class,
            "fighter-skills",
            [Skill::Acrobatics, Skill::Perception],
        ),
        Choice::equipment(ChoiceSource::Class, "fighter-armor", "fighter-armor-a"),
        Choice::equipment_with_items(
            ChoiceSource::Class,
            "fighter-weapons-primary",
            "fighter-weapons-primary-a",
            ["longsword"],
        ),
        Choice::equipment(ChoiceSource::Class, "fighter-pack", "fighter-pack-a"),
        Choice::new(
            ChoiceSource::Class,
            "fighter-fighting-style",
            Selection::FightingStyle("defense".into()),
        ),
    ]
}

/// Human soldier fighter with the given class choices.
pub(crate) fn build_fighter(
    mut draft: Draft,
    ruleset: &dyn RulesetContent,
    class_choices: Vec<Choice>,
) -> Draft {
    draft.set_name(ruleset, "Tordek", now()).unwrap();
    draft
        .set_race(
            ruleset,
            "human".into(),
            None,
            vec![Choice::languages(
                ChoiceSource::Race,
                "human-language",
                ["dwarvish"],
            )],
            now(),
        )
        .unwrap();
    draft
        .set_class(ruleset, "fighter".into(), None, class_choices, now())
        .unwrap();
    draft
        .set_background(ruleset, "soldier".into(), vec![], now())
        .unwrap();
    draft
        .set_ability_scores(
            ruleset,
            standard_scores(),
            Some(AbilityScoreMethod::Standard),
            now(),
        )
        .unwrap();
    draft
}

pub(crate) fn complete_fighter(ruleset: &dyn RulesetContent) -> Draft {
    build_fighter(new_draft(), ruleset, fighter_choices())
}

pub(crate) fn races() -> Vec<RaceData> {
    vec![
        RaceData::new("human", "Human")
            .with_increase(Ability::Strength, 1)
            .with_increase(Ability::Dexterity, 1)
            .with_increase(Ability::Constitution, 1)
            .with_increase(Ability::Intelligence, 1)
            .with_increase(Ability::Wisdom, 1)
            .with_increase(Ability::Charisma, 1),
        RaceData::new("elf", "Elf")
            .with_increase(Ability::Dexterity, 2)
            .with_grants(
                AutomaticGrants::new()
                    .with_skills([Skill::Perception])
                    .with_languages(["elvish"]),
            )
            .with_subrace(
                SubraceData::new("high-elf", "High Elf")
                    .with_increase(Ability::Intelligence, 1)
                    .with_grants(AutomaticGrants::new().with_weapons(["longsword", "longbow"])),
            ),
        // Grants omit common; the compiler always adds it
        RaceData::new("half-orc", "Half-Orc")
            .with_increase(Ability::Strength, 2)
            .with_increase(Ability::Constitution, 1)
            .with_grants(
                AutomaticGrants::new()
                    .with_skills([Skill::Intimidation])
                    .with_languages(["orc"]),
            ),
    ]
}

pub(crate) fn classes() -> Vec<ClassData> {
    vec![
        ClassData::new("fighter", "Fighter", 10)
            .with_saving_throws(Ability::Strength, Ability::Constitution)
            .with_grants(
                AutomaticGrants::new()
                    .with_armor([
                        ArmorProficiency::Light,
                        ArmorProficiency::Medium,
                        ArmorProficiency::Heavy,
                        ArmorProficiency::Shields,
                    ])
                    .with_weapons(["simple-weapons", "martial-weapons"]),
            )
            .with_subclass(SubclassData::new("champion", "Champion"))
            .with_resource(ResourceData::new(
                "second-wind",
                "Second Wind",
                vec![1, 1, 1],
                RestType::Short,
            )),
        ClassData::new("cleric", "Cleric", 8)
            .with_saving_throws(Ability::Wisdom, Ability::Charisma)
            .with_subclass_level(1)
            .with_grants(
                AutomaticGrants::new()
                    .with_armor([
                        ArmorProficiency::Light,
                        ArmorProficiency::Medium,
                        ArmorProficiency::Shields,
                    ])
                    .with_weapons(["simple-weapons"]),
            )
            .with_subclass(
                SubclassData::new("life", "Life Domain").with_grants(
                    AutomaticGrants::new()
                        .with_armor([ArmorProficiency::Heavy])
                        .with_spells([
                            SpellGrant::leveled("bless", 1),
                            SpellGrant::leveled("cure-wounds", 1),
                        ]),
                ),
            )
            .with_spellcasting(SpellcastingData::new(Ability::Wisdom, vec![vec![2], vec![3]])),
    ]
}

pub(crate) fn backgrounds() -> Vec<BackgroundData> {
    vec![
        BackgroundData::new("acolyte", "Acolyte").with_grants(
            AutomaticGrants::new()
                .with_skills([Skill::Insight, Skill::Religion])
                .with_equipment([ItemGrant::one("holy-symbol")]),
        ),
        BackgroundData::new("soldier", "Soldier").with_grants(
            AutomaticGrants::new().with_skills([Skill::Athletics, Skill::Intimidation]),
        ),
    ]
}

pub(crate) fn items() -> Vec<ItemData> {
    vec![
        ItemData::armor("chain-mail", "Chain Mail", ArmorCategory::Heavy, 16),
        ItemData::armor("scale-mail", "Scale Mail", ArmorCategory::Medium, 14),
        ItemData::armor("leather-armor", "Leather Armor", ArmorCategory::Light, 11),
        ItemData::new("shield", "Shield", ItemKind::Shield),
        ItemData::weapon("longsword", "Longsword", WeaponCategory::Martial),
        ItemData::weapon("mace", "Mace", WeaponCategory::Simple),
        ItemData::ranged_weapon("longbow", "Longbow", WeaponCategory::Martial),
        ItemData::gear("arrow", "Arrow"),
        ItemData::gear("holy-symbol", "Holy Symbol"),
        ItemData::gear("torch", "Torch"),
        ItemData::gear("rations", "Rations (1 day)"),
        ItemData::pack(
            "explorer-pack",
            "Explorer's Pack",
            [ItemGrant::new("torch", 10), ItemGrant::new("rations", 10)],
        ),
    ]
}

pub(crate) fn requirements_for(key: &RequirementsKey) -> Requirements {
    match key {
        RequirementsKey::Race { race, subrace } => {
            let mut requirements = Requirements::default();
            if race.as_str() == "human" {
                requirements.push(Requirement::languages(
                    "human-language",
                    "Extra language",
                    ChoiceSource::Race,
                    1,
                ));
            }
            if subrace.as_ref().map(|s| s.as_str()) == Some("high-elf") {
                requirements.push(Requirement::languages(
                    "high-elf-language",
                    "Extra language",
                    ChoiceSource::Subrace,
                    1,
                ));
            }
            requirements
        }
        RequirementsKey::Class {
            class,
            level,
            subclass,
        } => match class.as_str() {
            "fighter" => Requirements::new(vec![
                Requirement::skills(
                    "fighter-skills",
                    "Fighter skills",
                    ChoiceSource::Class,
                    2,
                    Some(vec![
                        Skill::Acrobatics,
                        Skill::Athletics,
                        Skill::Insight,
                        Skill::Intimidation,
                        Skill::Perception,
                        Skill::Survival,
                    ]),
                ),
                Requirement::equipment(
                    "fighter-armor",
                    "Armor",
                    ChoiceSource::Class,
                    [
                        EquipmentOption::new(
                            "fighter-armor-a",
                            "Chain mail",
                            [ItemGrant::one("chain-mail")],
                        ),
                        EquipmentOption::new(
                            "fighter-armor-b",
                            "Leather armor, longbow and 20 arrows",
                            [
                                ItemGrant::one("leather-armor"),
                                ItemGrant::one("longbow"),
                                ItemGrant::new("arrow", 20),
                            ],
                        ),
                    ],
                ),
                Requirement::equipment(
                    "fighter-weapons-primary",
                    "Primary weapons",
                    ChoiceSource::Class,
                    [
                        EquipmentOption::new(
                            "fighter-weapons-primary-a",
                            "A martial weapon and a shield",
                            [ItemGrant::one("shield")],
                        )
                        .with_pick(ItemFilter::MartialWeapon, 1),
                        EquipmentOption::pick(
                            "fighter-weapons-primary-b",
                            "Two martial weapons",
                            ItemFilter::MartialWeapon,
                            2,
                        ),
                    ],
                ),
                Requirement::equipment(
                    "fighter-pack",
                    "Pack",
                    ChoiceSource::Class,
                    [EquipmentOption::new(
                        "fighter-pack-a",
                        "Explorer's pack",
                        [ItemGrant::one("explorer-pack")],
                    )],
                ),
                Requirement::new(
                    "fighter-fighting-style",
                    "Fighting style",
                    ChoiceSource::Class,
                    RequirementKind::FightingStyle {
                        options: vec!["defense".into(), "dueling".into()],
                    },
                ),
            ]),
            "cleric" => {
                let mut requirements = Requirements::new(vec![
                    Requirement::skills(
                        "cleric-skills",
                        "Cleric skills",
                        ChoiceSource::Class,
                        2,
                        Some(vec![
                            Skill::History,
                            Skill::Insight,
                            Skill::Medicine,
                            Skill::Persuasion,
                            Skill::Religion,
                        ]),
                    ),
                    Requirement::new(
                        "cleric-cantrips",
                        "Cantrips",
                        ChoiceSource::Class,
                        RequirementKind::Cantrips {
                            count: 3,
                            options: vec![
                                "guidance".into(),
                                "light".into(),
                                "sacred-flame".into(),
                                "thaumaturgy".into(),
                            ],
                        },
                    ),
                ]);
                if *level >= 1 {
                    requirements.push(Requirement::new(
                        "cleric-subclass",
                        "Divine domain",
                        ChoiceSource::Class,
                        RequirementKind::Subclass {
                            options: vec!["life".into()],
                        },
                    ));
                }
                let _ = subclass;
                requirements
            }
            _ => Requirements::default(),
        },
        RequirementsKey::Background { background } => {
            if background.as_str() == "acolyte" {
                Requirements::new(vec![Requirement::languages(
                    "acolyte-languages",
                    "Languages",
                    ChoiceSource::Background,
                    2,
                )])
            } else {
                Requirements::default()
            }
        }
    }
}

/// A mock ruleset answering every lookup from the fixture tables above.
pub(crate) fn mock_ruleset() -> MockRulesetContent {
    mock_ruleset_with_items(items())
}

/// Same as `mock_ruleset`, but serving only the given item catalog.
pub(crate) fn mock_ruleset_with_items(item_table: Vec<ItemData>) -> MockRulesetContent {
    let mut mock = MockRulesetContent::new();

    let race_table = races();
    mock.expect_race()
        .returning(move |id| race_table.iter().find(|r| &r.id == id).cloned());

    let class_table = classes();
    mock.expect_class()
        .returning(move |id| class_table.iter().find(|c| &c.id == id).cloned());

    let background_table = backgrounds();
    mock.expect_background()
        .returning(move |id| background_table.iter().find(|b| &b.id == id).cloned());

    mock.expect_requirements().returning(requirements_for);

    let (race_table, class_table, background_table) = (races(), classes(), backgrounds());
    mock.expect_automatic_grants().returning(move |source| {
        let grants = match source {
            GrantSource::Race(id) => race_table
                .iter()
                .find(|r| &r.id == id)
                .map(|r| r.grants.clone()),
            GrantSource::Subrace(race, subrace) => race_table
                .iter()
                .find(|r| &r.id == race)
                .and_then(|r| r.subrace(subrace))
                .map(|s| s.grants.clone()),
            GrantSource::Class(id) => class_table
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.grants.clone()),
            GrantSource::Subclass(class, subclass) => class_table
                .iter()
                .find(|c| &c.id == class)
                .and_then(|c| c.subclass(subclass))
                .map(|s| s.grants.clone()),
            GrantSource::Background(id) => background_table
                .iter()
                .find(|b| &b.id == id)
                .map(|b| b.grants.clone()),
        };
        grants.unwrap_or_default()
    });

    mock.expect_item()
        .returning(move |id| item_table.iter().find(|i| &i.id == id).cloned());

    mock
}
