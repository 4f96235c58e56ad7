//! Decision points per race, class and background at first level.

use heroforge_domain::{
    Ability, ChoiceSource, ClassData, EquipmentOption, ItemFilter, ItemGrant, RaceId,
    Requirement, RequirementKind, Requirements, Skill, SubclassId, SubraceId,
};

const CLERIC_CANTRIPS: [&str; 7] = [
    "guidance",
    "light",
    "mending",
    "resistance",
    "sacred-flame",
    "spare-the-dying",
    "thaumaturgy",
];

const ARCANE_CANTRIPS: [&str; 8] = [
    "acid-splash",
    "fire-bolt",
    "light",
    "mage-hand",
    "minor-illusion",
    "prestidigitation",
    "ray-of-frost",
    "shocking-grasp",
];

const ARCANE_SPELLS: [&str; 9] = [
    "burning-hands",
    "charm-person",
    "detect-magic",
    "feather-fall",
    "mage-armor",
    "magic-missile",
    "shield",
    "sleep",
    "thunderwave",
];

const WARLOCK_CANTRIPS: [&str; 5] = [
    "eldritch-blast",
    "mage-hand",
    "minor-illusion",
    "prestidigitation",
    "true-strike",
];

const WARLOCK_SPELLS: [&str; 5] = [
    "charm-person",
    "hellish-rebuke",
    "hex",
    "protection-from-evil-and-good",
    "witch-bolt",
];

const GAMING_SETS: [&str; 3] = ["dice-set", "dragonchess-set", "playing-card-set"];

pub(crate) fn for_race(race: &RaceId, subrace: Option<&SubraceId>) -> Requirements {
    let mut requirements = Requirements::default();

    match race.as_str() {
        "human" => requirements.push(Requirement::languages(
            "human-language",
            "Extra language",
            ChoiceSource::Race,
            1,
        )),
        "dwarf" => requirements.push(Requirement::new(
            "dwarf-tools",
            "Artisan's tools",
            ChoiceSource::Race,
            RequirementKind::Tools {
                count: 1,
                options: ids(&["smiths-tools", "brewers-supplies", "masons-tools"]),
            },
        )),
        "half-elf" => {
            requirements.push(Requirement::skills(
                "half-elf-skills",
                "Skill versatility",
                ChoiceSource::Race,
                2,
                None,
            ));
            requirements.push(Requirement::languages(
                "half-elf-language",
                "Extra language",
                ChoiceSource::Race,
                1,
            ));
            requirements.push(Requirement::new(
                "half-elf-abilities",
                "Ability score increases",
                ChoiceSource::Race,
                RequirementKind::AbilityIncreases {
                    points: 2,
                    max_per_ability: 1,
                    excluded: vec![Ability::Charisma],
                },
            ));
        }
        _ => {}
    }

    if subrace.map(SubraceId::as_str) == Some("high-elf") {
        requirements.push(Requirement::languages(
            "high-elf-language",
            "Extra language",
            ChoiceSource::Subrace,
            1,
        ));
        requirements.push(Requirement::new(
            "high-elf-cantrip",
            "Wizard cantrip",
            ChoiceSource::Subrace,
            RequirementKind::Cantrips {
                count: 1,
                options: ids(&ARCANE_CANTRIPS),
            },
        ));
    }

    requirements
}

pub(crate) fn for_class(
    class: &ClassData,
    level: u8,
    subclass: Option<&SubclassId>,
) -> Requirements {
    let mut requirements = match class.id.as_str() {
        "barbarian" => barbarian(),
        "cleric" => cleric(),
        "fighter" => fighter(),
        "monk" => monk(),
        "rogue" => rogue(),
        "sorcerer" => sorcerer(),
        "warlock" => warlock(),
        "wizard" => wizard(),
        _ => Requirements::default(),
    };

    if class.requires_subclass_at(level) {
        let (id, label) = subclass_prompt(class.id.as_str());
        requirements.push(Requirement::new(
            id,
            label,
            ChoiceSource::Class,
            RequirementKind::Subclass {
                options: class.subclasses.iter().map(|s| s.id.clone()).collect(),
            },
        ));
    }

    match (class.id.as_str(), subclass.map(SubclassId::as_str)) {
        ("cleric", Some("life")) => {
            if let Some(armor) = requirements.find_mut(&"cleric-armor".into()) {
                if let RequirementKind::Equipment { options } = &mut armor.kind {
                    options.push(EquipmentOption::new(
                        "cleric-armor-life",
                        "Chain mail",
                        [ItemGrant::one("chain-mail")],
                    ));
                }
            }
        }
        ("cleric", Some("knowledge")) => {
            requirements.push(Requirement::skills(
                "cleric-knowledge-skills",
                "Blessings of knowledge",
                ChoiceSource::Subclass,
                2,
                Some(vec![
                    Skill::Arcana,
                    Skill::History,
                    Skill::Nature,
                    Skill::Religion,
                ]),
            ));
            requirements.push(Requirement::languages(
                "cleric-knowledge-languages",
                "Blessings of knowledge languages",
                ChoiceSource::Subclass,
                2,
            ));
        }
        _ => {}
    }

    requirements
}

pub(crate) fn for_background(background: &str) -> Requirements {
    let mut requirements = Requirements::default();

    match background {
        "acolyte" => requirements.push(Requirement::languages(
            "acolyte-languages",
            "Languages",
            ChoiceSource::Background,
            2,
        )),
        "sage" => requirements.push(Requirement::languages(
            "sage-languages",
            "Languages",
            ChoiceSource::Background,
            2,
        )),
        "criminal" | "soldier" => requirements.push(Requirement::new(
            format!("{background}-gaming-set"),
            "Gaming set",
            ChoiceSource::Background,
            RequirementKind::Tools {
                count: 1,
                options: ids(&GAMING_SETS),
            },
        )),
        _ => {}
    }

    requirements
}

fn subclass_prompt(class: &str) -> (String, &'static str) {
    let (suffix, label) = match class {
        "barbarian" => ("path", "Primal path"),
        "cleric" => ("domain", "Divine domain"),
        "fighter" => ("archetype", "Martial archetype"),
        "monk" => ("tradition", "Monastic tradition"),
        "rogue" => ("archetype", "Roguish archetype"),
        "sorcerer" => ("origin", "Sorcerous origin"),
        "warlock" => ("patron", "Otherworldly patron"),
        "wizard" => ("tradition", "Arcane tradition"),
        _ => ("subclass", "Subclass"),
    };
    (format!("{class}-{suffix}"), label)
}

fn ids<T: From<&'static str>>(values: &[&'static str]) -> Vec<T> {
    values.iter().copied().map(T::from).collect()
}

fn class_skills(class: &str, count: u8, options: &[Skill]) -> Requirement {
    Requirement::skills(
        format!("{class}-skills"),
        "Class skills",
        ChoiceSource::Class,
        count,
        Some(options.to_vec()),
    )
}

fn cantrips(class: &str, count: u8, options: &[&'static str]) -> Requirement {
    Requirement::new(
        format!("{class}-cantrips"),
        "Cantrips",
        ChoiceSource::Class,
        RequirementKind::Cantrips {
            count,
            options: ids(options),
        },
    )
}

fn spells(class: &str, count: u8, options: &[&'static str]) -> Requirement {
    Requirement::new(
        format!("{class}-spells"),
        "First-level spells",
        ChoiceSource::Class,
        RequirementKind::Spells {
            level: 1,
            count,
            options: ids(options),
        },
    )
}

/// Equipment choice whose options each grant a single fixed kit.
fn kit(id: &str, label: &str, options: Vec<EquipmentOption>) -> Requirement {
    Requirement::equipment(id, label, ChoiceSource::Class, options)
}

fn single(id: &str, label: &str, item: &str) -> EquipmentOption {
    EquipmentOption::new(id, label, [ItemGrant::one(item)])
}

fn crossbow_and_bolts(id: &str) -> EquipmentOption {
    EquipmentOption::new(
        id,
        "Light crossbow and 20 bolts",
        [ItemGrant::one("light-crossbow"), ItemGrant::new("bolt", 20)],
    )
}

fn focus(class: &str) -> Requirement {
    let id = format!("{class}-focus");
    kit(
        &id,
        "Spellcasting focus",
        vec![
            single(&format!("{id}-a"), "Component pouch", "component-pouch"),
            single(&format!("{id}-b"), "Arcane focus", "arcane-focus"),
        ],
    )
}

fn pack(class: &str, packs: &[(&str, &str)]) -> Requirement {
    let id = format!("{class}-pack");
    let options = packs
        .iter()
        .zip('a'..)
        .map(|((item, label), suffix)| single(&format!("{id}-{suffix}"), label, item))
        .collect();
    kit(&id, "Pack", options)
}

fn barbarian() -> Requirements {
    Requirements::new(vec![
        class_skills(
            "barbarian",
            2,
            &[
                Skill::AnimalHandling,
                Skill::Athletics,
                Skill::Intimidation,
                Skill::Nature,
                Skill::Perception,
                Skill::Survival,
            ],
        ),
        kit(
            "barbarian-weapons-primary",
            "Primary weapon",
            vec![
                single("barbarian-weapons-primary-a", "Greataxe", "greataxe"),
                EquipmentOption::pick(
                    "barbarian-weapons-primary-b",
                    "Any martial melee weapon",
                    ItemFilter::MartialMeleeWeapon,
                    1,
                ),
            ],
        ),
        kit(
            "barbarian-weapons-secondary",
            "Secondary weapon",
            vec![
                EquipmentOption::new(
                    "barbarian-weapons-secondary-a",
                    "Two handaxes",
                    [ItemGrant::new("handaxe", 2)],
                ),
                EquipmentOption::pick(
                    "barbarian-weapons-secondary-b",
                    "Any simple weapon",
                    ItemFilter::SimpleWeapon,
                    1,
                ),
            ],
        ),
    ])
}

fn cleric() -> Requirements {
    Requirements::new(vec![
        class_skills(
            "cleric",
            2,
            &[
                Skill::History,
                Skill::Insight,
                Skill::Medicine,
                Skill::Persuasion,
                Skill::Religion,
            ],
        ),
        cantrips("cleric", 3, &CLERIC_CANTRIPS),
        kit(
            "cleric-weapons",
            "Weapon",
            vec![
                single("cleric-weapons-a", "Mace", "mace"),
                single("cleric-weapons-b", "Warhammer", "warhammer"),
            ],
        ),
        kit(
            "cleric-armor",
            "Armor",
            vec![
                single("cleric-armor-a", "Scale mail", "scale-mail"),
                single("cleric-armor-b", "Leather armor", "leather-armor"),
            ],
        ),
        kit(
            "cleric-ranged",
            "Ranged weapon",
            vec![
                crossbow_and_bolts("cleric-ranged-a"),
                EquipmentOption::pick(
                    "cleric-ranged-b",
                    "Any simple weapon",
                    ItemFilter::SimpleWeapon,
                    1,
                ),
            ],
        ),
        pack(
            "cleric",
            &[
                ("priest-pack", "Priest's pack"),
                ("explorer-pack", "Explorer's pack"),
            ],
        ),
    ])
}

fn fighter() -> Requirements {
    Requirements::new(vec![
        class_skills(
            "fighter",
            2,
            &[
                Skill::Acrobatics,
                Skill::AnimalHandling,
                Skill::Athletics,
                Skill::History,
                Skill::Insight,
                Skill::Intimidation,
                Skill::Perception,
                Skill::Survival,
            ],
        ),
        Requirement::new(
            "fighter-fighting-style",
            "Fighting style",
            ChoiceSource::Class,
            RequirementKind::FightingStyle {
                options: ids(&[
                    "archery",
                    "defense",
                    "dueling",
                    "great-weapon-fighting",
                    "protection",
                    "two-weapon-fighting",
                ]),
            },
        ),
        kit(
            "fighter-armor",
            "Armor",
            vec![
                single("fighter-armor-a", "Chain mail", "chain-mail"),
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
        kit(
            "fighter-weapons-primary",
            "Primary weapons",
            vec![
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
        kit(
            "fighter-weapons-secondary",
            "Secondary weapons",
            vec![
                crossbow_and_bolts("fighter-weapons-secondary-a"),
                EquipmentOption::new(
                    "fighter-weapons-secondary-b",
                    "Two handaxes",
                    [ItemGrant::new("handaxe", 2)],
                ),
            ],
        ),
        pack(
            "fighter",
            &[
                ("dungeoneer-pack", "Dungeoneer's pack"),
                ("explorer-pack", "Explorer's pack"),
            ],
        ),
    ])
}

fn monk() -> Requirements {
    Requirements::new(vec![
        class_skills(
            "monk",
            2,
            &[
                Skill::Acrobatics,
                Skill::Athletics,
                Skill::History,
                Skill::Insight,
                Skill::Religion,
                Skill::Stealth,
            ],
        ),
        Requirement::new(
            "monk-tools",
            "Artisan's tools or instrument",
            ChoiceSource::Class,
            RequirementKind::Tools {
                count: 1,
                options: ids(&[
                    "brewers-supplies",
                    "calligraphers-supplies",
                    "carpenters-tools",
                    "smiths-tools",
                    "woodcarvers-tools",
                    "drum",
                    "flute",
                    "lute",
                    "lyre",
                ]),
            },
        ),
        kit(
            "monk-weapons",
            "Weapon",
            vec![
                single("monk-weapons-a", "Shortsword", "shortsword"),
                EquipmentOption::pick(
                    "monk-weapons-b",
                    "Any simple weapon",
                    ItemFilter::SimpleWeapon,
                    1,
                ),
            ],
        ),
        pack(
            "monk",
            &[
                ("dungeoneer-pack", "Dungeoneer's pack"),
                ("explorer-pack", "Explorer's pack"),
            ],
        ),
    ])
}

fn rogue() -> Requirements {
    Requirements::new(vec![
        class_skills(
            "rogue",
            4,
            &[
                Skill::Acrobatics,
                Skill::Athletics,
                Skill::Deception,
                Skill::Insight,
                Skill::Intimidation,
                Skill::Investigation,
                Skill::Perception,
                Skill::Performance,
                Skill::Persuasion,
                Skill::SleightOfHand,
                Skill::Stealth,
            ],
        ),
        Requirement::new(
            "rogue-expertise",
            "Expertise",
            ChoiceSource::Class,
            RequirementKind::Expertise { count: 2 },
        ),
        kit(
            "rogue-weapons-primary",
            "Primary weapon",
            vec![
                single("rogue-weapons-primary-a", "Rapier", "rapier"),
                single("rogue-weapons-primary-b", "Shortsword", "shortsword"),
            ],
        ),
        kit(
            "rogue-weapons-secondary",
            "Secondary weapon",
            vec![
                EquipmentOption::new(
                    "rogue-weapons-secondary-a",
                    "Shortbow, quiver and 20 arrows",
                    [
                        ItemGrant::one("shortbow"),
                        ItemGrant::one("quiver"),
                        ItemGrant::new("arrow", 20),
                    ],
                ),
                single("rogue-weapons-secondary-b", "Shortsword", "shortsword"),
            ],
        ),
        pack(
            "rogue",
            &[
                ("burglar-pack", "Burglar's pack"),
                ("dungeoneer-pack", "Dungeoneer's pack"),
                ("explorer-pack", "Explorer's pack"),
            ],
        ),
    ])
}

fn caster_weapon(class: &str) -> Requirement {
    let id = format!("{class}-weapon");
    kit(
        &id,
        "Weapon",
        vec![
            crossbow_and_bolts(&format!("{id}-a")),
            EquipmentOption::pick(
                format!("{id}-b"),
                "Any simple weapon",
                ItemFilter::SimpleWeapon,
                1,
            ),
        ],
    )
}

fn sorcerer() -> Requirements {
    let mut cantrip_options = ARCANE_CANTRIPS.to_vec();
    cantrip_options.push("true-strike");

    Requirements::new(vec![
        class_skills(
            "sorcerer",
            2,
            &[
                Skill::Arcana,
                Skill::Deception,
                Skill::Insight,
                Skill::Intimidation,
                Skill::Persuasion,
                Skill::Religion,
            ],
        ),
        cantrips("sorcerer", 4, &cantrip_options),
        spells("sorcerer", 2, &ARCANE_SPELLS),
        caster_weapon("sorcerer"),
        focus("sorcerer"),
        pack(
            "sorcerer",
            &[
                ("dungeoneer-pack", "Dungeoneer's pack"),
                ("explorer-pack", "Explorer's pack"),
            ],
        ),
    ])
}

fn warlock() -> Requirements {
    Requirements::new(vec![
        class_skills(
            "warlock",
            2,
            &[
                Skill::Arcana,
                Skill::Deception,
                Skill::History,
                Skill::Intimidation,
                Skill::Investigation,
                Skill::Nature,
                Skill::Religion,
            ],
        ),
        cantrips("warlock", 2, &WARLOCK_CANTRIPS),
        spells("warlock", 2, &WARLOCK_SPELLS),
        caster_weapon("warlock"),
        focus("warlock"),
        pack(
            "warlock",
            &[
                ("scholar-pack", "Scholar's pack"),
                ("dungeoneer-pack", "Dungeoneer's pack"),
            ],
        ),
    ])
}

fn wizard() -> Requirements {
    let mut spell_options = ARCANE_SPELLS.to_vec();
    spell_options.push("identify");

    Requirements::new(vec![
        class_skills(
            "wizard",
            2,
            &[
                Skill::Arcana,
                Skill::History,
                Skill::Insight,
                Skill::Investigation,
                Skill::Medicine,
                Skill::Religion,
            ],
        ),
        cantrips("wizard", 3, &ARCANE_CANTRIPS),
        spells("wizard", 6, &spell_options),
        kit(
            "wizard-weapon",
            "Weapon",
            vec![
                single("wizard-weapon-a", "Quarterstaff", "quarterstaff"),
                single("wizard-weapon-b", "Dagger", "dagger"),
            ],
        ),
        focus("wizard"),
        pack(
            "wizard",
            &[
                ("scholar-pack", "Scholar's pack"),
                ("explorer-pack", "Explorer's pack"),
            ],
        ),
    ])
}
