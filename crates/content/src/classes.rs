//! Classes and subclasses with their level-1 grants, spellcasting tables
//! and limited-use resources.

use heroforge_domain::{
    Ability, ArmorProficiency, AutomaticGrants, ClassData, ItemGrant, ResourceData, RestType,
    SpellGrant, SpellcastingData, SubclassData,
};

pub(crate) fn all() -> Vec<ClassData> {
    vec![
        barbarian(),
        cleric(),
        fighter(),
        monk(),
        rogue(),
        sorcerer(),
        warlock(),
        wizard(),
    ]
}

const ALL_ARMOR: [ArmorProficiency; 4] = [
    ArmorProficiency::Light,
    ArmorProficiency::Medium,
    ArmorProficiency::Heavy,
    ArmorProficiency::Shields,
];

const SIMPLE_AND_MARTIAL: [&str; 2] = ["simple-weapons", "martial-weapons"];

const CASTER_WEAPONS: [&str; 5] = ["dagger", "dart", "sling", "quarterstaff", "light-crossbow"];

/// First-level slots for levels 1 to 3 of a full caster.
fn full_caster_slots() -> Vec<Vec<u8>> {
    vec![vec![2], vec![3], vec![4, 2]]
}

fn barbarian() -> ClassData {
    ClassData::new("barbarian", "Barbarian", 12)
        .with_saving_throws(Ability::Strength, Ability::Constitution)
        .with_grants(
            AutomaticGrants::new()
                .with_armor([
                    ArmorProficiency::Light,
                    ArmorProficiency::Medium,
                    ArmorProficiency::Shields,
                ])
                .with_weapons(SIMPLE_AND_MARTIAL)
                .with_equipment([
                    ItemGrant::one("explorer-pack"),
                    ItemGrant::new("javelin", 4),
                ])
                .with_traits(["rage", "unarmored-defense"]),
        )
        .with_unarmored_defense(Ability::Constitution)
        .with_subclass(SubclassData::new("berserker", "Path of the Berserker"))
        .with_subclass(SubclassData::new("totem-warrior", "Path of the Totem Warrior"))
        .with_resource(ResourceData::new(
            "rage",
            "Rage",
            vec![2, 2, 3, 3, 3, 4],
            RestType::Long,
        ))
}

fn cleric() -> ClassData {
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
                .with_weapons(["simple-weapons"])
                .with_equipment([ItemGrant::one("shield"), ItemGrant::one("holy-symbol")])
                .with_traits(["spellcasting", "divine-domain"]),
        )
        .with_spellcasting(SpellcastingData::new(Ability::Wisdom, full_caster_slots()))
        .with_subclass(
            SubclassData::new("life", "Life Domain").with_grants(
                AutomaticGrants::new()
                    .with_armor([ArmorProficiency::Heavy])
                    .with_spells([
                        SpellGrant::leveled("bless", 1),
                        SpellGrant::leveled("cure-wounds", 1),
                    ])
                    .with_traits(["disciple-of-life"]),
            ),
        )
        .with_subclass(
            SubclassData::new("light", "Light Domain").with_grants(
                AutomaticGrants::new()
                    .with_spells([
                        SpellGrant::cantrip("light"),
                        SpellGrant::leveled("burning-hands", 1),
                        SpellGrant::leveled("faerie-fire", 1),
                    ])
                    .with_traits(["warding-flare"]),
            ),
        )
        .with_subclass(
            SubclassData::new("knowledge", "Knowledge Domain").with_grants(
                AutomaticGrants::new()
                    .with_spells([
                        SpellGrant::leveled("command", 1),
                        SpellGrant::leveled("identify", 1),
                    ])
                    .with_traits(["blessings-of-knowledge"]),
            ),
        )
}

fn fighter() -> ClassData {
    ClassData::new("fighter", "Fighter", 10)
        .with_saving_throws(Ability::Strength, Ability::Constitution)
        .with_grants(
            AutomaticGrants::new()
                .with_armor(ALL_ARMOR)
                .with_weapons(SIMPLE_AND_MARTIAL)
                .with_traits(["fighting-style", "second-wind"]),
        )
        .with_subclass(SubclassData::new("champion", "Champion"))
        .with_subclass(SubclassData::new("battle-master", "Battle Master"))
        .with_subclass(SubclassData::new("eldritch-knight", "Eldritch Knight"))
        .with_resource(ResourceData::new(
            "second-wind",
            "Second Wind",
            vec![1; 20],
            RestType::Short,
        ))
}

fn monk() -> ClassData {
    ClassData::new("monk", "Monk", 8)
        .with_saving_throws(Ability::Strength, Ability::Dexterity)
        .with_grants(
            AutomaticGrants::new()
                .with_weapons(["simple-weapons", "shortsword"])
                .with_equipment([ItemGrant::new("dart", 10)])
                .with_traits(["unarmored-defense", "martial-arts"]),
        )
        .with_unarmored_defense(Ability::Wisdom)
        .with_subclass(SubclassData::new("open-hand", "Way of the Open Hand"))
        .with_subclass(SubclassData::new("shadow", "Way of Shadow"))
        .with_resource(ResourceData::new(
            "ki",
            "Ki",
            vec![0, 2, 3, 4, 5, 6],
            RestType::Short,
        ))
}

fn rogue() -> ClassData {
    ClassData::new("rogue", "Rogue", 8)
        .with_saving_throws(Ability::Dexterity, Ability::Intelligence)
        .with_grants(
            AutomaticGrants::new()
                .with_armor([ArmorProficiency::Light])
                .with_weapons([
                    "simple-weapons",
                    "hand-crossbow",
                    "longsword",
                    "rapier",
                    "shortsword",
                ])
                .with_tools(["thieves-tools"])
                .with_equipment([
                    ItemGrant::one("leather-armor"),
                    ItemGrant::new("dagger", 2),
                    ItemGrant::one("thieves-tools"),
                ])
                .with_traits(["expertise", "sneak-attack", "thieves-cant"]),
        )
        .with_subclass(SubclassData::new("thief", "Thief"))
        .with_subclass(SubclassData::new("assassin", "Assassin"))
        .with_subclass(SubclassData::new("arcane-trickster", "Arcane Trickster"))
}

fn sorcerer() -> ClassData {
    ClassData::new("sorcerer", "Sorcerer", 6)
        .with_saving_throws(Ability::Constitution, Ability::Charisma)
        .with_subclass_level(1)
        .with_grants(
            AutomaticGrants::new()
                .with_weapons(CASTER_WEAPONS)
                .with_equipment([ItemGrant::new("dagger", 2)])
                .with_traits(["spellcasting", "sorcerous-origin"]),
        )
        .with_spellcasting(SpellcastingData::new(Ability::Charisma, full_caster_slots()))
        .with_subclass(
            SubclassData::new("draconic-bloodline", "Draconic Bloodline").with_grants(
                AutomaticGrants::new()
                    .with_languages(["draconic"])
                    .with_traits(["draconic-resilience"]),
            ),
        )
        .with_subclass(
            SubclassData::new("wild-magic", "Wild Magic")
                .with_grants(AutomaticGrants::new().with_traits(["wild-magic-surge"])),
        )
}

fn warlock() -> ClassData {
    ClassData::new("warlock", "Warlock", 8)
        .with_saving_throws(Ability::Wisdom, Ability::Charisma)
        .with_subclass_level(1)
        .with_grants(
            AutomaticGrants::new()
                .with_armor([ArmorProficiency::Light])
                .with_weapons(["simple-weapons"])
                .with_equipment([ItemGrant::one("leather-armor"), ItemGrant::new("dagger", 2)])
                .with_traits(["pact-magic", "otherworldly-patron"]),
        )
        // Pact magic: one slot at level 1, two from level 2
        .with_spellcasting(SpellcastingData::new(
            Ability::Charisma,
            vec![vec![1], vec![2], vec![0, 2]],
        ))
        .with_subclass(SubclassData::new("archfey", "The Archfey"))
        .with_subclass(SubclassData::new("fiend", "The Fiend"))
        .with_subclass(SubclassData::new("great-old-one", "The Great Old One"))
}

fn wizard() -> ClassData {
    ClassData::new("wizard", "Wizard", 6)
        .with_saving_throws(Ability::Intelligence, Ability::Wisdom)
        .with_subclass_level(2)
        .with_grants(
            AutomaticGrants::new()
                .with_weapons(CASTER_WEAPONS)
                .with_equipment([ItemGrant::one("spellbook")])
                .with_traits(["spellcasting", "arcane-recovery"]),
        )
        .with_spellcasting(SpellcastingData::new(Ability::Intelligence, full_caster_slots()))
        .with_subclass(SubclassData::new("evocation", "School of Evocation"))
        .with_subclass(SubclassData::new("abjuration", "School of Abjuration"))
        .with_subclass(SubclassData::new("divination", "School of Divination"))
}
