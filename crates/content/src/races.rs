//! Races and subraces.
//!
//! Half-orc, dragonborn and tiefling list only their own tongue; common is
//! added by the compiler for everyone.

use heroforge_domain::{
    Ability, ArmorProficiency, AutomaticGrants, RaceData, Size, Skill, SubraceData,
};

pub(crate) fn all() -> Vec<RaceData> {
    vec![
        human(),
        dwarf(),
        elf(),
        halfling(),
        gnome(),
        half_elf(),
        half_orc(),
        dragonborn(),
        tiefling(),
    ]
}

fn human() -> RaceData {
    Ability::ALL
        .into_iter()
        .fold(RaceData::new("human", "Human"), |race, ability| {
            race.with_increase(ability, 1)
        })
        .with_grants(AutomaticGrants::new().with_languages(["common"]))
}

fn dwarf() -> RaceData {
    RaceData::new("dwarf", "Dwarf")
        .with_speed(25)
        .with_increase(Ability::Constitution, 2)
        .with_grants(
            AutomaticGrants::new()
                .with_languages(["common", "dwarvish"])
                .with_weapons(["battleaxe", "handaxe", "light-hammer", "warhammer"])
                .with_traits(["darkvision", "dwarven-resilience", "stonecunning"]),
        )
        .with_subrace(
            SubraceData::new("hill-dwarf", "Hill Dwarf")
                .with_increase(Ability::Wisdom, 1)
                .with_grants(AutomaticGrants::new().with_traits(["dwarven-toughness"])),
        )
        .with_subrace(
            SubraceData::new("mountain-dwarf", "Mountain Dwarf")
                .with_increase(Ability::Strength, 2)
                .with_grants(
                    AutomaticGrants::new()
                        .with_armor([ArmorProficiency::Light, ArmorProficiency::Medium]),
                ),
        )
}

fn elf() -> RaceData {
    let elf_weapons = ["longsword", "shortsword", "longbow", "shortbow"];

    RaceData::new("elf", "Elf")
        .with_increase(Ability::Dexterity, 2)
        .with_grants(
            AutomaticGrants::new()
                .with_skills([Skill::Perception])
                .with_languages(["common", "elvish"])
                .with_traits(["darkvision", "keen-senses", "fey-ancestry", "trance"]),
        )
        .with_subrace(
            SubraceData::new("high-elf", "High Elf")
                .with_increase(Ability::Intelligence, 1)
                .with_grants(AutomaticGrants::new().with_weapons(elf_weapons)),
        )
        .with_subrace(
            SubraceData::new("wood-elf", "Wood Elf")
                .with_increase(Ability::Wisdom, 1)
                .with_speed(35)
                .with_grants(
                    AutomaticGrants::new()
                        .with_weapons(elf_weapons)
                        .with_traits(["fleet-of-foot", "mask-of-the-wild"]),
                ),
        )
}

fn halfling() -> RaceData {
    RaceData::new("halfling", "Halfling")
        .with_size(Size::Small)
        .with_speed(25)
        .with_increase(Ability::Dexterity, 2)
        .with_grants(
            AutomaticGrants::new()
                .with_languages(["common", "halfling"])
                .with_traits(["lucky", "brave", "halfling-nimbleness"]),
        )
        .with_subrace(
            SubraceData::new("lightfoot", "Lightfoot Halfling")
                .with_increase(Ability::Charisma, 1)
                .with_grants(AutomaticGrants::new().with_traits(["naturally-stealthy"])),
        )
        .with_subrace(
            SubraceData::new("stout", "Stout Halfling")
                .with_increase(Ability::Constitution, 1)
                .with_grants(AutomaticGrants::new().with_traits(["stout-resilience"])),
        )
}

fn gnome() -> RaceData {
    RaceData::new("gnome", "Gnome")
        .with_size(Size::Small)
        .with_speed(25)
        .with_increase(Ability::Intelligence, 2)
        .with_grants(
            AutomaticGrants::new()
                .with_languages(["common", "gnomish"])
                .with_traits(["darkvision", "gnome-cunning"]),
        )
        .with_subrace(
            SubraceData::new("forest-gnome", "Forest Gnome")
                .with_increase(Ability::Dexterity, 1)
                .with_grants(
                    AutomaticGrants::new().with_traits(["natural-illusionist", "speak-with-small-beasts"]),
                ),
        )
        .with_subrace(
            SubraceData::new("rock-gnome", "Rock Gnome")
                .with_increase(Ability::Constitution, 1)
                .with_grants(
                    AutomaticGrants::new()
                        .with_tools(["tinkers-tools"])
                        .with_traits(["artificers-lore", "tinker"]),
                ),
        )
}

fn half_elf() -> RaceData {
    RaceData::new("half-elf", "Half-Elf")
        .with_increase(Ability::Charisma, 2)
        .with_grants(
            AutomaticGrants::new()
                .with_languages(["common", "elvish"])
                .with_traits(["darkvision", "fey-ancestry"]),
        )
}

fn half_orc() -> RaceData {
    RaceData::new("half-orc", "Half-Orc")
        .with_increase(Ability::Strength, 2)
        .with_increase(Ability::Constitution, 1)
        .with_grants(
            AutomaticGrants::new()
                .with_skills([Skill::Intimidation])
                .with_languages(["orc"])
                .with_traits(["darkvision", "relentless-endurance", "savage-attacks"]),
        )
}

fn dragonborn() -> RaceData {
    RaceData::new("dragonborn", "Dragonborn")
        .with_increase(Ability::Strength, 2)
        .with_increase(Ability::Charisma, 1)
        .with_grants(
            AutomaticGrants::new()
                .with_languages(["draconic"])
                .with_traits(["draconic-ancestry", "breath-weapon", "damage-resistance"]),
        )
}

fn tiefling() -> RaceData {
    RaceData::new("tiefling", "Tiefling")
        .with_increase(Ability::Intelligence, 1)
        .with_increase(Ability::Charisma, 2)
        .with_grants(
            AutomaticGrants::new()
                .with_languages(["infernal"])
                .with_traits(["darkvision", "hellish-resistance", "infernal-legacy"]),
        )
}
