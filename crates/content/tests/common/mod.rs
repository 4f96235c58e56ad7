//! Builders shared by the pipeline tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use heroforge_content::SrdRuleset;
use heroforge_domain::{
    Ability, AbilityScoreMethod, AbilityScores, Character, Choice, ChoiceSource, Draft, DraftId,
    PlayerId, Selection, Skill, SubclassId, SubraceId,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroforge_domain=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
}

pub fn ruleset() -> SrdRuleset {
    init_tracing();
    SrdRuleset::new()
}

pub fn new_draft() -> Draft {
    Draft::new(DraftId::new(), PlayerId::new(), now())
}

/// Everything needed to drive a draft from empty to finalizable.
#[derive(Debug, Clone)]
pub struct Build {
    pub name: &'static str,
    pub race: &'static str,
    pub subrace: Option<&'static str>,
    pub race_choices: Vec<Choice>,
    pub class: &'static str,
    pub subclass: Option<&'static str>,
    pub class_choices: Vec<Choice>,
    pub background: &'static str,
    pub background_choices: Vec<Choice>,
    pub scores: AbilityScores,
}

impl Build {
    /// A human soldier of the given class, with a complete set of choices.
    pub fn human(class: &'static str) -> Self {
        let (subclass, class_choices) = class_choices(class);
        Self {
            name: "Rurik",
            race: "human",
            subrace: None,
            race_choices: vec![Choice::languages(
                ChoiceSource::Race,
                "human-language",
                ["dwarvish"],
            )],
            class,
            subclass,
            class_choices,
            background: "soldier",
            background_choices: background_choices("soldier"),
            scores: AbilityScores::new(15, 14, 13, 12, 10, 8),
        }
    }

    pub fn with_race(mut self, race: &'static str) -> Self {
        let (subrace, choices) = race_choices(race);
        self.race = race;
        self.subrace = subrace;
        self.race_choices = choices;
        self
    }

    pub fn with_background(mut self, background: &'static str) -> Self {
        self.background = background;
        self.background_choices = background_choices(background);
        self
    }

    pub fn with_scores(mut self, scores: AbilityScores) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_class_choices(mut self, choices: Vec<Choice>) -> Self {
        self.class_choices = choices;
        self
    }

    pub fn draft(&self, ruleset: &SrdRuleset) -> Draft {
        let mut draft = new_draft();
        draft.set_name(ruleset, self.name, now()).unwrap();
        draft
            .set_race(
                ruleset,
                self.race.into(),
                self.subrace.map(SubraceId::from),
                self.race_choices.clone(),
                now(),
            )
            .unwrap();
        draft
            .set_class(
                ruleset,
                self.class.into(),
                self.subclass.map(SubclassId::from),
                self.class_choices.clone(),
                now(),
            )
            .unwrap();
        draft
            .set_background(
                ruleset,
                self.background.into(),
                self.background_choices.clone(),
                now(),
            )
            .unwrap();
        draft
            .set_ability_scores(ruleset, self.scores, Some(AbilityScoreMethod::Standard), now())
            .unwrap();
        draft
    }

    pub fn finalize(&self, ruleset: &SrdRuleset) -> Character {
        let draft = self.draft(ruleset);
        let validation = draft.validate(ruleset);
        assert!(
            validation.can_finalize,
            "{} {} is not finalizable: {:?}",
            self.race,
            self.class,
            validation.blocking_messages()
        );
        draft.finalize(ruleset, now()).unwrap()
    }
}

pub const CLASSES: [&str; 8] = [
    "barbarian",
    "cleric",
    "fighter",
    "monk",
    "rogue",
    "sorcerer",
    "warlock",
    "wizard",
];

fn class_choice(requirement: &str, selection: Selection) -> Choice {
    Choice::new(ChoiceSource::Class, requirement, selection)
}

fn equipment(requirement: &str, option: &str) -> Choice {
    Choice::equipment(ChoiceSource::Class, requirement, option)
}

fn cantrips(requirement: &str, spells: &[&str]) -> Choice {
    class_choice(
        requirement,
        Selection::Cantrips(spells.iter().map(|s| (*s).into()).collect()),
    )
}

fn first_level_spells(requirement: &str, spells: &[&str]) -> Choice {
    class_choice(
        requirement,
        Selection::Spells {
            level: 1,
            spells: spells.iter().map(|s| (*s).into()).collect(),
        },
    )
}

/// A valid first-level answer to every requirement of a class, with the
/// subclass it needs at that level.
pub fn class_choices(class: &str) -> (Option<&'static str>, Vec<Choice>) {
    use Skill::*;

    match class {
        "barbarian" => (
            None,
            vec![
                Choice::skills(ChoiceSource::Class, "barbarian-skills", [Nature, Survival]),
                equipment("barbarian-weapons-primary", "barbarian-weapons-primary-a"),
                equipment("barbarian-weapons-secondary", "barbarian-weapons-secondary-a"),
            ],
        ),
        "cleric" => (
            Some("life"),
            vec![
                Choice::skills(ChoiceSource::Class, "cleric-skills", [Medicine, Persuasion]),
                cantrips("cleric-cantrips", &["guidance", "sacred-flame", "thaumaturgy"]),
                equipment("cleric-weapons", "cleric-weapons-a"),
                equipment("cleric-armor", "cleric-armor-a"),
                equipment("cleric-ranged", "cleric-ranged-a"),
                equipment("cleric-pack", "cleric-pack-a"),
            ],
        ),
        "fighter" => (
            None,
            vec![
                Choice::skills(ChoiceSource::Class, "fighter-skills", [Acrobatics, Perception]),
                class_choice(
                    "fighter-fighting-style",
                    Selection::FightingStyle("defense".into()),
                ),
                equipment("fighter-armor", "fighter-armor-a"),
                Choice::equipment_with_items(
                    ChoiceSource::Class,
                    "fighter-weapons-primary",
                    "fighter-weapons-primary-a",
                    ["longsword"],
                ),
                equipment("fighter-weapons-secondary", "fighter-weapons-secondary-b"),
                equipment("fighter-pack", "fighter-pack-b"),
            ],
        ),
        "monk" => (
            None,
            vec![
                Choice::skills(ChoiceSource::Class, "monk-skills", [Acrobatics, Stealth]),
                class_choice("monk-tools", Selection::Tools(vec!["flute".into()])),
                equipment("monk-weapons", "monk-weapons-a"),
                equipment("monk-pack", "monk-pack-b"),
            ],
        ),
        "rogue" => (
            None,
            vec![
                Choice::skills(
                    ChoiceSource::Class,
                    "rogue-skills",
                    [Acrobatics, Investigation, Perception, SleightOfHand],
                ),
                class_choice(
                    "rogue-expertise",
                    Selection::Expertise(vec![Perception, SleightOfHand]),
                ),
                equipment("rogue-weapons-primary", "rogue-weapons-primary-a"),
                equipment("rogue-weapons-secondary", "rogue-weapons-secondary-a"),
                equipment("rogue-pack", "rogue-pack-a"),
            ],
        ),
        "sorcerer" => (
            Some("draconic-bloodline"),
            vec![
                Choice::skills(ChoiceSource::Class, "sorcerer-skills", [Arcana, Persuasion]),
                cantrips(
                    "sorcerer-cantrips",
                    &["fire-bolt", "light", "mage-hand", "true-strike"],
                ),
                first_level_spells("sorcerer-spells", &["magic-missile", "shield"]),
                equipment("sorcerer-weapon", "sorcerer-weapon-a"),
                equipment("sorcerer-focus", "sorcerer-focus-b"),
                equipment("sorcerer-pack", "sorcerer-pack-b"),
            ],
        ),
        "warlock" => (
            Some("fiend"),
            vec![
                Choice::skills(ChoiceSource::Class, "warlock-skills", [Deception, Nature]),
                cantrips("warlock-cantrips", &["eldritch-blast", "mage-hand"]),
                first_level_spells("warlock-spells", &["hex", "witch-bolt"]),
                equipment("warlock-weapon", "warlock-weapon-a"),
                equipment("warlock-focus", "warlock-focus-a"),
                equipment("warlock-pack", "warlock-pack-a"),
            ],
        ),
        "wizard" => (
            None,
            vec![
                Choice::skills(ChoiceSource::Class, "wizard-skills", [Arcana, Investigation]),
                cantrips("wizard-cantrips", &["fire-bolt", "light", "mage-hand"]),
                first_level_spells(
                    "wizard-spells",
                    &[
                        "burning-hands",
                        "detect-magic",
                        "mage-armor",
                        "magic-missile",
                        "shield",
                        "sleep",
                    ],
                ),
                equipment("wizard-weapon", "wizard-weapon-a"),
                equipment("wizard-focus", "wizard-focus-b"),
                equipment("wizard-pack", "wizard-pack-a"),
            ],
        ),
        other => panic!("no test choices for class {other}"),
    }
}

/// A subrace and valid race choices, none of which overlap the human soldier
/// fighter's picks.
pub fn race_choices(race: &str) -> (Option<&'static str>, Vec<Choice>) {
    match race {
        "human" => (
            None,
            vec![Choice::languages(
                ChoiceSource::Race,
                "human-language",
                ["dwarvish"],
            )],
        ),
        "dwarf" => (
            Some("hill-dwarf"),
            vec![Choice::new(
                ChoiceSource::Race,
                "dwarf-tools",
                Selection::Tools(vec!["smiths-tools".into()]),
            )],
        ),
        "elf" => (Some("wood-elf"), Vec::new()),
        "halfling" => (Some("lightfoot"), Vec::new()),
        "gnome" => (Some("rock-gnome"), Vec::new()),
        "half-elf" => (
            None,
            vec![
                Choice::skills(
                    ChoiceSource::Race,
                    "half-elf-skills",
                    [Skill::Stealth, Skill::Persuasion],
                ),
                Choice::languages(ChoiceSource::Race, "half-elf-language", ["sylvan"]),
                Choice::new(
                    ChoiceSource::Race,
                    "half-elf-abilities",
                    Selection::AbilityIncreases(BTreeMap::from([
                        (Ability::Strength, 1),
                        (Ability::Constitution, 1),
                    ])),
                ),
            ],
        ),
        _ => (None, Vec::new()),
    }
}

pub fn background_choices(background: &str) -> Vec<Choice> {
    let languages = |id: &str| {
        vec![Choice::languages(
            ChoiceSource::Background,
            id,
            ["celestial", "giant"],
        )]
    };
    let gaming_set = |id: &str, set: &str| {
        vec![Choice::new(
            ChoiceSource::Background,
            id,
            Selection::Tools(vec![set.into()]),
        )]
    };

    match background {
        "acolyte" => languages("acolyte-languages"),
        "sage" => languages("sage-languages"),
        "criminal" => gaming_set("criminal-gaming-set", "playing-card-set"),
        "soldier" => gaming_set("soldier-gaming-set", "dice-set"),
        other => panic!("no test choices for background {other}"),
    }
}
