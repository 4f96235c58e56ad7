use std::collections::BTreeMap;

use heroforge_domain::{
    BackgroundData, BackgroundId, ClassData, ClassId, ItemData, ItemId, RaceData, RaceId,
    Requirements, RequirementsKey, RulesetContent,
};

use crate::{backgrounds, classes, items, races, requirements};

/// The 5e System Reference Document content, held in memory.
///
/// Lookups clone out of the maps so callers own what they get, which keeps
/// the `RulesetContent` contract identical for fixtures and real content.
#[derive(Debug, Clone)]
pub struct SrdRuleset {
    races: BTreeMap<RaceId, RaceData>,
    classes: BTreeMap<ClassId, ClassData>,
    backgrounds: BTreeMap<BackgroundId, BackgroundData>,
    items: BTreeMap<ItemId, ItemData>,
}

impl SrdRuleset {
    pub fn new() -> Self {
        let ruleset = Self {
            races: races::all().into_iter().map(|r| (r.id.clone(), r)).collect(),
            classes: classes::all().into_iter().map(|c| (c.id.clone(), c)).collect(),
            backgrounds: backgrounds::all()
                .into_iter()
                .map(|b| (b.id.clone(), b))
                .collect(),
            items: items::all().into_iter().map(|i| (i.id.clone(), i)).collect(),
        };

        tracing::debug!(
            races = ruleset.races.len(),
            classes = ruleset.classes.len(),
            backgrounds = ruleset.backgrounds.len(),
            items = ruleset.items.len(),
            "Loaded SRD ruleset"
        );

        ruleset
    }

    pub fn races(&self) -> impl Iterator<Item = &RaceData> {
        self.races.values()
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassData> {
        self.classes.values()
    }

    pub fn backgrounds(&self) -> impl Iterator<Item = &BackgroundData> {
        self.backgrounds.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemData> {
        self.items.values()
    }
}

impl Default for SrdRuleset {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesetContent for SrdRuleset {
    fn race(&self, id: &RaceId) -> Option<RaceData> {
        self.races.get(id).cloned()
    }

    fn class(&self, id: &ClassId) -> Option<ClassData> {
        self.classes.get(id).cloned()
    }

    fn background(&self, id: &BackgroundId) -> Option<BackgroundData> {
        self.backgrounds.get(id).cloned()
    }

    fn requirements(&self, key: &RequirementsKey) -> Requirements {
        match key {
            RequirementsKey::Race { race, subrace } => {
                requirements::for_race(race, subrace.as_ref())
            }
            RequirementsKey::Class {
                class,
                level,
                subclass,
            } => self
                .classes
                .get(class)
                .map(|data| requirements::for_class(data, *level, subclass.as_ref()))
                .unwrap_or_default(),
            RequirementsKey::Background { background } => {
                requirements::for_background(background.as_str())
            }
        }
    }

    fn item(&self, id: &ItemId) -> Option<ItemData> {
        self.items.get(id).cloned()
    }
}
