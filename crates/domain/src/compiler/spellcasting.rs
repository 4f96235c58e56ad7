use crate::aggregates::CharacterSpells;
use crate::aggregates::SpellSlot;
use crate::entities::{AutomaticGrants, ClassData};
use crate::value_objects::{Choice, Selection};

/// Collect cantrips, leveled spells and starting slots.
///
/// Chosen spells come first, then granted ones (domain spells, racial
/// cantrips). A spell known twice is listed once.
pub(crate) fn compile_spells(
    class: &ClassData,
    level: u8,
    grants: &[&AutomaticGrants],
    choices: &[Choice],
) -> CharacterSpells {
    let mut spells = CharacterSpells {
        spellcasting_ability: class.spellcasting.as_ref().map(|s| s.ability),
        ..CharacterSpells::default()
    };

    for choice in choices {
        match &choice.selection {
            Selection::Cantrips(cantrips) => {
                for cantrip in cantrips {
                    push_unique(&mut spells.cantrips, cantrip);
                }
            }
            Selection::Spells {
                level: spell_level,
                spells: chosen,
            } => {
                let known = spells.known.entry(*spell_level).or_default();
                for spell in chosen {
                    push_unique(known, spell);
                }
            }
            _ => {}
        }
    }

    for grant in grants.iter().flat_map(|g| g.spells.iter()) {
        if grant.level == 0 {
            push_unique(&mut spells.cantrips, &grant.spell);
        } else {
            push_unique(spells.known.entry(grant.level).or_default(), &grant.spell);
        }
    }

    if let Some(casting) = &class.spellcasting {
        for (index, count) in casting.slots_at(level).iter().enumerate() {
            if *count > 0 {
                spells.slots.insert(
                    (index + 1) as u8,
                    SpellSlot {
                        current: *count,
                        max: *count,
                    },
                );
            }
        }
    }

    spells
}

fn push_unique<T: Clone + PartialEq>(list: &mut Vec<T>, value: &T) {
    if !list.contains(value) {
        list.push(value.clone());
    }
}
