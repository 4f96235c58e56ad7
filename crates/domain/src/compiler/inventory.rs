//! Inventory resolution
//!
//! Expands automatic equipment grants and recorded equipment choices into
//! concrete inventory entries, unpacking packs along the way.

use crate::entities::{
    ArmorProficiency, AutomaticGrants, ItemData, ItemGrant, ItemKind, RequirementKind,
    Requirements,
};
use crate::error::CreationError;
use crate::game_systems::RulesetContent;
use crate::ids::ItemId;
use crate::value_objects::{
    Choice, ChoiceSource, EquippedArmor, EquippedGear, EquippedShield, InventoryEntry, Selection,
};

/// Build the inventory: class grants, background grants, then equipment
/// choices in recording order. Nothing is merged.
pub(crate) fn resolve_inventory(
    ruleset: &dyn RulesetContent,
    automatic: &[(ChoiceSource, &AutomaticGrants)],
    choices: &[Choice],
    requirements: &Requirements,
) -> Result<Vec<InventoryEntry>, CreationError> {
    let mut inventory = Vec::new();

    for (source, grants) in automatic {
        for grant in &grants.equipment {
            push_grant(ruleset, grant, *source, &mut inventory)?;
        }
    }

    for choice in choices {
        let Selection::Equipment { option, items } = &choice.selection else {
            continue;
        };
        let unresolved = || CreationError::UnresolvedEquipment {
            requirement: choice.requirement_id.clone(),
            option: option.clone(),
        };

        let requirement = requirements
            .find(choice.source, &choice.requirement_id)
            .filter(|r| matches!(r.kind, RequirementKind::Equipment { .. }))
            .ok_or_else(unresolved)?;
        let equipment = requirement.equipment_option(option).ok_or_else(unresolved)?;

        for grant in &equipment.items {
            push_grant(ruleset, grant, choice.source, &mut inventory)?;
        }
        for item in items {
            push_grant(ruleset, &ItemGrant::one(item.clone()), choice.source, &mut inventory)?;
        }
    }

    Ok(inventory)
}

fn lookup(ruleset: &dyn RulesetContent, item: &ItemId) -> Result<ItemData, CreationError> {
    ruleset
        .item(item)
        .ok_or_else(|| CreationError::unknown_item(item.clone()))
}

fn push_grant(
    ruleset: &dyn RulesetContent,
    grant: &ItemGrant,
    source: ChoiceSource,
    inventory: &mut Vec<InventoryEntry>,
) -> Result<(), CreationError> {
    let item = lookup(ruleset, &grant.item)?;
    match &item.kind {
        ItemKind::Pack { contents } => {
            for content in contents {
                lookup(ruleset, &content.item)?;
                inventory.push(
                    InventoryEntry::new(
                        content.item.clone(),
                        content.quantity * grant.quantity,
                        source,
                    )
                    .from_pack(item.id.clone()),
                );
            }
        }
        _ => inventory.push(InventoryEntry::new(item.id, grant.quantity, source)),
    }
    Ok(())
}

/// Pick starting gear: the first armor the character can wear and the first
/// shield if shields are allowed.
pub(crate) fn auto_equip(
    ruleset: &dyn RulesetContent,
    inventory: &[InventoryEntry],
    proficiencies: &std::collections::BTreeSet<ArmorProficiency>,
) -> EquippedGear {
    let mut gear = EquippedGear::default();
    for entry in inventory {
        let Some(item) = ruleset.item(&entry.item) else {
            continue;
        };
        match item.kind {
            ItemKind::Armor { category, base_ac }
                if gear.armor.is_none() && proficiencies.contains(&category.proficiency()) =>
            {
                gear.armor = Some(EquippedArmor {
                    item: item.id,
                    name: item.name,
                    category,
                    base_ac,
                });
            }
            ItemKind::Shield
                if gear.shield.is_none() && proficiencies.contains(&ArmorProficiency::Shields) =>
            {
                gear.shield = Some(EquippedShield {
                    item: item.id,
                    name: item.name,
                });
            }
            _ => {}
        }
    }
    gear
}
