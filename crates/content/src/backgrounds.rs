use heroforge_domain::{AutomaticGrants, BackgroundData, ItemGrant, Skill};

pub(crate) fn all() -> Vec<BackgroundData> {
    vec![
        BackgroundData::new("acolyte", "Acolyte")
            .with_grants(
                AutomaticGrants::new()
                    .with_skills([Skill::Insight, Skill::Religion])
                    .with_equipment([
                        ItemGrant::one("holy-symbol"),
                        ItemGrant::one("prayer-book"),
                        ItemGrant::new("incense", 5),
                        ItemGrant::one("vestments"),
                        ItemGrant::one("common-clothes"),
                        ItemGrant::one("pouch"),
                    ]),
            )
            .with_feature("Shelter of the Faithful"),
        BackgroundData::new("criminal", "Criminal")
            .with_grants(
                AutomaticGrants::new()
                    .with_skills([Skill::Deception, Skill::Stealth])
                    .with_tools(["thieves-tools"])
                    .with_equipment([
                        ItemGrant::one("crowbar"),
                        ItemGrant::one("dark-common-clothes"),
                        ItemGrant::one("pouch"),
                    ]),
            )
            .with_feature("Criminal Contact"),
        BackgroundData::new("sage", "Sage")
            .with_grants(
                AutomaticGrants::new()
                    .with_skills([Skill::Arcana, Skill::History])
                    .with_equipment([
                        ItemGrant::one("ink"),
                        ItemGrant::one("ink-pen"),
                        ItemGrant::one("small-knife"),
                        ItemGrant::one("common-clothes"),
                        ItemGrant::one("pouch"),
                    ]),
            )
            .with_feature("Researcher"),
        BackgroundData::new("soldier", "Soldier")
            .with_grants(
                AutomaticGrants::new()
                    .with_skills([Skill::Athletics, Skill::Intimidation])
                    .with_tools(["land-vehicles"])
                    .with_equipment([
                        ItemGrant::one("insignia-of-rank"),
                        ItemGrant::one("dice-set"),
                        ItemGrant::one("common-clothes"),
                        ItemGrant::one("pouch"),
                    ]),
            )
            .with_feature("Military Rank"),
    ]
}
