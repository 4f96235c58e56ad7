//! Equipment catalog: armor, weapons, adventuring gear and packs.

use heroforge_domain::{ArmorCategory, ItemData, ItemGrant, ItemKind, WeaponCategory};

pub(crate) fn all() -> Vec<ItemData> {
    let mut items = Vec::new();
    items.extend(armor());
    items.extend(weapons());
    items.extend(gear());
    items.extend(packs());
    items
}

fn armor() -> Vec<ItemData> {
    use ArmorCategory::{Heavy, Light, Medium};

    vec![
        ItemData::armor("padded", "Padded Armor", Light, 11),
        ItemData::armor("leather-armor", "Leather Armor", Light, 11),
        ItemData::armor("studded-leather", "Studded Leather Armor", Light, 12),
        ItemData::armor("hide", "Hide Armor", Medium, 12),
        ItemData::armor("chain-shirt", "Chain Shirt", Medium, 13),
        ItemData::armor("scale-mail", "Scale Mail", Medium, 14),
        ItemData::armor("breastplate", "Breastplate", Medium, 14),
        ItemData::armor("half-plate", "Half Plate", Medium, 15),
        ItemData::armor("ring-mail", "Ring Mail", Heavy, 14),
        ItemData::armor("chain-mail", "Chain Mail", Heavy, 16),
        ItemData::armor("splint", "Splint Armor", Heavy, 17),
        ItemData::armor("plate", "Plate Armor", Heavy, 18),
        ItemData::new("shield", "Shield", ItemKind::Shield),
    ]
}

fn weapons() -> Vec<ItemData> {
    use WeaponCategory::{Martial, Simple};

    let simple_melee = [
        ("club", "Club"),
        ("dagger", "Dagger"),
        ("greatclub", "Greatclub"),
        ("handaxe", "Handaxe"),
        ("javelin", "Javelin"),
        ("light-hammer", "Light Hammer"),
        ("mace", "Mace"),
        ("quarterstaff", "Quarterstaff"),
        ("sickle", "Sickle"),
        ("spear", "Spear"),
    ];
    let simple_ranged = [
        ("light-crossbow", "Light Crossbow"),
        ("dart", "Dart"),
        ("shortbow", "Shortbow"),
        ("sling", "Sling"),
    ];
    let martial_melee = [
        ("battleaxe", "Battleaxe"),
        ("flail", "Flail"),
        ("glaive", "Glaive"),
        ("greataxe", "Greataxe"),
        ("greatsword", "Greatsword"),
        ("halberd", "Halberd"),
        ("lance", "Lance"),
        ("longsword", "Longsword"),
        ("maul", "Maul"),
        ("morningstar", "Morningstar"),
        ("pike", "Pike"),
        ("rapier", "Rapier"),
        ("scimitar", "Scimitar"),
        ("shortsword", "Shortsword"),
        ("trident", "Trident"),
        ("war-pick", "War Pick"),
        ("warhammer", "Warhammer"),
        ("whip", "Whip"),
    ];
    let martial_ranged = [
        ("blowgun", "Blowgun"),
        ("hand-crossbow", "Hand Crossbow"),
        ("heavy-crossbow", "Heavy Crossbow"),
        ("longbow", "Longbow"),
    ];

    simple_melee
        .into_iter()
        .map(|(id, name)| ItemData::weapon(id, name, Simple))
        .chain(
            simple_ranged
                .into_iter()
                .map(|(id, name)| ItemData::ranged_weapon(id, name, Simple)),
        )
        .chain(
            martial_melee
                .into_iter()
                .map(|(id, name)| ItemData::weapon(id, name, Martial)),
        )
        .chain(
            martial_ranged
                .into_iter()
                .map(|(id, name)| ItemData::ranged_weapon(id, name, Martial)),
        )
        .collect()
}

fn gear() -> Vec<ItemData> {
    [
        ("arrow", "Arrow"),
        ("bolt", "Crossbow Bolt"),
        ("quiver", "Quiver"),
        ("alms-box", "Alms Box"),
        ("arcane-focus", "Arcane Focus"),
        ("backpack", "Backpack"),
        ("ball-bearings", "Ball Bearing"),
        ("bedroll", "Bedroll"),
        ("bell", "Bell"),
        ("blanket", "Blanket"),
        ("book", "Book of Lore"),
        ("candle", "Candle"),
        ("censer", "Censer"),
        ("common-clothes", "Common Clothes"),
        ("component-pouch", "Component Pouch"),
        ("crowbar", "Crowbar"),
        ("dark-common-clothes", "Dark Common Clothes"),
        ("dice-set", "Dice Set"),
        ("hammer", "Hammer"),
        ("hempen-rope", "Hempen Rope (1 foot)"),
        ("holy-symbol", "Holy Symbol"),
        ("hooded-lantern", "Hooded Lantern"),
        ("incense", "Block of Incense"),
        ("ink", "Bottle of Ink"),
        ("ink-pen", "Ink Pen"),
        ("insignia-of-rank", "Insignia of Rank"),
        ("little-bag-of-sand", "Little Bag of Sand"),
        ("mess-kit", "Mess Kit"),
        ("oil", "Flask of Oil"),
        ("parchment", "Sheet of Parchment"),
        ("piton", "Piton"),
        ("pouch", "Pouch"),
        ("prayer-book", "Prayer Book"),
        ("rations", "Rations (1 day)"),
        ("small-knife", "Small Knife"),
        ("spellbook", "Spellbook"),
        ("string", "String (1 foot)"),
        ("thieves-tools", "Thieves' Tools"),
        ("tinderbox", "Tinderbox"),
        ("torch", "Torch"),
        ("vestments", "Vestments"),
        ("waterskin", "Waterskin"),
    ]
    .into_iter()
    .map(|(id, name)| ItemData::gear(id, name))
    .collect()
}

fn packs() -> Vec<ItemData> {
    vec![
        ItemData::pack(
            "burglar-pack",
            "Burglar's Pack",
            [
                ItemGrant::one("backpack"),
                ItemGrant::new("ball-bearings", 1000),
                ItemGrant::new("string", 10),
                ItemGrant::one("bell"),
                ItemGrant::new("candle", 5),
                ItemGrant::one("crowbar"),
                ItemGrant::one("hammer"),
                ItemGrant::new("piton", 10),
                ItemGrant::one("hooded-lantern"),
                ItemGrant::new("oil", 2),
                ItemGrant::new("rations", 5),
                ItemGrant::one("tinderbox"),
                ItemGrant::one("waterskin"),
                ItemGrant::new("hempen-rope", 50),
            ],
        ),
        ItemData::pack(
            "dungeoneer-pack",
            "Dungeoneer's Pack",
            [
                ItemGrant::one("backpack"),
                ItemGrant::one("crowbar"),
                ItemGrant::one("hammer"),
                ItemGrant::new("piton", 10),
                ItemGrant::new("torch", 10),
                ItemGrant::one("tinderbox"),
                ItemGrant::new("rations", 10),
                ItemGrant::one("waterskin"),
                ItemGrant::new("hempen-rope", 50),
            ],
        ),
        ItemData::pack(
            "explorer-pack",
            "Explorer's Pack",
            [
                ItemGrant::one("backpack"),
                ItemGrant::one("bedroll"),
                ItemGrant::one("mess-kit"),
                ItemGrant::one("tinderbox"),
                ItemGrant::new("torch", 10),
                ItemGrant::new("rations", 10),
                ItemGrant::one("waterskin"),
                ItemGrant::new("hempen-rope", 50),
            ],
        ),
        ItemData::pack(
            "priest-pack",
            "Priest's Pack",
            [
                ItemGrant::one("backpack"),
                ItemGrant::one("blanket"),
                ItemGrant::new("candle", 10),
                ItemGrant::one("tinderbox"),
                ItemGrant::one("alms-box"),
                ItemGrant::new("incense", 2),
                ItemGrant::one("censer"),
                ItemGrant::one("vestments"),
                ItemGrant::new("rations", 2),
                ItemGrant::one("waterskin"),
            ],
        ),
        ItemData::pack(
            "scholar-pack",
            "Scholar's Pack",
            [
                ItemGrant::one("backpack"),
                ItemGrant::one("book"),
                ItemGrant::one("ink"),
                ItemGrant::one("ink-pen"),
                ItemGrant::new("parchment", 10),
                ItemGrant::one("little-bag-of-sand"),
                ItemGrant::one("small-knife"),
            ],
        ),
    ]
}
