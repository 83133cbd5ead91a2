//! End-to-end test: load a content directory, then run the display
//! transform over items the way a host render pass would.

use std::fs;
use std::path::Path;

use reforge_content::ContentFactory;
use reforge_core::{ItemKind, ItemStack, PlayerView, ReforgeDisplay, RenderProps, Text};

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("display.toml"),
        r#"
line-prefix = "§r"

[reforge]
show-reforgable = true
reforgable-suffix = ["&8⚒ Reforgable"]
display-in-lore = true
reforged-prefix = ["&8[&6%reforge%&8]"]
display-in-name = true
"#,
    )
    .unwrap();

    fs::write(
        dir.join("targets.ron"),
        r#"(
            targets: [
                (id: "melee", kinds: [Sword, Axe, Trident]),
                (id: "armor", kinds: [Helmet, Chestplate, Leggings, Boots]),
            ],
        )"#,
    )
    .unwrap();

    fs::write(
        dir.join("reforges.ron"),
        r#"(
            reforges: [
                (
                    id: "legendary",
                    name: "Legendary",
                    description: ["&7Stronger strikes"],
                    name_prefix: "&6Legendary ",
                    targets: ["melee"],
                    requirements: [
                        (
                            check: MinLevel(30),
                            not_met_lines: ["&cRequires level 30"],
                        ),
                    ],
                ),
            ],
        )"#,
    )
    .unwrap();

    fs::write(
        dir.join("stones.ron"),
        r#"(
            stones: [
                (
                    id: "legendary-stone",
                    display: (
                        name: "&6Legendary Stone",
                        lore: ["&7Price: %price%"],
                    ),
                    price: Some((amount: 50000.0, display: "&6$%amount%")),
                ),
            ],
        )"#,
    )
    .unwrap();
}

#[test]
fn loaded_content_drives_a_full_render_pass() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let content = ContentFactory::new(dir.path()).load_all().unwrap();
    let display = ReforgeDisplay::new(content.env());

    // A reforged sword viewed by a player below the level requirement.
    let mut sword = ItemStack::new(ItemKind::Sword, Text::plain("Cloudy Sword"));
    sword.set_reforge_id("legendary");
    let player = PlayerView::new("steve", 10);

    display.display(&mut sword, Some(&player), RenderProps::default());

    assert_eq!(
        sword.lore,
        vec![
            "§r§8[§6Legendary§8]",
            "§r§7Stronger strikes",
            "§r",
            "§r§cRequires level 30",
        ]
    );
    assert_eq!(sword.display_name.to_plain(), "Legendary Cloudy Sword");

    // Stripping the reforge reverts the name exactly.
    display.revert(&mut sword);
    assert_eq!(sword.display_name, Text::plain("Cloudy Sword"));

    // A bare sword advertises reforgability outside GUIs only.
    let mut bare = ItemStack::new(ItemKind::Sword, Text::plain("Sword"));
    display.display(&mut bare, None, RenderProps::default());
    assert_eq!(bare.lore, vec!["§r§8⚒ Reforgable"]);

    let mut bare_gui = ItemStack::new(ItemKind::Sword, Text::plain("Sword"));
    display.display(&mut bare_gui, None, RenderProps { in_gui: true });
    assert!(bare_gui.lore.is_empty());

    // A stone item renders its own name and priced lore.
    let mut stone = ItemStack::new(ItemKind::Other, Text::plain("Stone"));
    stone.set_stone_id("legendary-stone");
    display.display(&mut stone, Some(&player), RenderProps::default());
    assert_eq!(stone.lore, vec!["§r§7Price: §6$50,000"]);
    assert_eq!(stone.display_name, Text::from_markup("&6Legendary Stone"));
}

#[test]
fn per_catalog_loaders_work_in_isolation() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let factory = ContentFactory::new(dir.path());

    assert!(factory.load_config().is_ok());
    assert_eq!(factory.load_targets().unwrap().len(), 2);
    assert_eq!(factory.load_reforges().unwrap().len(), 1);
    assert_eq!(factory.load_stones().unwrap().len(), 1);
}
