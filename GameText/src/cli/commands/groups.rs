//! CLI commands for scene group files

use std::path::Path;

use console::style;

use crate::subtitles::SceneGroups;

/// Print every group in display order with its scenes
pub fn show(path: &Path) -> anyhow::Result<()> {
    let mut groups = SceneGroups::new();
    groups.hydrate_from_asset_file(path)?;

    for (index, group) in groups.group_order().iter().enumerate() {
        if *group == groups.group_order_key {
            continue;
        }
        let scenes = groups.scenes_in(group);
        println!(
            "{} {} ({} scenes)",
            style(format!("[{index}]")).dim(),
            style(group).bold(),
            scenes.len()
        );
        for scene in scenes {
            println!("    {scene}");
        }
    }
    Ok(())
}

/// Print the group of a single scene
pub fn find(path: &Path, scene: &str) -> anyhow::Result<()> {
    let mut groups = SceneGroups::new();
    groups.hydrate_from_asset_file(path)?;
    println!("{}", groups.find_group(scene));
    Ok(())
}
