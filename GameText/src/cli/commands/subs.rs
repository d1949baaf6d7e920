//! CLI commands for subtitle documents

use console::style;

use super::SubtitleSource;
use crate::project::SubtitleDefinitionFile;
use crate::subtitles::{SceneGroups, SubtitleDatabase, SubtitleScene, parse_subtitle_json};

/// Load the documents named on the command line into a fresh database
fn load(source: &SubtitleSource) -> anyhow::Result<SubtitleDatabase> {
    let mut db = SubtitleDatabase::new();
    if let Some(path) = &source.groups {
        let mut groups = SceneGroups::new();
        groups.hydrate_from_asset_file(path)?;
        db.set_scene_groups(groups);
    }

    let mut def = SubtitleDefinitionFile::json(&source.lines, &source.meta, source.lang);
    if let (Some(lines_base), Some(meta_base)) = (&source.lines_base, &source.meta_base) {
        def = def.with_base(lines_base, meta_base);
    }
    parse_subtitle_json(&mut db, &def)?;
    db.assign_sorting_groups();
    Ok(db)
}

/// List scenes, grouped and ordered by scene group when a groups file is given
pub fn list(source: &SubtitleSource) -> anyhow::Result<()> {
    let db = load(source)?;
    let Some(bank) = db.bank_by_id(source.lang) else {
        anyhow::bail!("no subtitle bank for language {}", source.lang);
    };

    let mut scenes: Vec<&SubtitleScene> = bank.scenes().values().collect();
    // Ungrouped scenes last, then by group position, then by name
    scenes.sort_by(|a, b| {
        let position = |s: &SubtitleScene| s.sorting_group_index.unwrap_or(usize::MAX);
        position(*a)
            .cmp(&position(*b))
            .then_with(|| a.name().cmp(b.name()))
    });

    let mut current_group = None;
    for scene in scenes {
        if db.scene_groups().is_some() && current_group != Some(scene.sorting_group.as_str()) {
            current_group = Some(scene.sorting_group.as_str());
            println!("{}", style(&scene.sorting_group).bold());
        }
        println!(
            "  {:<32} {:<10} {:>3} lines",
            scene.name(),
            scene.kind.display_name(),
            scene.lines().len()
        );
    }
    Ok(())
}

/// Print every line of a scene with frame and speaker
pub fn show(source: &SubtitleSource, scene_name: &str) -> anyhow::Result<()> {
    let db = load(source)?;
    let Some(bank) = db.bank_by_id(source.lang) else {
        anyhow::bail!("no subtitle bank for language {}", source.lang);
    };
    let scene = bank.scene_by_name(scene_name)?;

    println!(
        "{} {} ({}, id {:#x})",
        style("Scene:").bold(),
        scene.name(),
        scene.kind.display_name(),
        scene.id
    );
    for line in scene.lines() {
        if line.is_clear() {
            println!("{:>6}  {}", line.frame, style("<clear>").dim());
            continue;
        }
        let offscreen = if line.offscreen { " (offscreen)" } else { "" };
        println!(
            "{:>6}  {}{}: {}",
            line.frame,
            style(&line.speaker).cyan(),
            offscreen,
            line.text.replace('\n', "\\n")
        );
    }
    Ok(())
}
