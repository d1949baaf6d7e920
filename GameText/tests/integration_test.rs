use gametext::prelude::*;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_text_database_scenario() {
    let mut db = TextDatabase::new();
    db.add_bank("main", TextBank::new(0)).unwrap().set_line(5, "Hello");

    let err = db.add_bank("main", TextBank::new(0)).unwrap_err();
    assert!(err.is_duplicate_key());
    assert!(db.bank_by_id("main", 1).is_none());
    assert_eq!(db.bank_by_id("main", 0).unwrap().line(5).unwrap(), "Hello");
}

#[test]
fn test_scene_line_order() {
    let mut scene = SubtitleScene::new("intro", SceneKind::Movie);
    scene.add_line(30, "a", "", false);
    scene.add_line(10, "b", "", false);
    scene.add_line(20, "c", "", false);

    let order: Vec<(i32, &str)> = scene
        .lines()
        .iter()
        .map(|l| (l.frame, l.text.as_str()))
        .collect();
    assert_eq!(order, vec![(10, "b"), (20, "c"), (30, "a")]);
}

#[test]
fn test_scene_order_matches_stable_sort() {
    // Deterministic pseudo-random frames with many ties
    let mut scene = SubtitleScene::new("stress", SceneKind::Movie);
    let mut inserted = Vec::new();
    let mut seed: u32 = 7;
    for i in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        let frame = ((seed >> 16) % 16) as i32;
        if i % 5 == 0 {
            scene.add_clear_entry(frame);
            inserted.push(SubtitleLine::clear(frame));
        } else {
            scene.add_line(frame, format!("{i}"), "", false);
            inserted.push(SubtitleLine::new(frame, format!("{i}"), "", false));
        }
    }

    let mut expected = inserted.clone();
    expected.sort_by_key(|l| l.frame);
    assert_eq!(scene.lines(), expected.as_slice());

    // Every clear entry sits exactly where a stable sort puts it
    let clear_positions = |lines: &[SubtitleLine]| -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_clear())
            .map(|(i, _)| i)
            .collect()
    };
    assert_eq!(clear_positions(scene.lines()), clear_positions(&expected));
    assert_eq!(clear_positions(scene.lines()).len(), 40);
}

#[test]
fn test_scene_groups_scenario() {
    let mut groups = SceneGroups::new();
    assert_eq!(groups.group_order(), ["_groups"]);

    groups.add_scene("intro_movies", "intro");
    groups.add_scene("intro_movies", "intro");
    assert_eq!(groups.group_order(), ["_groups", "intro_movies"]);
    assert_eq!(groups.find_group_index("intro_movies"), Some(1));
    assert_eq!(groups.scenes_in("intro_movies"), ["intro"]);

    groups.remove_scene("intro_movies", "intro");
    assert_eq!(groups.find_group("intro"), "uncategorized");
}

#[test]
fn test_load_subtitle_project_files() {
    let dir = tempdir().unwrap();
    let lines_en = write(
        dir.path(),
        "lines_en.json",
        r#"{
            "speakers": { "sage": "Samos", "keira": "Keira" },
            "cutscenes": { "sage-intro": ["Wake up!", "Hurry."], "keira-intro": ["Hi!"] },
            "hints": { "fish-hint": ["Catch the fish!"] }
        }"#,
    );
    let meta_en = write(
        dir.path(),
        "meta_en.json",
        r#"{
            "cutscenes": {
                "sage-intro": [
                    { "frame": 10, "speaker": "sage" },
                    { "frame": 80, "clear": true },
                    { "frame": 95, "speaker": "sage", "offscreen": true }
                ],
                "keira-intro": [{ "frame": 0, "speaker": "keira" }]
            },
            "hints": { "fish-hint": { "id": "2a1", "lines": [{ "frame": 0, "speaker": "keira" }] } }
        }"#,
    );
    let lines_de = write(
        dir.path(),
        "lines_de.json",
        r#"{
            "speakers": { "sage": "Samos der Weise" },
            "cutscenes": { "sage-intro": ["Aufwachen!", "Beeil dich."] }
        }"#,
    );
    let meta_de = write(dir.path(), "meta_de.json", r#"{ "cutscenes": {} }"#);
    let groups_path = write(
        dir.path(),
        "groups.json",
        r#"{
            "_groups": ["village1", "hints"],
            "village1": ["sage-intro", "keira-intro"],
            "hints": ["fish-hint"]
        }"#,
    );

    let mut groups = SceneGroups::new();
    groups.hydrate_from_asset_file(&groups_path).unwrap();
    let mut db = SubtitleDatabase::with_scene_groups(groups);

    let en = SubtitleDefinitionFile::json(&lines_en, &meta_en, 0);
    assert_eq!(parse_subtitle_json(&mut db, &en).unwrap(), 3);

    let de = SubtitleDefinitionFile::json(&lines_de, &meta_de, 3).with_base(&lines_en, &meta_en);
    assert_eq!(parse_subtitle_json(&mut db, &de).unwrap(), 3);

    db.assign_sorting_groups();

    let bank_de = db.bank_by_id(3).unwrap();
    assert_eq!(bank_de.source_path, lines_de);
    let intro = bank_de.scene_by_name("sage-intro").unwrap();
    assert_eq!(intro.lines()[0].text, "Aufwachen!");
    assert_eq!(intro.lines()[0].speaker, "Samos der Weise");
    assert_eq!(intro.sorting_group, "village1");
    assert_eq!(intro.sorting_group_index, Some(1));

    // Scenes missing from the German documents come from the base language
    let keira = bank_de.scene_by_name("keira-intro").unwrap();
    assert_eq!(keira.lines()[0].text, "Hi!");
    assert_eq!(keira.lines()[0].speaker, "Keira");

    let hint = bank_de.scene_by_name("fish-hint").unwrap();
    assert_eq!(hint.kind, SceneKind::Hint);
    assert_eq!(hint.sorting_group, "hints");
    assert_eq!(hint.sorting_group_index, Some(2));

    // Loading the same language again is rejected without touching the bank
    let err = parse_subtitle_json(&mut db, &en).unwrap_err();
    assert!(err.is_duplicate_key());
    assert_eq!(db.bank_by_id(0).unwrap().scenes().len(), 3);
}

#[test]
fn test_exported_documents_reload() {
    let mut scene = SubtitleScene::new("sage-intro", SceneKind::Movie);
    scene.add_line(10, "Wake up!", "Samos", false);
    scene.add_clear_entry(60);
    scene.add_line(90, "Hurry.", "Samos", true);

    let mut bank = SubtitleBank::new(0);
    bank.add_scene(scene).unwrap();
    bank.add_scene(SubtitleScene::new("lost-hint", SceneKind::HintNamed))
        .unwrap()
        .add_line(0, "Over here!", "Keira", true);

    let (lines, meta) = bank.to_documents().unwrap();

    let dir = tempdir().unwrap();
    let lines_path = write(dir.path(), "lines.json", &serde_json::to_string(&lines).unwrap());
    let meta_path = write(dir.path(), "meta.json", &serde_json::to_string(&meta).unwrap());

    let mut db = SubtitleDatabase::new();
    parse_subtitle_json(&mut db, &SubtitleDefinitionFile::json(&lines_path, &meta_path, 0))
        .unwrap();

    assert_eq!(db.bank_by_id(0).unwrap().scenes(), bank.scenes());
}

#[test]
fn test_text_file_loading() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "text_fr.json",
        r#"{ "0x100": "APPUYEZ SUR START", "0x101": "CHARGER" }"#,
    );

    let mut db = TextDatabase::new();
    let info = TextDefinitionFile::json(&path, 1).with_group("menu");
    assert_eq!(read_text_json(&mut db, &info).unwrap(), 2);

    let bank = db.bank_by_id("menu", 1).unwrap();
    assert_eq!(bank.line(0x101).unwrap(), "CHARGER");
    assert!(bank.line(0x102).unwrap_err().is_not_found());

    let goal = TextDefinitionFile {
        format: SourceFormat::Goal,
        ..info
    };
    assert!(matches!(
        read_text_json(&mut db, &goal),
        Err(Error::UnsupportedFormat(_))
    ));
}
