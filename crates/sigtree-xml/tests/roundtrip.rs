use sigtree_document::Document;
use sigtree_xml::{Config, from_str, load, save, to_string};

fn populated() -> Document {
    let mut doc = Document::new("Config");
    doc.write("Version", '/', "2").unwrap();
    doc.write(r#"Rooms/Room name="Lobby"/Temp/"#, '/', "21.5").unwrap();
    doc.write(r#"Rooms/Room name="Lobby"/Temp/Unit"#, '/', "C").unwrap();
    doc.write(r#"Rooms/Room name="Lobby""#, '/', "Main lobby").unwrap();
    doc.write(r#"Rooms/Room name="Hall"/Scene/"#, '/', "Evening <warm>").unwrap();
    doc.write(r#"Rooms/Room name="Hall"/Label/"#, '/', "").unwrap();
    doc.write("Rooms/Note/", '/', "  padded  ").unwrap();
    doc
}

#[test]
fn roundtrip_through_string() {
    let doc = populated();
    for config in [Config::default(), Config::compact()] {
        let xml = to_string(&doc, &config).unwrap();
        let reloaded = from_str(&xml).unwrap();
        assert_eq!(reloaded, doc, "round trip failed for {config:?}:\n{xml}");
    }
}

#[test]
fn roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.xml");
    let doc = populated();

    save(&doc, &path, &Config::default()).unwrap();
    let reloaded = load(&path).unwrap();
    assert_eq!(reloaded, doc);

    // Saving again over the existing file replaces it completely.
    let mut smaller = Document::new("Config");
    smaller.write("Only/", '/', "one").unwrap();
    save(&smaller, &path, &Config::default()).unwrap();
    assert_eq!(load(&path).unwrap(), smaller);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("config.xml");
    assert!(save(&populated(), &path, &Config::default()).is_err());
    assert!(!path.exists());
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load(&dir.path().join("nope.xml"));
    assert!(matches!(result, Err(sigtree_xml::XmlError::Io(_))));
}

fn blank_text_beside_children() -> Document {
    let mut doc = Document::new("Root");
    doc.write("Spaced/Child/", '/', "x").unwrap();
    doc.write("Spaced/", '/', "   ").unwrap();
    doc.write("Blank/Child/", '/', "y").unwrap();
    doc.write("Blank/", '/', "").unwrap();
    doc.write("Bare/Child/", '/', "z").unwrap();
    doc
}

#[test]
fn blank_text_beside_children_survives() {
    let doc = blank_text_beside_children();
    for config in [Config::default(), Config::compact()] {
        let xml = to_string(&doc, &config).unwrap();
        let reloaded = from_str(&xml).unwrap();
        assert_eq!(reloaded, doc, "round trip failed for {config:?}:\n{xml}");

        let spaced = reloaded.find_path("Spaced/", '/').unwrap().unwrap();
        assert_eq!(reloaded.node(spaced).text(), Some("   "));
        let blank = reloaded.find_path("Blank/", '/').unwrap().unwrap();
        assert_eq!(reloaded.node(blank).text(), Some(""));
        let bare = reloaded.find_path("Bare/", '/').unwrap().unwrap();
        assert_eq!(reloaded.node(bare).text(), None);
    }
}
