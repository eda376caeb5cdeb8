use sigtree_document::{Document, NodeId, SegmentError, WriteError};

fn children(doc: &Document, id: NodeId) -> Vec<NodeId> {
    doc.node(id).children().to_vec()
}

fn only_child(doc: &Document, id: NodeId) -> NodeId {
    let children = children(doc, id);
    assert_eq!(children.len(), 1, "expected exactly one child");
    children[0]
}

#[test]
fn repeated_writes_reuse_structure() {
    let mut doc = Document::new("Root");
    doc.write("A/B/C", '/', "1").unwrap();
    let nodes_after_first = doc.len();
    doc.write("A/B/C", '/', "2").unwrap();
    doc.write("A/B/C", '/', "3").unwrap();

    assert_eq!(doc.len(), nodes_after_first);
    let a = only_child(&doc, doc.root_id());
    let b = only_child(&doc, a);
    assert_eq!(doc.node(b).attribute("C"), Some("3"));
    assert_eq!(doc.node(b).attributes().len(), 1);
}

#[test]
fn discriminated_siblings_stay_distinct() {
    let mut doc = Document::new("Root");
    doc.write(r#"A x="1"/B/"#, '/', "one").unwrap();
    doc.write(r#"A x="2"/B/"#, '/', "two").unwrap();
    doc.write(r#"A x="1"/B/"#, '/', "uno").unwrap();

    let siblings = children(&doc, doc.root_id());
    assert_eq!(siblings.len(), 2);
    let values: Vec<_> = siblings
        .iter()
        .map(|&a| {
            let node = doc.node(a);
            let b = only_child(&doc, a);
            (node.attribute("x"), doc.node(b).text())
        })
        .collect();
    assert_eq!(
        values,
        vec![(Some("1"), Some("uno")), (Some("2"), Some("two"))]
    );
}

#[test]
fn structural_matching_ignores_case() {
    let mut doc = Document::new("Root");
    doc.write("Zone/Name", '/', "Lobby").unwrap();
    doc.write("zone/NAME", '/', "Atrium").unwrap();

    let zone = only_child(&doc, doc.root_id());
    let node = doc.node(zone);
    assert_eq!(node.name(), "Zone");
    assert_eq!(node.attributes().len(), 1);
    assert_eq!(node.attribute("Name"), Some("Atrium"));
    assert_eq!(node.attributes().get_index(0).map(|(k, _)| k.as_str()), Some("Name"));
}

#[test]
fn complex_matching_ignores_case_of_value() {
    let mut doc = Document::new("Root");
    doc.write(r#"Room name="Lobby"/Temp/"#, '/', "20").unwrap();
    doc.write(r#"ROOM NAME="lobby"/Temp/"#, '/', "21").unwrap();

    let room = only_child(&doc, doc.root_id());
    let temp = only_child(&doc, room);
    assert_eq!(doc.node(temp).text(), Some("21"));
}

#[test]
fn attribute_versus_element_text() {
    let mut doc = Document::new("Root");
    doc.write("Room/Temp", '/', "20").unwrap();
    doc.write("Room/Temp/", '/', "21").unwrap();

    let room = only_child(&doc, doc.root_id());
    assert_eq!(doc.node(room).attribute("Temp"), Some("20"));
    let temp = only_child(&doc, room);
    assert_eq!(doc.node(temp).name(), "Temp");
    assert_eq!(doc.node(temp).text(), Some("21"));
    assert!(doc.node(temp).attributes().is_empty());
}

#[test]
fn rewriting_attribute_keeps_order() {
    let mut doc = Document::new("Root");
    doc.write("Room/A", '/', "1").unwrap();
    doc.write("Room/B", '/', "2").unwrap();
    doc.write("Room/C", '/', "3").unwrap();
    doc.write("Room/b", '/', "20").unwrap();

    let room = only_child(&doc, doc.root_id());
    let attributes: Vec<_> = doc
        .node(room)
        .attributes()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(attributes, vec![("A", "1"), ("B", "20"), ("C", "3")]);
}

#[test]
fn malformed_segment_leaves_tree_unchanged() {
    let mut doc = Document::new("Root");
    doc.write("Existing/Value/", '/', "kept").unwrap();
    let before = doc.clone();

    let result = doc.write("New/A b/C/", '/', "x");
    assert_eq!(
        result,
        Err(WriteError::MalformedSegment {
            segment: "A b".to_string(),
            kind: SegmentError::MissingDiscriminator,
        })
    );
    assert_eq!(doc, before);
    assert_eq!(doc.len(), before.len());
}

#[test]
fn invalid_attribute_name_leaves_tree_unchanged() {
    let mut doc = Document::new("Root");
    let before = doc.clone();

    let result = doc.write("New/Branch/1bad", '/', "x");
    assert!(matches!(result, Err(WriteError::MalformedSegment { .. })));
    assert_eq!(doc, before);
}

#[test]
fn end_to_end_devices() {
    let mut doc = Document::new("Root");
    doc.write(r#"Devices/Light id="5"/Brightness/"#, '/', "80")
        .unwrap();

    let devices = only_child(&doc, doc.root_id());
    assert_eq!(doc.node(devices).name(), "Devices");
    let light = only_child(&doc, devices);
    assert_eq!(doc.node(light).name(), "Light");
    assert_eq!(doc.node(light).attribute("id"), Some("5"));
    let brightness = only_child(&doc, light);
    assert_eq!(doc.node(brightness).name(), "Brightness");
    assert_eq!(doc.node(brightness).text(), Some("80"));

    doc.write(r#"Devices/Light id="5"/Power/"#, '/', "On").unwrap();

    assert_eq!(only_child(&doc, doc.root_id()), devices);
    assert_eq!(only_child(&doc, devices), light);
    let light_children = children(&doc, light);
    assert_eq!(light_children.len(), 2);
    assert_eq!(light_children[0], brightness);
    assert_eq!(doc.node(brightness).text(), Some("80"));
    let power = doc.node(light_children[1]);
    assert_eq!(power.name(), "Power");
    assert_eq!(power.text(), Some("On"));
}

#[test]
fn discriminated_final_segment_writes_text() {
    let mut doc = Document::new("Root");
    let light = doc.write(r#"Devices/Light id="7""#, '/', "Hall").unwrap();

    let node = doc.node(light);
    assert_eq!(node.name(), "Light");
    assert_eq!(node.attribute("id"), Some("7"));
    assert_eq!(node.text(), Some("Hall"));
}

#[test]
fn custom_delimiter() {
    let mut doc = Document::new("Root");
    doc.write("Audio.Zone 1.Volume", '.', "40").unwrap_err();
    doc.write(r#"Audio.Zone id="1".Volume"#, '.', "40").unwrap();

    let audio = only_child(&doc, doc.root_id());
    let zone = only_child(&doc, audio);
    assert_eq!(doc.node(zone).attribute("Volume"), Some("40"));
}

#[test]
fn empty_path_writes_root_text() {
    let mut doc = Document::new("Root");
    doc.write("Child/", '/', "c").unwrap();

    let written = doc.write("", '/', "top").unwrap();
    assert_eq!(written, doc.root_id());
    assert_eq!(doc.root().text(), Some("top"));
    assert_eq!(doc.len(), 2);
}
