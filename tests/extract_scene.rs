use imagine3d::{extract_between, extract_scene_code, has_scene_output};

#[test]
fn extracts_content_between_tags() {
    let input = "hello <threejs_output>  const x = 1;  </threejs_output> bye";
    assert_eq!(extract_scene_code(input), "const x = 1;");
}

#[test]
fn returns_input_unchanged_without_tags() {
    assert_eq!(extract_scene_code("no tags here"), "no tags here");
}

#[test]
fn absent_tags_do_not_trim() {
    let input = "  padded, no tags  ";
    assert_eq!(extract_scene_code(input), input);
}

#[test]
fn unterminated_output_runs_to_end_of_text() {
    assert_eq!(
        extract_scene_code("<threejs_output>unterminated code"),
        "unterminated code"
    );
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(extract_scene_code(""), "");
}

#[test]
fn adjacent_tags_yield_empty_script() {
    assert_eq!(extract_scene_code("<threejs_output></threejs_output>"), "");
}

#[test]
fn only_first_start_tag_is_considered() {
    let input = "<threejs_output>first</threejs_output><threejs_output>second</threejs_output>";
    assert_eq!(extract_scene_code(input), "first");
}

#[test]
fn end_tag_alone_is_not_a_match() {
    let input = "code </threejs_output> tail";
    assert_eq!(extract_scene_code(input), input);
}

#[test]
fn skips_planning_section_before_the_script() {
    let input = "<model_planning>1. plan the scene</model_planning>\n<threejs_output>\nconst scene = new THREE.Scene();\n</threejs_output>\ntrailing prose";
    assert_eq!(extract_scene_code(input), "const scene = new THREE.Scene();");
}

#[test]
fn generalizes_to_any_delimiter_pair() {
    assert_eq!(extract_between("a <b>x</b> c", "<b>", "</b>"), "x");
    assert_eq!(extract_between("no markers", "<b>", "</b>"), "no markers");
    assert_eq!(extract_between("<b>  open ended", "<b>", "</b>"), "open ended");
}

#[test]
fn predicate_requires_both_tags() {
    assert!(has_scene_output("<threejs_output>x</threejs_output>"));
    assert!(!has_scene_output("<threejs_output>x"));
    assert!(!has_scene_output("x </threejs_output>"));
    assert!(!has_scene_output("nothing at all"));
}

#[test]
fn predicate_ignores_tag_order() {
    assert!(has_scene_output("</threejs_output> before <threejs_output>"));
}
