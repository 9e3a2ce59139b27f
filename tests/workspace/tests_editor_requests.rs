//! Completion, hover, goto, and references against a managed document.

use symdex::ide::{
    completions, completions_at, find_references, find_references_at, goto_declaration,
    goto_definition, hover,
};
use symdex::base::Position;
use symdex::{DocumentId, DocumentIndexManager};

use crate::helpers::source_fixtures::*;

fn open_blur() -> (DocumentIndexManager, DocumentId) {
    let mut manager = manager();
    let id = DocumentId::from("blur.fx");
    manager.on_open(id.clone(), BLUR_SHADER).unwrap();
    (manager, id)
}

fn offset_of(needle: &str) -> usize {
    BLUR_SHADER.find(needle).unwrap()
}

#[test]
fn test_completion_list_puts_document_symbols_first() {
    let (manager, id) = open_blur();
    let index = manager.lookup(&id).unwrap();
    let labels: Vec<_> = completions(index, "")
        .into_iter()
        .map(|item| item.label.to_string())
        .collect();
    assert_eq!(
        labels,
        vec![
            "BlurPass",
            "FLAGS",
            "KERNEL_SIZE",
            "strength",
            "tint",
            "weight",
            "float4",
            "lerp",
            "saturate",
            "return",
            "uniform",
        ]
    );
}

#[test]
fn test_completion_while_typing() {
    let (manager, id) = open_blur();
    let index = manager.lookup(&id).unwrap();
    let typing = "float x = st";
    let items = completions_at(index, typing, typing.len());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "strength");
    assert_eq!(items[0].detail.as_deref(), Some("uniform float strength"));

    let items = completions_at(index, "SAT", 3);
    assert_eq!(items[0].label, "saturate");
    assert_eq!(
        items[0].documentation.as_deref(),
        Some("Clamps `x` to the range [0, 1].")
    );
}

#[test]
fn test_hover_on_constant_shows_value() {
    let (manager, id) = open_blur();
    let index = manager.lookup(&id).unwrap();
    let result = hover(index, BLUR_SHADER, offset_of("FLAGS") + 2).unwrap();
    assert_eq!(result.contents, "```\n#define FLAGS 0x10\n```\n\nValue: `16`");
    assert_eq!(result.start, Position::new(1, 8));
    assert_eq!(result.end, Position::new(1, 13));
}

#[test]
fn test_hover_on_builtin_shows_documentation() {
    let (manager, id) = open_blur();
    let index = manager.lookup(&id).unwrap();
    let result = hover(index, BLUR_SHADER, offset_of("lerp(")).unwrap();
    assert_eq!(
        result.contents,
        "```\nfloat lerp(float a, float b, float t)\n```\n\nLinear interpolation."
    );
    assert!(hover(index, BLUR_SHADER, offset_of("x);")).is_none());
}

#[test]
fn test_goto_declaration_lands_on_last_declaration() {
    let (manager, id) = open_blur();
    let target = goto_declaration(&manager, &id, BLUR_SHADER, offset_of("weight(0)")).unwrap();
    assert_eq!(target.offset, BLUR_SHADER.rfind("float weight").unwrap());
    assert_eq!(target.position, Position::new(11, 0));
    assert_eq!(target.end, None);
}

#[test]
fn test_goto_definition_spans_stage_body() {
    let (manager, id) = open_blur();
    let target = goto_definition(&manager, &id, BLUR_SHADER, offset_of("BlurPass")).unwrap();
    assert_eq!(target.position, Position::new(7, 0));
    assert_eq!(target.end, Some(Position::new(9, 1)));

    // Without a recorded definition the declaration is used.
    let tint = goto_definition(&manager, &id, BLUR_SHADER, offset_of("tint, ")).unwrap();
    assert_eq!(tint.position, Position::new(2, 0));
}

#[test]
fn test_goto_builtin_has_no_target() {
    let (manager, id) = open_blur();
    let offset = offset_of("saturate(x)");
    assert!(goto_declaration(&manager, &id, BLUR_SHADER, offset).is_none());
    assert!(goto_definition(&manager, &id, BLUR_SHADER, offset).is_none());
    let closed = DocumentId::from("closed.fx");
    assert!(goto_definition(&manager, &closed, BLUR_SHADER, offset).is_none());
}

#[test]
fn test_references_across_document() {
    let tint: Vec<u32> = find_references(BLUR_SHADER, "tint")
        .iter()
        .map(|r| r.position.line)
        .collect();
    assert_eq!(tint, vec![2, 8, 8]);

    let weight = find_references_at(BLUR_SHADER, offset_of("weight(0)"));
    assert_eq!(weight.len(), 3);
    assert!(weight.iter().all(|r| r.end - r.start == "weight".len()));
    assert!(find_references(BLUR_SHADER, "KERNEL").is_empty());
}
