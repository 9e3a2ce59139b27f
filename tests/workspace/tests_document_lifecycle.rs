//! Host-event driven lifecycle of document indices.

use std::path::Path;

use symdex::{
    DocumentId, DocumentIndexManager, FrozenInsertPolicy, IndexConfig, IndexError, IndexState,
    SharedDocumentIndexManager, SymbolInfo, SymbolKind,
};

use crate::helpers::source_fixtures::*;
use crate::helpers::symbol_assertions::*;

fn blur_id() -> DocumentId {
    DocumentId::from_relative_path(Path::new("./shaders/../blur.fx"))
}

#[test]
fn test_open_indexes_document_and_system_symbols() {
    let mut manager = manager();
    let index = manager.on_open(blur_id(), BLUR_SHADER).unwrap();

    assert_eq!(index.state(), IndexState::Frozen);
    assert_eq!(index.len(), 11);
    assert_eq!(get_symbol(index, "KERNEL_SIZE").value, Some(5));
    assert_eq!(get_symbol(index, "FLAGS").value, Some(16));
    assert_symbol_kind(index, "tint", SymbolKind::Variable);
    assert_symbol_kind(index, "strength", SymbolKind::Variable);
    assert_symbol_kind(index, "weight", SymbolKind::Function);
    assert_symbol_kind(index, "BlurPass", SymbolKind::Module);
    assert_symbol_kind(index, "saturate", SymbolKind::Function);
    assert_symbol_kind(index, "uniform", SymbolKind::Keyword);
    assert_index_consistent(index);

    assert_eq!(blur_id().as_str(), "blur.fx");
    assert!(manager.has(&DocumentId::from("blur.fx")));
}

#[test]
fn test_system_symbols_override_document_declarations() {
    let mut manager = manager();
    let text = "float saturate(float v);\n#define LERP 3\n";
    let index = manager.on_open("override.fx", text).unwrap();

    // Built-ins are merged after extraction, so they win the collision.
    let saturate = get_symbol(index, "saturate");
    assert_eq!(saturate.detail, "float saturate(float x)");
    assert_eq!(saturate.declaration_offset, 0);
    let lerp = get_symbol(index, "lerp");
    assert_eq!(lerp.kind, SymbolKind::Function);
    assert_eq!(lerp.value, None);
}

#[test]
fn test_change_replaces_index_wholesale() {
    let mut manager = manager();
    let id = blur_id();
    manager.on_open(id.clone(), BLUR_SHADER).unwrap();

    let index = manager.on_change(id.clone(), BLUR_SHADER_EDITED).unwrap();
    assert_eq!(index.len(), 8);
    assert_eq!(get_symbol(index, "kernel_size").value, Some(9));
    assert_symbol_absent(index, "strength");
    assert_symbol_absent(index, "weight");
    assert_symbol_absent(index, "BlurPass");
    assert_symbol_absent(index, "flags");
    assert_symbol_kind(index, "SharpenPass", SymbolKind::Module);
    assert_symbol_kind(index, "lerp", SymbolKind::Function);
    assert_eq!(completion_labels(index, "s"), vec!["SharpenPass", "saturate"]);
    assert_eq!(manager.document_count(), 1);
}

#[test]
fn test_documents_do_not_share_symbols() {
    let mut manager = manager();
    manager.on_open("blur.fx", BLUR_SHADER).unwrap();
    manager.on_open("sharpen.fx", BLUR_SHADER_EDITED).unwrap();

    let blur = manager.lookup(&DocumentId::from("blur.fx")).unwrap();
    let sharpen = manager.lookup(&DocumentId::from("sharpen.fx")).unwrap();
    assert_symbol_absent(blur, "SharpenPass");
    assert_symbol_absent(sharpen, "BlurPass");
    assert_eq!(get_symbol(blur, "KERNEL_SIZE").value, Some(5));
    assert_eq!(get_symbol(sharpen, "KERNEL_SIZE").value, Some(9));

    let mut documents: Vec<&str> = manager.documents().map(DocumentId::as_str).collect();
    documents.sort();
    assert_eq!(documents, vec!["blur.fx", "sharpen.fx"]);
}

#[test]
fn test_close_then_populate_is_a_fault() {
    let mut manager = manager();
    let id = blur_id();
    manager.on_open(id.clone(), BLUR_SHADER).unwrap();
    assert!(manager.on_close(&id));
    assert!(!manager.on_close(&id));
    assert!(manager.lookup(&id).is_none());

    assert_eq!(
        manager.register_and_populate(&id),
        Err(IndexError::MissingDocument { document: id.clone() })
    );
    assert!(!manager.has(&id));
}

#[test]
fn test_reset_keeps_only_system_symbols() {
    let mut manager = manager();
    let id = blur_id();
    manager.on_open(id.clone(), BLUR_SHADER).unwrap();
    manager.reset(&id).unwrap();

    let index = manager.lookup(&id).unwrap();
    assert_eq!(index.len(), 5);
    assert_eq!(index.state(), IndexState::Populated);
    assert_symbol_absent(index, "KERNEL_SIZE");
    assert_eq!(completion_labels(index, ""), vec![
        "float4", "lerp", "return", "saturate", "uniform"
    ]);
}

#[test]
fn test_manual_create_and_populate() {
    let mut manager = manager();
    let id = DocumentId::from("scratch.fx");
    manager
        .create(id.clone())
        .add(SymbolInfo::new("scratch", SymbolKind::Variable))
        .unwrap();
    manager.register_and_populate(&id).unwrap();

    let index = manager.lookup_mut(&id).unwrap();
    assert_eq!(index.len(), 6);
    index.freeze();
    assert!(index.add(SymbolInfo::new("late", SymbolKind::Text)).is_err());
}

#[test]
fn test_ignore_policy_tolerates_populating_frozen_index() {
    let config = IndexConfig::new().with_frozen_insert(FrozenInsertPolicy::Ignore);
    let mut manager = DocumentIndexManager::new(system_symbols(), shader_grammar(), config);
    let id = DocumentId::from("blur.fx");
    manager.on_open(id.clone(), "#define ONLY 1").unwrap();

    manager.register_and_populate(&id).unwrap();
    let index = manager.lookup(&id).unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(get_symbol(index, "only").value, Some(1));
}

#[test]
fn test_unfrozen_configuration() {
    let config = IndexConfig::new().with_freeze_after_populate(false);
    let mut manager = DocumentIndexManager::new(system_symbols(), shader_grammar(), config);
    let id = DocumentId::from("live.fx");
    manager.on_open(id.clone(), BLUR_SHADER).unwrap();

    let index = manager.lookup_mut(&id).unwrap();
    assert_eq!(index.state(), IndexState::Populated);
    index.add(SymbolInfo::new("extra", SymbolKind::Text)).unwrap();
    assert_eq!(index.len(), 12);
}

#[test]
fn test_shared_manager_handles_concurrent_documents() {
    let manager = SharedDocumentIndexManager::new(
        system_symbols(),
        shader_grammar(),
        IndexConfig::default(),
    );

    std::thread::scope(|scope| {
        for i in 0..8 {
            let manager = &manager;
            scope.spawn(move || {
                let text = if i % 2 == 0 { BLUR_SHADER } else { BLUR_SHADER_EDITED };
                manager.on_open(format!("doc{i}.fx"), text).unwrap();
            });
        }
    });

    assert_eq!(manager.document_count(), 8);
    for i in 0..8 {
        let id = DocumentId::from(format!("doc{i}.fx"));
        let expected = if i % 2 == 0 { 11 } else { 8 };
        assert_eq!(manager.with_index(&id, |index| index.len()), Some(expected));
    }

    let id = DocumentId::from("doc0.fx");
    manager.on_change(id.clone(), BLUR_SHADER_EDITED).unwrap();
    assert_eq!(
        manager.with_index(&id, |index| index.contains("SharpenPass")),
        Some(true)
    );
    assert!(manager.on_close(&id));
    assert_eq!(manager.with_index(&id, |index| index.len()), None);
}
