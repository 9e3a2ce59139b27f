//! Property-style tests for SymbolIndex.

use rstest::rstest;
use symdex::{
    FrozenInsertPolicy, IndexConfig, IndexError, IndexState, SymbolIndex, SymbolInfo, SymbolKind,
};

use crate::helpers::symbol_assertions::*;

const LABELS: &[&str] = &[
    "tex2D",
    "tex2Dlod",
    "tex2Dproj",
    "tex3D",
    "texCUBE",
    "float",
    "float2",
    "float3",
    "float4",
    "float4x4",
    "floor",
    "fmod",
    "frac",
    "half",
    "mul",
    "normalize",
    "pow",
    "reflect",
    "refract",
    "rsqrt",
    "sampler2D",
    "saturate",
    "sin",
    "sincos",
    "sinh",
    "smoothstep",
    "step",
    "tan",
];

fn populated() -> SymbolIndex {
    let mut index = SymbolIndex::new();
    for (i, label) in LABELS.iter().enumerate() {
        index
            .add(SymbolInfo::new(*label, SymbolKind::Function).with_declaration_offset(i * 10))
            .unwrap();
    }
    index
}

fn populated_and_frozen(frozen: bool) -> SymbolIndex {
    let mut index = populated();
    if frozen {
        index.freeze();
    }
    index
}

#[rstest]
fn test_round_trip(#[values(false, true)] frozen: bool) {
    let index = populated_and_frozen(frozen);
    for (i, label) in LABELS.iter().enumerate() {
        let expected = SymbolInfo::new(*label, SymbolKind::Function).with_declaration_offset(i * 10);
        assert_eq!(index.get_symbol(&index.normalize(label)), Some(&expected));
        assert!(index.contains(label));
        assert!(index.contains(&label.to_uppercase()));
    }
    assert_index_consistent(&index);
}

#[rstest]
fn test_prefix_completeness(#[values(false, true)] frozen: bool) {
    let index = populated_and_frozen(frozen);
    for label in LABELS {
        let key = index.normalize(label);
        for (end, _) in key.char_indices().chain(std::iter::once((key.len(), ' '))) {
            let prefix = &key[..end];
            assert!(
                completion_labels(&index, prefix).contains(&label.to_string()),
                "{label} missing for prefix {prefix:?}"
            );
        }
    }
}

#[rstest]
#[case("tex2d", &["tex2D", "tex2Dlod", "tex2Dproj"])]
#[case("TEX", &["tex2D", "tex2Dlod", "tex2Dproj", "tex3D", "texCUBE"])]
#[case("sin", &["sin", "sincos", "sinh"])]
#[case("float4", &["float4", "float4x4"])]
#[case("refr", &["refract"])]
#[case("q", &[])]
#[case("tan2", &[])]
fn test_completions_match_naive_filter(#[case] prefix: &str, #[case] expected: &[&str]) {
    for frozen in [false, true] {
        let index = populated_and_frozen(frozen);
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(completion_labels(&index, prefix), expected, "frozen={frozen}");

        // Cross-check against a linear scan over every label.
        let normalized = index.normalize(prefix);
        let naive = LABELS
            .iter()
            .filter(|label| index.normalize(label).starts_with(normalized.as_str()))
            .count();
        assert_eq!(index.get_all_completions(prefix).len(), naive);
    }
}

#[test]
fn test_empty_prefix_totality() {
    let index = populated_and_frozen(true);
    let mut labels = completion_labels(&index, "");
    let mut expected: Vec<String> = LABELS.iter().map(|s| s.to_string()).collect();
    labels.sort();
    expected.sort();
    assert_eq!(labels, expected);
}

#[test]
fn test_frozen_completion_order_is_key_order() {
    let index = populated_and_frozen(true);
    let keys: Vec<String> = index
        .get_all_completions("f")
        .iter()
        .map(|s| index.normalize(&s.label).to_string())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_overwrite_with_mixed_case() {
    let mut index = populated();
    index
        .add(SymbolInfo::new("SATURATE", SymbolKind::Keyword).with_detail("override"))
        .unwrap();
    assert_eq!(index.len(), LABELS.len());
    assert_symbol_kind(&index, "saturate", SymbolKind::Keyword);
    assert_eq!(completion_labels(&index, "satur"), vec!["SATURATE"]);
    assert_index_consistent(&index);
}

#[rstest]
#[case(FrozenInsertPolicy::Reject)]
#[case(FrozenInsertPolicy::Ignore)]
fn test_frozen_policies(#[case] policy: FrozenInsertPolicy) {
    let config = IndexConfig::new().with_frozen_insert(policy);
    let mut index = SymbolIndex::with_config(&config);
    index.add(SymbolInfo::new("before", SymbolKind::Text)).unwrap();
    index.freeze();
    assert_eq!(index.state(), IndexState::Frozen);

    let result = index.add(SymbolInfo::new("after", SymbolKind::Text));
    match policy {
        FrozenInsertPolicy::Reject => {
            assert_eq!(result, Err(IndexError::Frozen { key: "after".into() }))
        }
        FrozenInsertPolicy::Ignore => assert_eq!(result, Ok(())),
    }
    assert_symbol_absent(&index, "after");
    assert_eq!(index.len(), 1);
}
