use std::collections::HashSet;

use graphtint::{AttrValue, AttributeColorizer, EncodingError, PaletteKind, PaletteRegistry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn ints(range: std::ops::Range<i64>) -> Vec<AttrValue> {
    range.map(AttrValue::Int).collect()
}

#[test]
fn test_letters_viridis_one_color_each() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = vec!["b".into(), "a".into(), "c".into(), "a".into()];

    let map = colorizer.build(&values, "viridis", -1).unwrap();
    assert_eq!(map.distinct_colors(), 3);
    assert!(!map.is_binned());

    let labels: Vec<&str> = map.legend().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);

    let a = map.color_for(&"a".into()).unwrap();
    let b = map.color_for(&"b".into()).unwrap();
    let c = map.color_for(&"c".into()).unwrap();
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);

    // Extremes of the ramp go to the first and last value.
    let viridis = registry.get("viridis").unwrap();
    assert_eq!(a, viridis.colors()[0]);
    assert_eq!(c, viridis.colors()[255]);
}

#[test]
fn test_thousand_ints_four_buckets() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..1000);

    let map = colorizer.build(&values, "viridis", 4).unwrap();
    assert!(map.is_binned());
    assert_eq!(map.distinct_colors(), 4);

    for v in &values {
        let expected = match v {
            AttrValue::Int(i) => (*i / 250) as usize,
            _ => unreachable!(),
        };
        assert_eq!(map.index_for(v).unwrap(), expected, "value {}", v);
    }
    let c0 = map.color_for(&AttrValue::Int(0)).unwrap();
    assert_eq!(map.color_for(&AttrValue::Int(249)).unwrap(), c0);
    assert_ne!(map.color_for(&AttrValue::Int(250)).unwrap(), c0);

    let labels: Vec<&str> = map.legend().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["0–249", "250–499", "500–749", "750–999"]);
}

#[test]
fn test_cardinality_bound() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..1000);

    let map = colorizer.build(&values, "plasma", 20).unwrap();
    let colors = map.colors_for(&values).unwrap();
    let distinct: HashSet<_> = colors.iter().collect();
    assert_eq!(distinct.len(), 20);
    assert_eq!(map.legend().len(), 20);
    for slot in 0..20 {
        let covered = values
            .iter()
            .filter(|v| map.index_for(v).unwrap() == slot)
            .count();
        assert_eq!(covered, 50);
    }
}

#[test]
fn test_bijection_below_budget() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..12);

    let map = colorizer.build(&values, "category20", -1).unwrap();
    let colors = map.colors_for(&values).unwrap();
    let distinct: HashSet<_> = colors.iter().collect();
    assert_eq!(distinct.len(), 12);
    assert!(!map.is_binned());
}

#[test]
fn test_bijection_on_every_ramp() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let ramps: Vec<&str> = registry
        .palettes()
        .filter(|p| matches!(p.kind(), PaletteKind::Sequential | PaletteKind::Diverging))
        .map(|p| p.name())
        .collect();
    assert!(ramps.contains(&"grey"));

    for name in ramps {
        for k in [2, 100, 256] {
            let values = ints(0..k);
            let map = colorizer.build(&values, name, -1).unwrap();
            let colors = map.colors_for(&values).unwrap();
            let distinct: HashSet<_> = colors.iter().collect();
            assert_eq!(distinct.len(), k as usize, "{} with {} values", name, k);
        }
    }
}

#[test]
fn test_two_categories_get_contrasting_colors() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = vec!["left".into(), "right".into()];
    let map = colorizer.build(&values, "category10", -1).unwrap();
    let category10 = registry.get("category10").unwrap();
    assert_eq!(map.color_for(&"left".into()).unwrap(), category10.colors()[0]);
    assert_eq!(map.color_for(&"right".into()).unwrap(), category10.colors()[2]);
}

#[test]
fn test_totality_colors_come_from_palette() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = vec![
        3.into(),
        AttrValue::Absent,
        "x".into(),
        2.5.into(),
        (1, "a").into(),
        AttrValue::Absent,
    ];

    let map = colorizer.build(&values, "set1", -1).unwrap();
    let set1: HashSet<_> = registry.get("set1").unwrap().colors().iter().copied().collect();
    for v in &values {
        let color = map.color_for(v).unwrap();
        assert!(set1.contains(&color));
    }
    assert_eq!(map.len(), 5);
}

#[test]
fn test_deterministic() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..300);

    let first = colorizer.build(&values, "turbo", 17).unwrap();
    let second = colorizer.build(&values, "turbo", 17).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.legend(), second.legend());
}

#[test]
fn test_random_palette_with_seed() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = (0..30).map(|i| AttrValue::Text(format!("group{}", i))).collect();

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let a = colorizer.build_with_rng(&values, "random", -1, &mut rng).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let b = colorizer.build_with_rng(&values, "random", -1, &mut rng).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.distinct_colors(), 30);
}

#[test]
fn test_max_colors_boundaries() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..256);

    let map = colorizer.build(&values, "viridis", -1).unwrap();
    assert_eq!(map.distinct_colors(), 256);
    assert!(!map.is_binned());

    assert!(colorizer.build(&values, "viridis", 255).is_ok());
    for bad in [256, 0, -2, 1000] {
        assert!(
            matches!(
                colorizer.build(&values, "viridis", bad),
                Err(EncodingError::InvalidParameter { .. })
            ),
            "max_colors {} should be rejected",
            bad
        );
    }
}

#[test]
fn test_max_colors_above_palette_capacity() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..50);
    assert!(matches!(
        colorizer.build(&values, "category10", 11),
        Err(EncodingError::InvalidParameter { .. })
    ));
}

#[test]
fn test_unbounded_bins_at_native_capacity() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values = ints(0..95);

    let map = colorizer.build(&values, "category10", -1).unwrap();
    assert!(map.is_binned());
    assert_eq!(map.distinct_colors(), 10);
    // 95 = 10 * 9 + 5, so the first five buckets hold ten values.
    assert_eq!(map.legend()[0].label, "0–9");
    assert_eq!(map.legend()[5].label, "50–58");
}

#[test]
fn test_empty_values() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let none: Vec<AttrValue> = Vec::new();
    let map = colorizer.build(&none, "viridis", -1).unwrap();
    assert!(map.is_empty());
    assert!(map.legend().is_empty());
    assert!(map.colors_for(&none).unwrap().is_empty());
}

#[test]
fn test_empty_values_still_validate() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    assert!(matches!(
        colorizer.build(&[], "not_a_palette", -1),
        Err(EncodingError::UnknownPalette { .. })
    ));
    assert!(matches!(
        colorizer.build(&[], "viridis", 0),
        Err(EncodingError::InvalidParameter { .. })
    ));
}

#[test]
fn test_unknown_palette_name() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = vec!["a".into()];
    let err = colorizer.build(&values, "not_a_palette", -1).unwrap_err();
    assert!(matches!(err, EncodingError::UnknownPalette { .. }));
    assert!(err.to_string().contains("not_a_palette"));
}

#[test]
fn test_unmapped_value() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = vec!["a".into(), "b".into()];
    let map = colorizer.build(&values, "dark2", -1).unwrap();
    assert!(matches!(
        map.color_for(&"zzz".into()),
        Err(EncodingError::UnmappedValue { .. })
    ));
}

#[test]
fn test_text_buckets_are_abbreviated() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = ["a", "b", "c", "d", "e", "f", "g", "h"]
        .iter()
        .map(|s| AttrValue::from(*s))
        .collect();

    let map = colorizer.build(&values, "viridis", 2).unwrap();
    let labels: Vec<&str> = map.legend().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["a, …, d", "e, …, h"]);

    let map = colorizer.build(&values, "viridis", 3).unwrap();
    let labels: Vec<&str> = map.legend().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["a, b, c", "d, e, f", "g, h"]);
}

#[test]
fn test_absent_gets_its_own_color() {
    let registry = PaletteRegistry::builtin();
    let colorizer = AttributeColorizer::new(&registry);
    let values: Vec<AttrValue> = vec![Some(1).into(), None::<i64>.into(), Some(2).into()];
    let map = colorizer.build(&values, "category10", -1).unwrap();
    assert_eq!(map.distinct_colors(), 3);
    assert_eq!(map.legend()[0].label, "<absent>");
}
