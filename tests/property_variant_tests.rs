use chart_lines::api::{GraphVariant, MultiLineGraph};
use chart_lines::core::{OptionValue, OptionsMap};
use proptest::prelude::*;

fn settings_strategy() -> impl Strategy<Value = OptionsMap> {
    (
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(0.1f64..20.0),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(curve, width, visible, marker)| {
            let mut map = OptionsMap::new();
            if let Some(curve) = curve {
                map.insert("line_curve".to_owned(), OptionValue::Number(curve));
            }
            if let Some(width) = width {
                map.insert("line_width".to_owned(), OptionValue::Number(width));
            }
            if let Some(visible) = visible {
                map.insert("line_visible".to_owned(), OptionValue::Flag(visible));
            }
            if let Some(marker) = marker {
                map.insert("marker_shape".to_owned(), OptionValue::Text(marker));
            }
            map
        })
}

proptest! {
    #[test]
    fn curve_is_zero_unless_fixed_override_sets_it(
        settings in settings_strategy(),
        fixed_width in proptest::option::of(0.1f64..20.0),
        width in 1.0f64..4000.0,
        height in 1.0f64..4000.0,
    ) {
        let mut fixed = OptionsMap::new();
        if let Some(line_width) = fixed_width {
            fixed.insert("line_width".to_owned(), OptionValue::Number(line_width));
        }

        let graph = GraphVariant::stepped_multi_line()
            .create_variant(width, height, settings.clone(), fixed.clone())
            .expect("variant init");

        prop_assert_eq!(graph.line_curve(), 0.0);
        prop_assert_eq!(graph.settings(), &settings);
        prop_assert_eq!(graph.fixed_settings().len(), fixed.len() + 1);
    }

    #[test]
    fn explicit_fixed_curve_always_wins(
        settings in settings_strategy(),
        curve in 0.0f64..=1.0,
    ) {
        let mut fixed = OptionsMap::new();
        fixed.insert("line_curve".to_owned(), OptionValue::Number(curve));

        let graph = GraphVariant::stepped_multi_line()
            .create_variant(800.0, 400.0, settings, fixed)
            .expect("variant init");

        prop_assert_eq!(graph.line_curve(), curve);
        prop_assert_eq!(graph.fixed_settings().len(), 1);
    }

    #[test]
    fn variant_matches_base_with_pinned_curve(settings in settings_strategy()) {
        let via_variant = GraphVariant::stepped_multi_line()
            .create_variant(800.0, 400.0, settings.clone(), OptionsMap::new())
            .expect("variant init");

        let mut pinned = OptionsMap::new();
        pinned.insert("line_curve".to_owned(), OptionValue::Number(0.0));
        let direct = MultiLineGraph::new(800.0, 400.0, settings, pinned)
            .expect("base init");

        prop_assert_eq!(via_variant.resolved_options(), direct.resolved_options());
        prop_assert_eq!(via_variant.fixed_settings(), direct.fixed_settings());
    }
}
