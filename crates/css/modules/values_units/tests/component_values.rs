use css_easing::TimingFunction;
use css_values_units::{
    CalcExpression, CssValue, GrammarConfig, Ident, Length, LengthUnit, Percentage, Time,
    UnitlessTime, ValueList,
};
use cssparser::ToCss as _;

#[test]
fn projections_only_match_their_own_variant() {
    let calc = CssValue::Calc(CalcExpression::from(Length::px(16.0)));
    assert!(calc.as_calc().is_some());
    assert_eq!(calc.as_number(), None);
    assert_eq!(calc.as_time(UnitlessTime::Seconds), None);

    let number = CssValue::number(1.5);
    assert_eq!(number.as_number(), Some(1.5));
    assert!(number.as_calc().is_none());
    assert!(number.as_identifier().is_none());

    assert!(CssValue::Inherit.is_inherit());
    assert!(!CssValue::keyword("inherit").is_inherit());
}

#[test]
fn time_projection_follows_unitless_policy() {
    assert_eq!(
        CssValue::millis(250.0).as_time(UnitlessTime::Reject),
        Some(Time::millis(250.0))
    );
    assert_eq!(CssValue::number(0.0).as_time(UnitlessTime::Reject), None);
    assert_eq!(
        CssValue::number(0.0).as_time(UnitlessTime::ZeroOnly),
        Some(Time::ZERO)
    );
    assert_eq!(CssValue::number(3.0).as_time(UnitlessTime::ZeroOnly), None);
    assert_eq!(
        CssValue::number(3.0).as_time(UnitlessTime::Seconds),
        Some(Time::seconds(3.0))
    );
    assert_eq!(
        CssValue::identifier("opacity").as_time(UnitlessTime::Seconds),
        None
    );
}

#[test]
fn timing_projection_accepts_named_curves() {
    assert_eq!(
        CssValue::TimingFunction(TimingFunction::Linear).as_timing_function(),
        Some(TimingFunction::Linear)
    );
    assert_eq!(
        CssValue::keyword("ease-out").as_timing_function(),
        Some(TimingFunction::EaseOut)
    );
    assert_eq!(
        CssValue::identifier("EASE").as_timing_function(),
        Some(TimingFunction::Ease)
    );
    assert_eq!(CssValue::identifier("opacity").as_timing_function(), None);
    assert_eq!(CssValue::seconds(1.0).as_timing_function(), None);
}

#[test]
fn keyword_checks_ignore_ascii_case() {
    assert!(CssValue::keyword("Normal").is_keyword("normal"));
    assert!(CssValue::identifier("none").is_keyword("NONE"));
    assert!(!CssValue::number(0.0).is_keyword("none"));
    assert_eq!(
        CssValue::keyword("all").as_identifier(),
        Some(&Ident::new("all"))
    );
}

#[test]
fn identifiers_lowercase_except_custom_properties() {
    assert_eq!(Ident::new("Background-Color").as_str(), "background-color");
    assert_eq!(Ident::new("--Accent").as_str(), "--Accent");
}

#[test]
fn flat_list_is_one_group() {
    let list = CssValue::list(vec![CssValue::seconds(1.0), CssValue::seconds(0.5)]);
    assert_eq!(list.as_list().map(ValueList::len), Some(2));
    assert_eq!(
        list.as_list().map(ValueList::is_comma_separated),
        Some(false)
    );
    let groups: Vec<&[CssValue]> = list
        .as_list()
        .into_iter()
        .flat_map(|values| values.groups())
        .collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.first().map(|group| group.len()), Some(2));
}

#[test]
fn nested_lists_are_comma_separated_groups() {
    let list = CssValue::list(vec![
        CssValue::list(vec![CssValue::seconds(1.0), CssValue::identifier("opacity")]),
        CssValue::identifier("color"),
    ]);
    let groups: Vec<&[CssValue]> = list
        .as_list()
        .into_iter()
        .flat_map(|values| values.groups())
        .collect();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.first().map(|group| group.len()), Some(2));
    assert_eq!(
        groups.get(1).copied(),
        Some(&[CssValue::identifier("color")][..])
    );
}

#[test]
fn values_serialize_to_css() {
    let list = CssValue::list(vec![
        CssValue::list(vec![CssValue::seconds(1.0), CssValue::identifier("opacity")]),
        CssValue::list(vec![
            CssValue::millis(200.0),
            CssValue::TimingFunction(TimingFunction::EaseIn),
        ]),
    ]);
    assert_eq!(list.to_css_string(), "1s opacity, 200ms ease-in");
    assert_eq!(CssValue::Inherit.to_css_string(), "inherit");
    assert_eq!(
        CssValue::Calc(CalcExpression::from(Percentage(1.5))).to_css_string(),
        "150%"
    );
}

#[test]
fn grammar_config_reads_variables() {
    let seconds = GrammarConfig::from_vars(|name| {
        (name == "CSS_UNITLESS_TIME").then(|| "seconds".to_owned())
    });
    assert_eq!(seconds.unitless_time, UnitlessTime::Seconds);

    let unknown = GrammarConfig::from_vars(|_| Some("whenever".to_owned()));
    assert_eq!(unknown, GrammarConfig::default());

    let missing = GrammarConfig::from_vars(|_| None);
    assert_eq!(missing.unitless_time, UnitlessTime::ZeroOnly);
    assert_eq!(
        GrammarConfig::new(UnitlessTime::Reject).unitless_time,
        UnitlessTime::Reject
    );
}

#[test]
fn times_convert_between_units() {
    assert!((Time::seconds(1.5).as_millis() - 1500.0).abs() < f32::EPSILON);
    assert!((Time::millis(250.0).as_seconds() - 0.25).abs() < f32::EPSILON);
    assert_ne!(Time::seconds(1.0), Time::millis(1000.0));
    assert_eq!(Time::millis(1000.0).to_css_string(), "1000ms");
}

#[test]
fn length_units_match_ignoring_ascii_case() {
    assert_eq!(LengthUnit::from_suffix("PX"), Some(LengthUnit::Pixels));
    assert_eq!(LengthUnit::from_suffix("rem"), Some(LengthUnit::RootEms));
    assert_eq!(LengthUnit::from_suffix("pt"), None);
    assert_eq!(Length::em(1.25).to_css_string(), "1.25em");
}
