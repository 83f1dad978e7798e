use super::*;

// =============================================================
// Cycle
// =============================================================

#[test]
fn default_is_slim() {
    assert_eq!(Mode::default(), Mode::Slim);
}

#[test]
fn next_cycles_slim_wide_full() {
    assert_eq!(Mode::Slim.next(), Mode::Wide);
    assert_eq!(Mode::Wide.next(), Mode::Full);
    assert_eq!(Mode::Full.next(), Mode::Slim);
}

#[test]
fn next_three_times_returns_to_start() {
    for mode in Mode::ALL {
        assert_eq!(mode.next().next().next(), mode);
    }
}

#[test]
fn advance_matches_repeated_next() {
    for start in Mode::ALL {
        let mut expected = start;
        for steps in 0..20 {
            assert_eq!(start.advance(steps), expected, "start={start} steps={steps}");
            expected = expected.next();
        }
    }
}

#[test]
fn all_is_in_cycle_order() {
    assert_eq!(Mode::ALL[0].next(), Mode::ALL[1]);
    assert_eq!(Mode::ALL[1].next(), Mode::ALL[2]);
    assert_eq!(Mode::ALL[2].next(), Mode::ALL[0]);
}

// =============================================================
// Names
// =============================================================

#[test]
fn as_str_is_lowercase_name() {
    assert_eq!(Mode::Slim.as_str(), "slim");
    assert_eq!(Mode::Wide.as_str(), "wide");
    assert_eq!(Mode::Full.as_str(), "full");
}

#[test]
fn label_is_capitalized_name() {
    assert_eq!(Mode::Slim.label(), "Slim");
    assert_eq!(Mode::Wide.label(), "Wide");
    assert_eq!(Mode::Full.label(), "Full");
}

#[test]
fn display_uses_wire_name() {
    assert_eq!(Mode::Wide.to_string(), "wide");
}

#[test]
fn attribute_absent_only_for_slim() {
    assert_eq!(Mode::Slim.attribute_value(), None);
    assert_eq!(Mode::Wide.attribute_value(), Some("wide"));
    assert_eq!(Mode::Full.attribute_value(), Some("full"));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_wire_names() {
    for mode in Mode::ALL {
        assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
    }
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!("Wide".parse::<Mode>(), Err(UnknownMode("Wide".into())));
}

#[test]
fn unknown_mode_message_quotes_value() {
    let err = "huge".parse::<Mode>().unwrap_err();
    assert_eq!(err.to_string(), "unrecognized width mode \"huge\"");
}

#[test]
fn from_stored_absent_is_slim() {
    assert_eq!(Mode::from_stored(None), Mode::Slim);
}

#[test]
fn from_stored_known_values() {
    assert_eq!(Mode::from_stored(Some("wide")), Mode::Wide);
    assert_eq!(Mode::from_stored(Some("full")), Mode::Full);
    assert_eq!(Mode::from_stored(Some("slim")), Mode::Slim);
}

#[test]
fn from_stored_garbage_falls_back_to_slim() {
    assert_eq!(Mode::from_stored(Some("")), Mode::Slim);
    assert_eq!(Mode::from_stored(Some("ultra")), Mode::Slim);
    assert_eq!(Mode::from_stored(Some(" wide")), Mode::Slim);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Mode::Full).unwrap(), "\"full\"");
    assert_eq!(serde_json::from_str::<Mode>("\"wide\"").unwrap(), Mode::Wide);
}
