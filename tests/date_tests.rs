use teamrank::util::date::{
    DateError, DateRange, from_input_value, parse_display_date, to_input_value, to_query_param,
};

#[test]
fn test_query_param_encodes_slashes() {
    assert_eq!(to_query_param("28/07/2025"), "28%2F07%2F2025");
}

#[test]
fn test_query_param_does_not_reformat() {
    assert_eq!(to_query_param("1/8/2025"), "1%2F8%2F2025");
}

#[test]
fn test_to_input_value() {
    assert_eq!(to_input_value("28/07/2025").unwrap(), "2025-07-28");
}

#[test]
fn test_to_input_value_pads_day_and_month() {
    assert_eq!(to_input_value("1/8/2025").unwrap(), "2025-08-01");
}

#[test]
fn test_to_input_value_rejects_wrong_component_count() {
    assert_eq!(
        to_input_value("28-07-2025"),
        Err(DateError::Malformed("28-07-2025".into()))
    );
    assert!(to_input_value("28/07").is_err());
    assert!(to_input_value("28/07/2025/1").is_err());
    assert!(to_input_value("").is_err());
}

#[test]
fn test_to_input_value_rejects_non_numeric_components() {
    assert!(to_input_value("aa/07/2025").is_err());
    assert!(to_input_value("28//2025").is_err());
}

#[test]
fn test_from_input_value() {
    assert_eq!(from_input_value("2025-08-01").unwrap(), "01/08/2025");
}

#[test]
fn test_from_input_value_accepts_timestamps() {
    assert_eq!(
        from_input_value("2025-08-25T10:30:00Z").unwrap(),
        "25/08/2025"
    );
    assert_eq!(
        from_input_value("2025-08-25T10:30:00").unwrap(),
        "25/08/2025"
    );
}

#[test]
fn test_from_input_value_accepts_us_dates() {
    assert_eq!(from_input_value("08/25/2025").unwrap(), "25/08/2025");
}

#[test]
fn test_from_input_value_rejects_garbage() {
    assert!(matches!(
        from_input_value("not a date"),
        Err(DateError::Unparseable(_))
    ));
    assert!(from_input_value("2025-02-31").is_err());
}

#[test]
fn test_input_round_trip() {
    for iso in ["2025-07-28", "2024-02-29", "1999-12-31", "2025-01-01"] {
        let display = from_input_value(iso).unwrap();
        assert_eq!(to_input_value(&display).unwrap(), iso);
    }
}

#[test]
fn test_display_round_trip_is_idempotent_after_normalization() {
    for display in ["28/07/2025", "1/8/2025", "29/02/2024", "31/12/1999"] {
        let once = to_input_value(display).unwrap();
        let again = to_input_value(&from_input_value(&once).unwrap()).unwrap();
        assert_eq!(again, once, "{display}");
    }
}

#[test]
fn test_parse_display_date() {
    assert!(parse_display_date("25/08/2025").is_ok());
    assert!(parse_display_date("2025-08-25").is_err());
    assert!(parse_display_date("32/01/2025").is_err());
}

#[test]
fn test_range_ordering() {
    assert!(DateRange::new("28/07/2025", "25/08/2025").is_ordered());
    assert!(DateRange::new("25/08/2025", "25/08/2025").is_ordered());
    assert!(!DateRange::new("25/08/2025", "28/07/2025").is_ordered());
}

#[test]
fn test_range_label() {
    assert_eq!(
        DateRange::new("28/07/2025", "25/08/2025").label(),
        "28/07/2025 - 25/08/2025"
    );
}
