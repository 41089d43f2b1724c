use marquee_core::options::CropOptions;
use marquee_core::shape::MarqueeKind;

#[test]
fn test_defaults() {
    let o = CropOptions::default();
    assert_eq!(o.marquee_type, MarqueeKind::Rectangle);
    assert!(o.constrain);
    assert!(o.image_source.is_empty());
    assert!(!o.enable_raw_output);
}

#[test]
fn test_missing_keys_take_defaults() {
    let o: CropOptions = serde_json::from_str(r#"{ "marquee_type": "ellipse" }"#).unwrap();
    assert_eq!(o.marquee_type, MarqueeKind::Ellipse);
    assert!(o.constrain);
    assert!(!o.enable_raw_output);
}

#[test]
fn test_unknown_marquee_type_rejected() {
    let r: Result<CropOptions, _> = serde_json::from_str(r#"{ "marquee_type": "polygon" }"#);
    assert!(r.is_err());
}

#[test]
fn test_serialized_kind_is_lowercase() {
    let json = serde_json::to_string(&CropOptions::default()).unwrap();
    assert!(json.contains(r#""marquee_type":"rectangle""#), "got: {json}");
}

#[test]
fn test_kind_display_matches_serialized_name() {
    for kind in MarqueeKind::ALL {
        let json = serde_json::to_string(kind).unwrap();
        assert_eq!(json, format!("\"{kind}\""));
    }
}
