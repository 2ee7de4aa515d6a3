// Host-side tests for carousel configuration.

use reel_core::config::{ATTR_DURATION, ATTR_SENSITIVITY};
use reel_core::{CarouselConfig, ConfigError};
use std::collections::HashMap;
use std::time::Duration;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn from(pairs: &[(&str, &str)]) -> Result<CarouselConfig, ConfigError> {
    let map = attrs(pairs);
    CarouselConfig::from_attributes(|name| map.get(name).cloned())
}

#[test]
fn defaults_match_showcase_timing() {
    let cfg = CarouselConfig::default();
    assert_eq!(cfg.auto_scroll_duration, Duration::from_secs(40));
    assert_eq!(cfg.drag_sensitivity, 2.0);
    assert!(cfg.validate().is_ok());
    assert_eq!(from(&[]).unwrap(), cfg);
}

#[test]
fn attributes_override_defaults() {
    let cfg = from(&[(ATTR_DURATION, " 25 "), (ATTR_SENSITIVITY, "1.5")]).unwrap();
    assert_eq!(cfg.auto_scroll_duration, Duration::from_secs(25));
    assert_eq!(cfg.drag_sensitivity, 1.5);
}

#[test]
fn invalid_attributes_are_rejected() {
    assert_eq!(from(&[(ATTR_DURATION, "0")]), Err(ConfigError::Duration(0.0)));
    assert_eq!(from(&[(ATTR_DURATION, "-3")]), Err(ConfigError::Duration(-3.0)));
    assert_eq!(
        from(&[(ATTR_SENSITIVITY, "-1")]),
        Err(ConfigError::Sensitivity(-1.0))
    );
    assert!(matches!(
        from(&[(ATTR_SENSITIVITY, "fast")]),
        Err(ConfigError::NotANumber { name: "data-sensitivity", .. })
    ));
}

#[test]
fn out_of_range_duration_is_rejected() {
    assert_eq!(
        from(&[(ATTR_DURATION, "1e20")]),
        Err(ConfigError::Duration(1e20))
    );
    assert_eq!(
        from(&[(ATTR_DURATION, "inf")]),
        Err(ConfigError::Duration(f64::INFINITY))
    );
}

#[test]
fn errors_render_readably() {
    let e = from(&[(ATTR_DURATION, "soon")]).unwrap_err();
    assert_eq!(e.to_string(), "attribute `data-duration` is not a number: \"soon\"");
}
