// Host-side tests for theme resolution and the persisted preference format.

use field_core::{Rgb, Theme};

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn foreground_tracks_theme() {
    assert_eq!(Theme::Dark.foreground(), Rgb(255, 255, 255));
    assert_eq!(Theme::Light.foreground(), Rgb(0, 0, 0));
}

#[test]
fn toggle_flips_between_the_two_themes() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn preference_round_trips_through_its_string_form() {
    for theme in [Theme::Light, Theme::Dark] {
        let parsed: Theme = theme.as_str().parse().expect("valid preference");
        assert_eq!(parsed, theme);
    }
}

#[test]
fn unknown_preference_is_an_error() {
    let err = "solarized".parse::<Theme>().unwrap_err();
    assert!(err.to_string().contains("solarized"));
    assert!("".parse::<Theme>().is_err());
    // Values are stored lowercase; anything else is treated as unknown.
    assert!("Light".parse::<Theme>().is_err());
}

#[test]
fn rgb_renders_as_a_css_color() {
    assert_eq!(Rgb(255, 255, 255).to_string(), "rgb(255, 255, 255)");
    assert_eq!(Rgb(0, 0, 0).to_string(), "rgb(0, 0, 0)");
    assert_eq!(Rgb(12, 34, 56).to_string(), "rgb(12, 34, 56)");
}
