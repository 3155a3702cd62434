use super::*;

#[test]
fn reflect_on_empty_root_adds_token() {
    assert_eq!(reflected_class_name("", Mode::Dark), "dark");
    assert_eq!(reflected_class_name("", Mode::Light), "light");
}

#[test]
fn reflect_replaces_opposite_token() {
    assert_eq!(reflected_class_name("dark", Mode::Light), "light");
    assert_eq!(reflected_class_name("light", Mode::Dark), "dark");
}

#[test]
fn reflect_removes_both_stale_tokens() {
    assert_eq!(reflected_class_name("dark light", Mode::Light), "light");
}

#[test]
fn reflect_preserves_unrelated_classes() {
    assert_eq!(
        reflected_class_name("scroll-smooth  dark antialiased", Mode::Light),
        "scroll-smooth antialiased light"
    );
}

#[test]
fn reflect_is_idempotent() {
    for mode in [Mode::Dark, Mode::Light] {
        let once = reflected_class_name("scroll-smooth", mode);
        let twice = reflected_class_name(&once, mode);
        assert_eq!(once, twice);
    }
}

#[test]
fn reflect_does_not_match_token_substrings() {
    assert_eq!(reflected_class_name("darkish", Mode::Light), "darkish light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_root_is_noop_off_browser() {
    DocumentRoot.reflect(Mode::Dark);
    DocumentRoot.reflect(Mode::Light);
}
