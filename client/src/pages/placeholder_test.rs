use super::*;

#[test]
fn every_screen_has_a_distinct_title() {
    let mut seen = std::collections::HashSet::new();
    for screen in Screen::ALL {
        let title = screen_title(screen);
        assert!(!title.is_empty());
        assert!(seen.insert(title), "duplicate title {title}");
    }
}
