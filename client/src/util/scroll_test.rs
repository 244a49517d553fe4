use super::*;

#[test]
fn section_id_strips_leading_hash() {
    assert_eq!(section_id("#skills"), "skills");
    assert_eq!(section_id("home"), "home");
    assert_eq!(section_id("#"), "");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scrolling_is_a_noop_outside_browser() {
    scroll_to_section("#projects");
    scroll_to_top();
}
