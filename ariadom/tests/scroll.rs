use ariadom::Viewport;

#[test]
fn test_no_scroll_when_content_fits() {
    let mut vp = Viewport::new(10, 6);
    assert!(!vp.ensure_visible(5, 1));
    assert_eq!(vp.scroll_top, 0);
}

#[test]
fn test_scroll_down_aligns_bottom_edge() {
    let mut vp = Viewport::new(4, 10);

    // Item 6 spans rows 6..7, visible area is 0..4
    assert!(vp.ensure_visible(6, 1));
    assert_eq!(vp.scroll_top, 3);
    assert_eq!(vp.scroll_bottom(), 7);
}

#[test]
fn test_scroll_up_aligns_top_edge() {
    let mut vp = Viewport::new(4, 10);
    vp.scroll_top = 5;

    assert!(vp.ensure_visible(2, 1));
    assert_eq!(vp.scroll_top, 2);
}

#[test]
fn test_fully_visible_item_does_not_scroll() {
    let mut vp = Viewport::new(4, 10);
    vp.scroll_top = 2;

    assert!(!vp.ensure_visible(2, 1));
    assert!(!vp.ensure_visible(5, 1));
    assert_eq!(vp.scroll_top, 2);
}

#[test]
fn test_multi_row_items() {
    let mut vp = Viewport::new(5, 20);

    // Item spanning rows 4..6 sticks out below the 0..5 window
    assert!(vp.ensure_visible(4, 2));
    assert_eq!(vp.scroll_top, 1);
}

#[test]
fn test_shrinking_content_clamps_offset() {
    let mut vp = Viewport::new(4, 10);
    vp.scroll_top = 6;

    vp.set_scroll_height(7);
    assert_eq!(vp.scroll_top, 3);

    vp.set_client_height(10);
    assert_eq!(vp.scroll_top, 0);
}

#[test]
fn test_unmeasured_viewport_never_scrolls() {
    let mut vp = Viewport::new(0, 10);
    assert!(!vp.ensure_visible(8, 1));
    assert_eq!(vp.scroll_top, 0);
}
