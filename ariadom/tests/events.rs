use ariadom::{
    collect_focusable, hit_test, hit_test_any, Boundary, Element, Event, FocusState, Key,
    LayoutResult, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::div()
        .id("root")
        .clickable(true)
        .child(Element::span().id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::div()
        .id("root")
        .child(Element::span().id("label"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("label", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("label".to_string())
    );
}

#[test]
fn test_hit_test_descends_through_unlaid_containers() {
    // The list wrapper has no rect of its own, its items do
    let root = Element::div().id("root").child(
        Element::ul()
            .id("list")
            .child(Element::li().id("option-0").clickable(true)),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 10)),
        ("option-0", Rect::new(0, 2, 40, 1)),
    ]);

    assert_eq!(
        hit_test(&layout, &root, 3, 2),
        Some("option-0".to_string())
    );
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);
    assert!(focus.focus("combobox"));
    assert_eq!(focus.focused(), Some("combobox"));

    // Focus same element - no change
    assert!(!focus.focus("combobox"));

    assert!(focus.focus("listbox"));
    assert_eq!(focus.focused(), Some("listbox"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_and_prev_wrap() {
    let root = Element::div()
        .child(Element::div().id("a").focusable(true))
        .child(Element::div().id("b"))
        .child(Element::div().id("c").focusable(true));

    assert_eq!(collect_focusable(&root), vec!["a", "c"]);

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("c".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));

    assert_eq!(focus.focus_prev(&root), Some("c".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("a".to_string()));
}

#[test]
fn test_focus_no_focusable_elements() {
    let root = Element::div().child(Element::span());
    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focus_prev(&root), None);
}

// ============================================================================
// Boundary
// ============================================================================

#[test]
fn test_boundary_contains_descendants_only() {
    let widget = Element::div()
        .id("wrapper")
        .child(Element::ul().id("list").child(Element::li().id("item")));

    assert!(widget.contains("wrapper"));
    assert!(widget.contains("item"));
    assert!(!widget.contains("elsewhere"));
}

#[test]
fn test_event_target() {
    assert_eq!(Event::key("list", Key::Down).target(), Some("list"));
    assert_eq!(Event::click("option-1").target(), Some("option-1"));
    assert!(!Event::Resize { width: 1, height: 1 }.is_interaction());
}

#[test]
fn test_unmapped_crossterm_key_is_other() {
    use crossterm::event::KeyCode;

    assert_eq!(Key::from(KeyCode::CapsLock), Key::Other);
    assert_eq!(Key::from(KeyCode::Null), Key::Other);
    assert_eq!(Key::from(KeyCode::Char('\0')), Key::Char('\0'));
}
