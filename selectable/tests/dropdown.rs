use selectable::{
    Dropdown, DropdownState, EventContext, EventResult, HitTarget, Key, KeyRouter, Modifiers,
    SelectOption, Selection,
};

fn abc() -> Vec<SelectOption> {
    vec![
        SelectOption::new("A", 1),
        SelectOption::new("B", 2),
        SelectOption::new("C", 3),
    ]
}

fn mounted(router: &KeyRouter, options: Vec<SelectOption>) -> Dropdown {
    let mut dropdown = Dropdown::new("dd", options);
    dropdown.mount(router);
    dropdown
}

fn press(dropdown: &mut Dropdown, key: Key, selection: &Selection, cx: &mut EventContext) -> EventResult {
    dropdown.on_key(key, Modifiers::new(), selection, cx)
}

// ============================================================================
// Open / close
// ============================================================================

#[test]
fn test_initially_closed() {
    let dropdown = Dropdown::new("dd", abc());
    assert_eq!(dropdown.state(), DropdownState::Closed);
    assert_eq!(dropdown.highlighted(), None);
}

#[test]
fn test_toggle_alternates_and_resets_highlight() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    for round in 0..4 {
        dropdown.on_click(HitTarget::Body, &selection, &mut cx);
        assert!(dropdown.is_open(), "round {}", round);
        assert_eq!(dropdown.highlighted(), Some(0));

        press(&mut dropdown, Key::Down, &selection, &mut cx);
        press(&mut dropdown, Key::Down, &selection, &mut cx);
        assert_eq!(dropdown.highlighted(), Some(2));

        dropdown.on_click(HitTarget::Body, &selection, &mut cx);
        assert!(!dropdown.is_open());
    }
    assert!(cx.is_empty());
}

#[test]
fn test_escape_forces_closed() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    dropdown.open();
    assert_eq!(
        press(&mut dropdown, Key::Escape, &selection, &mut cx),
        EventResult::Consumed
    );
    assert!(!dropdown.is_open());

    // Already closed: left for the host.
    assert_eq!(
        press(&mut dropdown, Key::Escape, &selection, &mut cx),
        EventResult::Ignored
    );
    assert!(!dropdown.is_open());
}

#[test]
fn test_blur_closes() {
    let mut dropdown = Dropdown::new("dd", abc());
    dropdown.open();
    dropdown.on_blur();
    assert!(!dropdown.is_open());

    dropdown.on_blur();
    assert!(!dropdown.is_open());
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn test_arrow_opens_when_closed_without_moving() {
    let router = KeyRouter::new();
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    for key in [Key::Down, Key::Up] {
        let mut dropdown = mounted(&router, abc());
        press(&mut dropdown, key, &selection, &mut cx);
        assert_eq!(dropdown.state(), DropdownState::Open { highlighted: 0 });
    }
}

#[test]
fn test_arrows_stay_in_range() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();
    dropdown.open();

    let keys = [
        Key::Up,
        Key::Down,
        Key::Down,
        Key::Down,
        Key::Down,
        Key::Up,
        Key::Up,
        Key::Up,
        Key::Up,
        Key::Down,
    ];
    let mut expected: usize = 0;
    for key in keys {
        let before = dropdown.highlighted().unwrap();
        press(&mut dropdown, key, &selection, &mut cx);
        let after = dropdown.highlighted().unwrap();

        expected = match key {
            Key::Down if expected + 1 < 3 => expected + 1,
            Key::Up if expected > 0 => expected - 1,
            _ => expected,
        };
        assert_eq!(after, expected);
        assert!(after < 3);
        assert!(after.abs_diff(before) <= 1);
    }
}

#[test]
fn test_home_and_end() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();
    dropdown.open();

    press(&mut dropdown, Key::End, &selection, &mut cx);
    assert_eq!(dropdown.highlighted(), Some(2));
    press(&mut dropdown, Key::Home, &selection, &mut cx);
    assert_eq!(dropdown.highlighted(), Some(0));
}

#[test]
fn test_enter_opens_then_selects_highlighted() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    press(&mut dropdown, Key::Enter, &selection, &mut cx);
    assert!(dropdown.is_open());
    assert!(cx.is_empty());

    press(&mut dropdown, Key::Down, &selection, &mut cx);
    press(&mut dropdown, Key::Char(' '), &selection, &mut cx);
    assert!(!dropdown.is_open());

    let changes = cx.drain();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].widget_id, "dd");
    assert_eq!(
        changes[0].selection,
        Selection::Single(Some(SelectOption::new("B", 2)))
    );
}

#[test]
fn test_enter_with_no_options_closes_quietly() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, Vec::new());
    let selection = Selection::Multiple(Vec::new());
    let mut cx = EventContext::new();

    press(&mut dropdown, Key::Enter, &selection, &mut cx);
    assert!(dropdown.is_open());
    press(&mut dropdown, Key::Down, &selection, &mut cx);
    assert_eq!(dropdown.highlighted(), Some(0));
    press(&mut dropdown, Key::Enter, &selection, &mut cx);
    assert!(!dropdown.is_open());
    assert!(cx.is_empty());
}

#[test]
fn test_modified_and_unknown_keys_ignored() {
    let router = KeyRouter::new();
    let mut dropdown = mounted(&router, abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    let result = dropdown.on_key(Key::Enter, Modifiers::ctrl(), &selection, &mut cx);
    assert_eq!(result, EventResult::Ignored);
    let result = dropdown.on_key(Key::Down, Modifiers::alt(), &selection, &mut cx);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(
        press(&mut dropdown, Key::Char('q'), &selection, &mut cx),
        EventResult::Ignored
    );
    assert!(!dropdown.is_open());
}

#[test]
fn test_keys_ignored_when_not_mounted() {
    let mut dropdown = Dropdown::new("dd", abc());
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    assert_eq!(
        press(&mut dropdown, Key::Enter, &selection, &mut cx),
        EventResult::Ignored
    );
    assert!(!dropdown.is_open());
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_hover_moves_highlight_only_when_open() {
    let mut dropdown = Dropdown::new("dd", abc());
    assert_eq!(dropdown.on_hover(HitTarget::Option(2)), EventResult::Ignored);

    dropdown.open();
    assert_eq!(dropdown.on_hover(HitTarget::Option(2)), EventResult::Consumed);
    assert_eq!(dropdown.highlighted(), Some(2));

    dropdown.on_hover(HitTarget::Option(7));
    assert_eq!(dropdown.highlighted(), Some(2));

    assert_eq!(dropdown.on_hover(HitTarget::Body), EventResult::Ignored);
}

#[test]
fn test_option_click_selects_and_closes() {
    let mut dropdown = Dropdown::new("dd", abc());
    let selection = Selection::Multiple(Vec::new());
    let mut cx = EventContext::new();

    // Closed list rows are not clickable.
    assert_eq!(
        dropdown.on_click(HitTarget::Option(1), &selection, &mut cx),
        EventResult::Ignored
    );
    assert!(cx.is_empty());

    dropdown.open();
    dropdown.on_click(HitTarget::Option(1), &selection, &mut cx);
    assert!(!dropdown.is_open());
    assert_eq!(
        cx.drain()[0].selection,
        Selection::Multiple(vec![SelectOption::new("B", 2)])
    );
}

#[test]
fn test_clear_never_toggles() {
    let options = abc();
    let mut dropdown = Dropdown::new("dd", options.clone());
    let mut cx = EventContext::new();

    let single = Selection::Single(Some(options[0].clone()));
    dropdown.on_click(HitTarget::Clear, &single, &mut cx);
    assert!(!dropdown.is_open());

    dropdown.open();
    let multi = Selection::Multiple(options.clone());
    dropdown.on_click(HitTarget::Clear, &multi, &mut cx);
    assert!(dropdown.is_open());

    // Clearing an empty selection still reports.
    let empty = Selection::Single(None);
    dropdown.on_click(HitTarget::Clear, &empty, &mut cx);

    let changes = cx.drain();
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[0].selection, Selection::Single(None));
    assert_eq!(changes[1].selection, Selection::Multiple(Vec::new()));
    assert_eq!(changes[2].selection, Selection::Single(None));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_multi_select_scenario() {
    let router = KeyRouter::new();
    let options = abc();
    let mut dropdown = mounted(&router, options.clone());
    let mut selection = Selection::Multiple(vec![options[0].clone()]);
    let mut cx = EventContext::new();

    dropdown.on_click(HitTarget::Body, &selection, &mut cx);
    assert_eq!(dropdown.state(), DropdownState::Open { highlighted: 0 });

    press(&mut dropdown, Key::Down, &selection, &mut cx);
    press(&mut dropdown, Key::Down, &selection, &mut cx);
    assert_eq!(dropdown.highlighted(), Some(2));

    dropdown.on_click(HitTarget::Option(2), &selection, &mut cx);
    assert!(!dropdown.is_open());
    for change in cx.drain() {
        selection = change.selection;
    }
    assert_eq!(
        selection,
        Selection::Multiple(vec![options[0].clone(), options[2].clone()])
    );

    dropdown.on_click(HitTarget::Chip(0), &selection, &mut cx);
    assert!(!dropdown.is_open());
    for change in cx.drain() {
        selection = change.selection;
    }
    assert_eq!(selection, Selection::Multiple(vec![options[2].clone()]));
}

#[test]
fn test_single_escape_scenario() {
    let router = KeyRouter::new();
    let options = abc();
    let mut dropdown = mounted(&router, options.clone());
    let selection = Selection::Single(Some(options[0].clone()));
    let mut cx = EventContext::new();

    dropdown.on_click(HitTarget::Body, &selection, &mut cx);
    press(&mut dropdown, Key::Down, &selection, &mut cx);
    press(&mut dropdown, Key::Escape, &selection, &mut cx);

    assert!(!dropdown.is_open());
    assert!(cx.is_empty());
}

#[test]
fn test_single_reselect_is_noop() {
    let router = KeyRouter::new();
    let options = abc();
    let mut dropdown = mounted(&router, options.clone());
    let selection = Selection::Single(Some(options[0].clone()));
    let mut cx = EventContext::new();

    press(&mut dropdown, Key::Enter, &selection, &mut cx);
    press(&mut dropdown, Key::Enter, &selection, &mut cx);
    assert!(!dropdown.is_open());
    assert!(cx.is_empty());
}

#[test]
fn test_reconstructed_options_match_by_value() {
    let mut dropdown = Dropdown::new("dd", abc());
    // Same values, fresh objects and even different labels.
    let selection = Selection::Multiple(vec![SelectOption::new("a (old)", 1)]);
    let mut cx = EventContext::new();

    dropdown.open();
    dropdown.on_click(HitTarget::Option(0), &selection, &mut cx);
    assert_eq!(cx.drain()[0].selection, Selection::Multiple(Vec::new()));
}

#[test]
fn test_scroll_follows_highlight() {
    let router = KeyRouter::new();
    let options: Vec<SelectOption> = (1..=10)
        .map(|n| SelectOption::new(format!("Item {}", n), n))
        .collect();
    let mut dropdown = Dropdown::new("dd", options).with_max_visible(4);
    dropdown.mount(&router);
    let selection = Selection::Single(None);
    let mut cx = EventContext::new();

    dropdown.open();
    for _ in 0..5 {
        press(&mut dropdown, Key::Down, &selection, &mut cx);
    }
    assert_eq!(dropdown.highlighted(), Some(5));
    assert_eq!(dropdown.scroll_offset(), 2);

    press(&mut dropdown, Key::Up, &selection, &mut cx);
    assert_eq!(dropdown.scroll_offset(), 2);
    for _ in 0..4 {
        press(&mut dropdown, Key::Up, &selection, &mut cx);
    }
    assert_eq!(dropdown.highlighted(), Some(0));
    assert_eq!(dropdown.scroll_offset(), 0);

    press(&mut dropdown, Key::End, &selection, &mut cx);
    assert_eq!(dropdown.scroll_offset(), 6);

    // Reopening starts from the top again.
    dropdown.close();
    dropdown.open();
    assert_eq!(dropdown.scroll_offset(), 0);
}

#[test]
fn test_set_options_keeps_highlight_in_range() {
    let mut dropdown = Dropdown::new("dd", abc());
    dropdown.open();
    dropdown.highlight(2);

    dropdown.set_options(vec![SelectOption::new("A", 1)]);
    assert_eq!(dropdown.highlighted(), Some(0));
}
