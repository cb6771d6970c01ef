//! End-to-end scenarios for the card and grid widgets
//!
//! Each test drives a widget through a `Host` the way the UI layer does:
//! construct, interact, then check state, reflected attributes and style.

use flipcards_core::{
    Activation, ActivationKey, Attributes, CardFace, CardState, GridState, Host,
    ASPECT_RATIO_ATTR, ASPECT_RATIO_VAR, FLIPPED_ATTR, MAX_CARDS_PER_ROW_ATTR,
    MAX_CARDS_PER_ROW_VAR,
};

#[test]
fn card_lifecycle_from_defaults() {
    let mut host = Host::new(CardState::default());
    assert!(!host.state().flipped);
    assert_eq!(host.state().aspect_ratio, "2/3");
    assert_eq!(host.style().get(ASPECT_RATIO_VAR), Some("2/3"));

    host.update(CardState::toggle_flip);
    assert!(host.state().flipped);
    assert_eq!(host.state().aria_pressed(), "true");
    assert_eq!(host.state().visible_face(), CardFace::Back);

    host.update(CardState::toggle_flip);
    assert!(!host.state().flipped);
    assert_eq!(host.state().aria_pressed(), "false");
}

#[test]
fn card_each_modality_toggles_once() {
    let mut host = Host::new(CardState::default());
    let activations = [
        Activation::Pointer,
        Activation::Key {
            key: ActivationKey::Enter,
            repeat: false,
        },
        Activation::Key {
            key: ActivationKey::Space,
            repeat: false,
        },
    ];

    let mut expected = false;
    for activation in activations {
        host.update(|c| c.handle_activation(activation));
        expected = !expected;
        assert_eq!(host.state().flipped, expected, "{:?}", activation);
    }
}

#[test]
fn card_reflects_state_to_markup() {
    let mut host = Host::new(CardState {
        flipped: false,
        aspect_ratio: "3/4".to_string(),
    });
    assert_eq!(host.style().get(ASPECT_RATIO_VAR), Some("3/4"));

    let mut attrs = Attributes::new();
    host.update(CardState::toggle_flip);
    host.state().reflect_attributes(&mut attrs);
    assert!(attrs.has(FLIPPED_ATTR));
    assert_eq!(attrs.get(ASPECT_RATIO_ATTR), Some("3/4"));

    host.update(CardState::toggle_flip);
    host.state().reflect_attributes(&mut attrs);
    assert!(!attrs.has(FLIPPED_ATTR));
}

#[test]
fn grid_lifecycle_from_defaults() {
    let mut host = Host::new(GridState::default());
    assert_eq!(host.state().max_cards_per_row(), 4);

    host.update(|g| g.apply_control_input("7"));
    assert_eq!(host.state().max_cards_per_row(), 7);

    let changed = host.update(|g| g.apply_control_input("15"));
    assert!(changed.is_empty());
    assert_eq!(host.state().max_cards_per_row(), 7);
    assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("7"));

    let mut attrs = Attributes::new();
    host.state().reflect_attributes(&mut attrs);
    assert_eq!(attrs.get(MAX_CARDS_PER_ROW_ATTR), Some("7"));
}

#[test]
fn grid_boundary_values() {
    let mut grid = GridState::default();
    for (input, expected) in [("1", 1), ("10", 10), ("0", 10), ("11", 10), ("-5", 10), ("x", 10)] {
        grid.apply_control_input(input);
        assert_eq!(grid.max_cards_per_row(), expected, "input {:?}", input);
    }
}

#[test]
fn grid_configured_past_control_bound() {
    let mut host = Host::new(GridState::with_max_cards_per_row(12));
    assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("12"));

    let mut attrs = Attributes::new();
    host.state().reflect_attributes(&mut attrs);
    assert_eq!(attrs.get(MAX_CARDS_PER_ROW_ATTR), Some("12"));

    // Typing a value brings it back under the control's bounds
    host.update(|g| g.apply_control_input("3"));
    assert_eq!(host.style().get(MAX_CARDS_PER_ROW_VAR), Some("3"));
}
