//! Observable component state.
//!
//! Every component keeps its configuration in a plain record that
//! implements [`Reactive`]. A [`Host`] owns that record together with the
//! custom style properties of the rendered element, and after each
//! mutation runs the record's `updated` hook with the set of properties
//! that actually changed.
//!
//! ```
//! use flipcards_core::{CardState, Host};
//!
//! let mut host = Host::new(CardState::default());
//! assert_eq!(host.style().get("--aspect-ratio"), Some("2/3"));
//!
//! host.update(|card| card.set_aspect_ratio("16/9"));
//! assert_eq!(host.style().get("--aspect-ratio"), Some("16/9"));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// CSS custom properties set on a component's host element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleVars {
    vars: BTreeMap<String, String>,
}

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom property, replacing any previous value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render as an inline `style` attribute value, e.g. `--aspect-ratio: 2/3;`
    pub fn to_inline_style(&self) -> String {
        self.vars
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The properties touched by a single update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangedProperties<P: Ord> {
    props: BTreeSet<P>,
}

impl<P: Ord + Copy> ChangedProperties<P> {
    pub fn none() -> Self {
        Self {
            props: BTreeSet::new(),
        }
    }

    pub fn all(props: &[P]) -> Self {
        props.iter().copied().collect()
    }

    pub fn insert(&mut self, prop: P) {
        self.props.insert(prop);
    }

    pub fn has(&self, prop: P) -> bool {
        self.props.contains(&prop)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        self.props.iter().copied()
    }
}

impl<P: Ord + Copy> FromIterator<P> for ChangedProperties<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

/// State record of a component whose changes drive derived style variables.
pub trait Reactive: Clone {
    /// Key naming one observable field.
    type Property: Copy + Ord + Debug + 'static;

    /// Every observable field, applied as changed on first render.
    const PROPERTIES: &'static [Self::Property];

    /// Which properties differ between `previous` and `self`.
    fn changed_since(&self, previous: &Self) -> ChangedProperties<Self::Property>;

    /// Hook run after any update that changed at least one property.
    fn updated(&self, changed: &ChangedProperties<Self::Property>, style: &mut StyleVars);
}

/// A component instance: its state plus the style of its host element.
#[derive(Clone, Debug, PartialEq)]
pub struct Host<S: Reactive> {
    state: S,
    style: StyleVars,
}

impl<S: Reactive> Host<S> {
    /// Create a host and run the first update with every property marked changed.
    pub fn new(state: S) -> Self {
        let mut style = StyleVars::new();
        state.updated(&ChangedProperties::all(S::PROPERTIES), &mut style);
        Self { state, style }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn style(&self) -> &StyleVars {
        &self.style
    }

    /// Mutate the state, then sync derived style variables.
    ///
    /// Assigning a value equal to the current one is not a change and does
    /// not run the hook. Returns the properties that changed.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> ChangedProperties<S::Property> {
        let previous = self.state.clone();
        f(&mut self.state);
        let changed = self.state.changed_since(&previous);
        if !changed.is_empty() {
            self.state.updated(&changed, &mut self.style);
        }
        changed
    }
}
