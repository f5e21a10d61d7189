//! Selection events of the control.
//!
//! The control is driven by two select widgets: the current one
//! reports the chosen identifier, the legacy one reports the whole
//! option.  Both go through a [`Dispatcher`] so that they stay bound
//! to the same `value` / `onChange` contract.

use std::{fmt, sync::Arc};
use serde::Serialize;
use tracing::{debug, trace};
use crate::swatch::SwatchStrip;

/// Callback receiving the newly selected identifier, or `None` when
/// the selection is cleared.
#[derive(Clone)]
pub struct OnChange(Arc<dyn Fn(Option<String>) + Send + Sync>);

impl OnChange {
    pub fn new<F>(f: F) -> Self
    where F: Fn(Option<String>) + Send + Sync + 'static {
        OnChange(Arc::new(f))
    }

    pub fn call(&self, value: Option<String>) { (self.0)(value) }
}

impl Default for OnChange {
    fn default() -> Self { OnChange::new(|_| {}) }
}

impl fmt::Debug for OnChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnChange(..)")
    }
}

/// An entry of the select widgets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemeOption {
    pub value: String,
    /// Scheme label if the identifier resolves, the fallback label of
    /// the choice otherwise.
    pub label: String,
    pub preview: SwatchStrip,
}

/// A select widget, described by the events it emits.
pub trait Binding {
    type Event;

    /// The identifier carried by `event`, `None` for a clear.
    fn selected(event: Self::Event) -> Option<String>;
}

/// The current select: events are identifiers.
pub struct Current;

impl Binding for Current {
    type Event = Option<String>;

    fn selected(event: Self::Event) -> Option<String> { event }
}

/// The legacy select: events are option objects, unwrapped to their
/// value.
pub struct Legacy;

impl Binding for Legacy {
    type Event = Option<SchemeOption>;

    fn selected(event: Self::Event) -> Option<String> {
        event.map(|o| o.value)
    }
}

/// Forwards selection events to the `onChange` callback.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    clearable: bool,
    on_change: OnChange,
}

impl Dispatcher {
    pub fn new(clearable: bool, on_change: OnChange) -> Self {
        Dispatcher { clearable, on_change }
    }

    /// Invoke the callback once for `event`.  Returns `false`, without
    /// invoking it, for a clear on a non clearable control.
    pub fn dispatch<B: Binding>(&self, event: B::Event) -> bool {
        match B::selected(event) {
            Some(value) => {
                trace!(%value, "color scheme selected");
                self.on_change.call(Some(value));
                true
            }
            None if self.clearable => {
                trace!("color scheme cleared");
                self.on_change.call(None);
                true
            }
            None => {
                debug!("ignoring clear of a non clearable control");
                false
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<Option<String>>>>, OnChange) {
        let calls = Arc::new(Mutex::new(vec![]));
        let c = Arc::clone(&calls);
        (calls, OnChange::new(move |v| c.lock().unwrap().push(v)))
    }

    fn option(value: &str) -> SchemeOption {
        SchemeOption {
            value: value.to_string(),
            label: value.to_string(),
            preview: SwatchStrip { id: value.to_string(), label: None,
                                   swatches: vec![] },
        }
    }

    #[test]
    fn both_bindings_forward_the_identifier() {
        let (calls, f) = recorder();
        let d = Dispatcher::new(false, f);
        assert!(d.dispatch::<Current>(Some("fire".to_string())));
        assert!(d.dispatch::<Legacy>(Some(option("d3Category10"))));
        assert_eq!(*calls.lock().unwrap(),
                   [Some("fire".to_string()), Some("d3Category10".to_string())]);
    }

    #[test]
    fn clear() {
        let (calls, f) = recorder();
        let d = Dispatcher::new(false, f.clone());
        assert!(!d.dispatch::<Current>(None));
        assert!(!d.dispatch::<Legacy>(None));
        assert!(calls.lock().unwrap().is_empty());
        let d = Dispatcher::new(true, f);
        assert!(d.dispatch::<Legacy>(None));
        assert_eq!(*calls.lock().unwrap(), [None]);
    }
}
