use crate::bundle::{ComponentBundle, PinDescriptor};
use crate::view::HitResult;

/// The single piece of shared preview state: the currently highlighted pin
/// number, if any. Written only from the UI thread, once per pointer event,
/// after all views have reported their hit-test results.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pin: Option<String>,
}

impl SelectionState {
    pub fn select(&mut self, number: impl Into<String>) {
        self.pin = Some(number.into());
    }

    pub fn clear(&mut self) {
        self.pin = None;
    }

    /// Clicking a pin in any view selects it; clicking empty space clears.
    pub fn apply(&mut self, hit: HitResult) {
        match hit {
            HitResult::Pin(number) => self.select(number),
            HitResult::Background => self.clear(),
        }
    }

    pub fn pin_number(&self) -> Option<&str> {
        self.pin.as_deref()
    }

    pub fn is_selected(&self, number: &str) -> bool {
        self.pin.as_deref() == Some(number)
    }

    /// Resolve the selection against the current pin list. A stale number
    /// (e.g. a pad with no described pin) resolves to None; it is treated as
    /// no selection rather than actively cleared.
    pub fn resolve<'a>(&self, bundle: &'a ComponentBundle) -> Option<&'a PinDescriptor> {
        self.pin.as_deref().and_then(|number| bundle.pin(number))
    }
}
