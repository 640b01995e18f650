use crate::domain::Theme;
use crate::error::StoreError;
use crate::persistence::{SlotStorage, THEME_SLOT};
use tracing::{debug, warn};

/// The active theme and its durable copy in the `theme` slot
pub struct ThemePreference<S: SlotStorage> {
    storage: S,
    current: Theme,
}

impl<S: SlotStorage> ThemePreference<S> {
    /// Load the stored theme. Missing, unreadable or unknown values give `Light`.
    pub fn load(storage: S) -> Self {
        let current = match storage.read(THEME_SLOT) {
            Ok(Some(bytes)) => std::str::from_utf8(&bytes)
                .ok()
                .and_then(Theme::from_slot)
                .unwrap_or_else(|| {
                    let value = String::from_utf8_lossy(&bytes);
                    debug!(value = %value, "unknown stored theme, using default");
                    Theme::default()
                }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(
                    error = %format!("{:#}", e),
                    "could not read stored theme, using default"
                );
                Theme::default()
            }
        };

        Self { storage, current }
    }

    /// Switch to the other theme and store it
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(source) = self.storage.write(THEME_SLOT, self.current.as_slot()) {
            let err = StoreError::DurablePersistFailure {
                slot: THEME_SLOT,
                source,
            };
            warn!(error = %err, "theme kept in memory only");
        }
        debug!(theme = %self.current, class = self.current.class_name(), "theme switched");
        self.current
    }

    pub fn current(&self) -> Theme {
        self.current
    }
}
