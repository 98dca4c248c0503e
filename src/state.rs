use crate::config::today_in;
use crate::store::CountStore;
use chrono_tz::Tz;

#[derive(Clone)]
pub struct AppState {
    pub store: CountStore,
    pub timezone: Tz,
}

impl AppState {
    pub fn new(store: CountStore, timezone: Tz) -> Self {
        Self { store, timezone }
    }

    pub fn today(&self) -> String {
        today_in(self.timezone)
    }
}
