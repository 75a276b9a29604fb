//! Notifications
//!
//! Toast queue. Each notice removes itself after its display time.

use leptos::*;
use workout_tracker::Notice;

/// Notices currently on screen, oldest first
#[derive(Clone, Copy)]
pub struct Notices {
    pub items: RwSignal<Vec<(u32, Notice)>>,
    next_id: StoredValue<u32>,
}

/// Provide the notice queue to the component tree
pub fn provide_notices() {
    provide_context(Notices {
        items: create_rw_signal(Vec::new()),
        next_id: store_value(0),
    });
}

pub fn use_notices() -> Notices {
    use_context::<Notices>().expect("Notices not found")
}

impl Notices {
    /// Show a notice (auto-clears after timeout)
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        let timeout = notice.display_ms();
        self.items.update(|items| items.push((id, notice)));

        let items = self.items;
        gloo_timers::callback::Timeout::new(timeout, move || {
            items.update(|items| items.retain(|(i, _)| *i != id));
        })
        .forget();
    }

    pub fn success(&self, message: &str) {
        self.push(Notice::success(message));
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|(i, _)| *i != id));
    }
}
