use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

/// Смещение прокрутки, после которого навбар считается "прокрученным".
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Глобальные UI-переключатели приложения.
///
/// Состояние директорий (фильтры, избранное) сюда не попадает: каждое
/// представление домена владеет своим состоянием эксклюзивно.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub admin_mode: RwSignal<bool>,
    pub scrolled: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            admin_mode: RwSignal::new(false),
            scrolled: RwSignal::new(false),
        }
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        let scrolled = is_scrolled(offset);
        // Only write when the flag flips to avoid re-rendering on every scroll event
        if self.scrolled.get_untracked() != scrolled {
            self.scrolled.set(scrolled);
        }
    }

    pub fn init_scroll_tracking(&self) {
        let this = *self;
        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            this.set_scroll_offset(offset);
        });
        on_cleanup(move || handle.remove());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Достать контекст, предоставленный в `App`
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(400.0));
    }
}
