//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use studio_core::config::AppConfig;
use studio_core::form::AppointmentForm;

/// Record shown in the detail modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTarget {
    Case(u32),
    Designer(u32),
}

/// App-wide config and UI toggles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Appointment modal visible - read
    pub appointment_open: ReadSignal<bool>,
    /// Appointment modal visible - write
    set_appointment_open: WriteSignal<bool>,
    /// Mobile nav links expanded - read
    pub menu_open: ReadSignal<bool>,
    /// Mobile nav links expanded - write
    set_menu_open: WriteSignal<bool>,
    /// Case or designer in the detail modal (None = closed) - read
    pub detail: ReadSignal<Option<DetailTarget>>,
    /// Case or designer in the detail modal (None = closed) - write
    set_detail: WriteSignal<Option<DetailTarget>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (appointment_open, set_appointment_open) = signal(false);
        let (menu_open, set_menu_open) = signal(false);
        let (detail, set_detail) = signal::<Option<DetailTarget>>(None);
        Self {
            config: StoredValue::new(config),
            appointment_open,
            set_appointment_open,
            menu_open,
            set_menu_open,
            detail,
            set_detail,
        }
    }

    /// Owned copy for moving into a request future
    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn open_appointment(&self) {
        self.set_appointment_open.set(true);
    }

    pub fn close_appointment(&self) {
        self.set_appointment_open.set(false);
    }

    /// Booking accepted: blank the form for the next visitor and hide the modal
    pub fn finish_appointment(&self, form: RwSignal<AppointmentForm>) {
        form.set(AppointmentForm::default());
        self.close_appointment();
    }

    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.set_menu_open.set(false);
    }

    pub fn show_detail(&self, target: DetailTarget) {
        self.set_detail.set(Some(target));
    }

    pub fn close_detail(&self) {
        self.set_detail.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::form::FormField;

    #[test]
    fn test_finish_appointment_resets_and_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppConfig::default());
            let form = RwSignal::new(AppointmentForm::default());

            ctx.open_appointment();
            form.update(|f| {
                f.set(FormField::ClientName, "李女士".to_string());
                f.set(FormField::ClientPhone, "13800000000".to_string());
                f.set(FormField::Message, "旧房翻新".to_string());
            });
            assert!(ctx.appointment_open.get_untracked());

            ctx.finish_appointment(form);

            assert!(!ctx.appointment_open.get_untracked());
            assert_eq!(form.get_untracked(), AppointmentForm::default());
        });
    }

    #[test]
    fn test_menu_and_detail_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppConfig::default());

            ctx.toggle_menu();
            assert!(ctx.menu_open.get_untracked());
            ctx.close_menu();
            assert!(!ctx.menu_open.get_untracked());

            ctx.show_detail(DetailTarget::Designer(7));
            assert_eq!(ctx.detail.get_untracked(), Some(DetailTarget::Designer(7)));
            ctx.close_detail();
            assert_eq!(ctx.detail.get_untracked(), None);
        });
    }
}
