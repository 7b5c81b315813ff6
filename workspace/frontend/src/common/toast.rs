use crm_common::{Notifier, Severity};
use yew::prelude::*;

use crate::settings;

fn alert_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "alert-info",
        Severity::Success => "alert-success",
        Severity::Warning => "alert-warning",
        Severity::Error => "alert-error",
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "fas fa-info-circle",
        Severity::Success => "fas fa-check-circle",
        Severity::Warning => "fas fa-exclamation-triangle",
        Severity::Error => "fas fa-exclamation-circle",
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, Severity)>,
}

impl Notifier for ToastContext {
    fn notify(&self, message: &str, severity: Severity) {
        log::debug!("Toast ({:?}): {}", severity, message);
        self.add_toast.emit((message.to_string(), severity));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Mutable handles so that toasts added from the same async task (or a
    // dismiss timer firing late) see each other's updates.
    let toasts = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0usize);
    let update = use_force_update();

    let remove_toast = {
        let toasts = toasts.clone();
        let update = update.clone();

        Callback::from(move |id: usize| {
            toasts.borrow_mut().retain(|t| t.id != id);
            update.force_update();
        })
    };

    let add_toast = {
        let toasts = toasts.clone();
        let remove_toast = remove_toast.clone();
        let update = update.clone();

        Callback::from(move |(message, severity): (String, Severity)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                let id = *next_id;
                *next_id += 1;
                id
            };

            toasts.borrow_mut().push(Toast {
                id,
                message,
                severity,
            });
            update.force_update();

            let remove_toast = remove_toast.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || remove_toast.emit(id)).forget();
        })
    };

    let current = toasts.borrow().clone();
    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for current.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", alert_class(toast.severity), "shadow-lg")}>
                            <i class={icon(toast.severity)}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
