use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub title: Option<String>,
}

/// Inline error region. Stays on screen until the view is re-mounted.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div role="alert" class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{props.title.as_deref().unwrap_or("Something went wrong")}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
        </div>
    }
}
