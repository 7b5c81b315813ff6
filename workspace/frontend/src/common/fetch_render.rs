use yew::prelude::*;
use crm_common::FetchState;
use super::loading::Loading;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub loading_text: Option<String>,
    #[prop_or_default]
    pub error_title: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.error_title == other.error_title
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows loading spinner, nothing else
/// - Error: shows the inline error region
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::Loading => html! {
            <Loading text={props.loading_text.clone()} />
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} title={props.error_title.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
