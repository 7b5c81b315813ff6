use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TitledPanelProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
    /// Summary line under the content, e.g. "Total Projects: 4".
    #[prop_or_default]
    pub total: Option<AttrValue>,
    #[prop_or_default]
    pub additional_info: Option<AttrValue>,
    /// Span both grid columns.
    #[prop_or_default]
    pub wide: bool,
}

/// A titled dashboard card wrapping arbitrary content.
#[function_component(TitledPanel)]
pub fn titled_panel(props: &TitledPanelProps) -> Html {
    let class = classes!(
        "card",
        "bg-base-100",
        "shadow",
        props.wide.then_some("md:col-span-2"),
    );

    html! {
        <div {class}>
            <div class="card-body">
                <h2 class="card-title">{props.title.as_str()}</h2>
                { for props.children.iter() }
                if let Some(total) = &props.total {
                    <p class="mt-2 text-gray-600">{total.as_str()}</p>
                }
                if let Some(info) = &props.additional_info {
                    <p class="mt-1 text-gray-600">{info.as_str()}</p>
                }
            </div>
        </div>
    }
}
