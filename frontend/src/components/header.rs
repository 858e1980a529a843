use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-microscope"></i> {" Malaria Detection"}</h1>
            <p class="subtitle">{"Blood-smear analysis in the browser"}</p>
        </header>
    }
}
