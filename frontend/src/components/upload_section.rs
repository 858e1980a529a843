use super::super::Model;
use super::super::Msg;
use super::super::SAMPLE_IDS;
use super::utils::{debounce, extract_image_file};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input.files().as_ref().and_then(extract_image_file);

        input.set_value("");

        match picked {
            Some(file) => Msg::FilePicked(file),
            None => Msg::SetInputError(Some("No valid image file selected.".into())),
        }
    });

    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    // The document-level listener closes the menu; the toggle swallows its
    // own click so it does not immediately re-close.
    let toggle_menu = link.callback(|e: MouseEvent| {
        e.stop_propagation();
        Msg::ToggleSampleMenu
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="action-btn"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Upload file"}
            </button>

            <div class="sample-picker">
                <button class="action-btn" onclick={toggle_menu}>
                    <i class="fa-solid fa-image"></i> {" Pick a sample"}
                </button>
                { render_sample_menu(model, ctx) }
            </div>
        </div>
    }
}

fn render_sample_menu(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.show_sample_menu {
        return html! {};
    }

    let link = ctx.link();

    html! {
        <div
            class="sample-menu"
            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            role="menu"
        >
            { for SAMPLE_IDS.iter().map(|&id| {
                let pick = link.callback(move |_| Msg::SamplePicked(id));
                html! {
                    <button class="sample-item" key={id.to_string()} onclick={pick} role="menuitem">
                        <img
                            src={format!("/assets/samples/sample_{}.jpg", id)}
                            alt={format!("Sample {}", id)}
                        />
                        <span>{ format!("Sample {}", id) }</span>
                    </button>
                }
            })}
        </div>
    }
}
