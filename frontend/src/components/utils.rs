use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{is_supported_media_type, ViewModel};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Picks the first image file out of a selection; anything without an
/// `image/*` media type is skipped and never becomes a payload.
pub fn extract_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| {
            let accepted = is_supported_media_type(&file.type_());
            if !accepted {
                log::warn!("Skipping non-image file: {}", file.name());
            }
            accepted
        })
        .map(GlooFile::from)
}

/// Renders the input-capture error when present, otherwise the failure of
/// the latest request. Both are opaque display strings.
pub fn render_error_message(input_error: &Option<String>, vm: &ViewModel) -> Html {
    let message = input_error.as_ref().or(vm.error_message.as_ref());

    if let Some(error_msg) = message {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
