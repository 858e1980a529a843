use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use shared::{project, DetectionResult, ErrorInfo, Session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod components;
mod sources;

use api::DetectClient;
use components::header::render_header;
use components::results::render_results;
use components::theme_toggle::render_theme_toggle;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use sources::ImageSource;

/// Sample smears bundled with the site.
pub const SAMPLE_IDS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

// Yew msg components
pub enum Msg {
    // Submissions
    FilePicked(GlooFile),
    SamplePicked(u32),
    RequestFinished(u64, Box<Result<DetectionResult, ErrorInfo>>),

    // UI states
    SetInputError(Option<String>),
    ToggleSampleMenu,
    CloseSampleMenu,
    ToggleTheme,
}

// Main component
pub struct Model {
    pub session: Session,
    pub client: DetectClient,
    pub show_sample_menu: bool,
    pub input_error: Option<String>,
    pub theme: String,
    menu_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: Session::new(),
            client: DetectClient::default(),
            show_sample_menu: false,
            input_error: None,
            theme: "light".to_string(),
            menu_listener: None,
        };

        // Any click that the sample menu does not swallow closes it.
        let link = ctx.link().clone();
        let document = web_sys::window()
            .expect("no global `window` exists")
            .document()
            .expect("window has no document");
        let listener = EventListener::new(&document, "click", move |_| {
            link.send_message(Msg::CloseSampleMenu);
        });
        model.menu_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Submissions
            Msg::FilePicked(file) => self.submit(ctx, ImageSource::Upload(file)),
            Msg::SamplePicked(id) => self.submit(ctx, ImageSource::Sample(id)),
            Msg::RequestFinished(token, outcome) => self.handle_request_finished(token, *outcome),

            // UI states
            Msg::SetInputError(message) => {
                self.input_error = message;
                true
            }
            Msg::ToggleSampleMenu => {
                self.show_sample_menu = !self.show_sample_menu;
                true
            }
            Msg::CloseSampleMenu => {
                if self.show_sample_menu {
                    self.show_sample_menu = false;
                    true
                } else {
                    false
                }
            }
            Msg::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let vm = project(self.session.state());

        html! {
            <div class="container">
                { render_header() }
                { render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    <div class="left-column">
                        <section class="intro">
                            <h2>{"Welcome to the Malaria Detection App"}</h2>
                            <p>{"Upload an image to detect malaria-infected cells. \
                                Choose a file from your device, or select a blood \
                                sample provided on the website."}</p>
                        </section>
                        { render_upload_section(self, ctx) }
                        { render_error_message(&self.input_error, &vm) }
                    </div>
                    <div class="right-column">
                        { render_results(&vm) }
                    </div>
                </main>

                <footer class="app-footer">
                    <p>{"Malaria Detection | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    /// Kicks off a detection request. The session moves to Loading before
    /// anything is awaited, so the previous result disappears immediately,
    /// and the token decides later whether the completion still matters.
    fn submit(&mut self, ctx: &Context<Self>, source: ImageSource) -> bool {
        self.input_error = None;
        self.show_sample_menu = false;

        let token = self.session.begin();
        log::debug!("submitting detection request {}", token);

        let client = self.client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = match sources::resolve(source).await {
                Ok(payload) => client.detect(payload).await,
                Err(error) => Err(error),
            };
            link.send_message(Msg::RequestFinished(token, Box::new(outcome)));
        });

        true
    }

    fn handle_request_finished(
        &mut self,
        token: u64,
        outcome: Result<DetectionResult, ErrorInfo>,
    ) -> bool {
        if let Err(error) = &outcome {
            log::warn!("detection request {} failed: {}", token, error);
        }
        let applied = self.session.finish(token, outcome);
        if !applied {
            log::debug!("discarding completion of superseded request {}", token);
        }
        applied
    }

    fn handle_toggle_theme(&mut self) -> bool {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

        if self.theme == "light" {
            self.theme = "dark".to_string();
            body.class_list().add_1("dark-mode").unwrap();
        } else {
            self.theme = "light".to_string();
            body.class_list().remove_1("dark-mode").unwrap();
        }

        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
