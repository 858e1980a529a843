use shared::{Detection, ViewModel};
use yew::prelude::*;

pub fn render_results(vm: &ViewModel) -> Html {
    html! {
        <div class="results-panel">
            <div class="results-header">
                <h2>{"Detection Results"}</h2>
                <span class="detection-speed">
                    { format!("Detection speed: {}", vm.timing_label) }
                </span>
            </div>
            {
                if vm.is_loading {
                    html! {
                        <div class="results-loading">
                            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                        </div>
                    }
                } else if let Some(annotated) = &vm.annotated_image {
                    render_result_body(annotated, &vm.detections)
                } else {
                    html! {
                        <div class="results-placeholder">
                            <p>{"Select a sample to view the results here"}</p>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn render_result_body(annotated: &str, detections: &[Detection]) -> Html {
    html! {
        <div class="results-body">
            <img
                class="annotated-image"
                src={format!("data:image/jpeg;base64,{}", annotated)}
                alt="Detection Results"
            />

            <h3>{"Found malaria parasites"}</h3>
            {
                if detections.is_empty() {
                    html! {
                        <p class="no-detections">
                            {"No detections found. Try uploading a different image."}
                        </p>
                    }
                } else {
                    html! {
                        <div class="detections-grid">
                            { for detections.iter().map(render_detection) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn render_detection(detection: &Detection) -> Html {
    // WBCs get the green ring, parasite stages the red one.
    let ring = if detection.label == "WBC" { "wbc" } else { "parasite" };

    html! {
        <div class="detection-item">
            <img
                class={classes!("detection-thumbnail", ring)}
                src={format!("data:image/jpeg;base64,{}", detection.thumbnail)}
                alt={detection.label.clone()}
            />
            <div class="detection-label">{ &detection.label }</div>
            <div class="detection-confidence">{ format!("{}%", detection.confidence) }</div>
        </div>
    }
}
