use dioxus::{document, prelude::*};
use tokio::time::sleep;
use uuid::Uuid;

use crate::app::SharedClassifier;
use crate::domain::{AnalysisResult, LeafImage};
use crate::ui::theme;

const FILE_INPUT_ID: &str = "leaf-file-input";
const DROP_ZONE_ID: &str = "leaf-drop-zone";

#[component]
pub fn DiseaseDetectionPage() -> Element {
    let classifier = use_context::<SharedClassifier>();

    let image = use_signal(|| None::<LeafImage>);
    let result = use_signal(|| None::<AnalysisResult>);
    let analyzing = use_signal(|| false);
    let mut drag_over = use_signal(|| false);
    // Ticket of the analysis run whose result we still want. A run that
    // finishes after being superseded finds a different ticket and is
    // discarded instead of overwriting the newer state.
    let active_ticket = use_signal(|| None::<Uuid>);

    let on_file_change = {
        let image = image.clone();
        let result = result.clone();
        let analyzing = analyzing.clone();
        let active_ticket = active_ticket.clone();
        move |_| load_selected_file(image.clone(), result.clone(), analyzing.clone(), active_ticket.clone())
    };

    let on_analyze = {
        let classifier = classifier.clone();
        let image = image.clone();
        let result = result.clone();
        let analyzing = analyzing.clone();
        let active_ticket = active_ticket.clone();
        move |_| {
            let Some(upload) = image() else {
                return;
            };
            let ticket = Uuid::new_v4();
            let mut active_ticket = active_ticket.clone();
            active_ticket.set(Some(ticket));
            let mut analyzing = analyzing.clone();
            analyzing.set(true);

            let classifier = classifier.clone();
            let mut result = result.clone();
            let active_ticket = active_ticket.clone();
            spawn(async move {
                sleep(classifier.latency()).await;
                let outcome = classifier.classify(&upload);
                if active_ticket() == Some(ticket) {
                    result.set(Some(outcome));
                    analyzing.set(false);
                }
            });
        }
    };

    let has_image = image.with(|img| img.is_some());
    let preview_uri = image.with(|img| img.as_ref().map(|upload| upload.data_uri().to_string()));
    let is_analyzing = analyzing();
    let analysis = result();

    let drop_zone_class = if drag_over() {
        "flex cursor-pointer flex-col items-center justify-center rounded-xl border-2 border-dashed border-emerald-500 bg-emerald-50 p-10 transition-colors"
    } else {
        "flex cursor-pointer flex-col items-center justify-center rounded-xl border-2 border-dashed border-slate-300 p-10 transition-colors hover:border-emerald-400"
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "{theme::page_title()}", "Disease Detection 🔬" }
                p { class: "{theme::page_subtitle()}", "Upload a crop leaf image for AI-powered disease analysis." }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "{theme::card()} p-6",
                    h2 { class: "{theme::card_title()}", "Upload Image" }
                    div {
                        id: DROP_ZONE_ID,
                        class: "mt-4 {drop_zone_class}",
                        onmounted: move |_| install_drop_bridge(),
                        onclick: move |_| open_file_picker(),
                        ondragover: move |evt| {
                            evt.prevent_default();
                            drag_over.set(true);
                        },
                        ondragleave: move |_| drag_over.set(false),
                        ondrop: move |evt| {
                            evt.prevent_default();
                            drag_over.set(false);
                        },
                        if let Some(uri) = preview_uri {
                            img { class: "max-h-64 rounded-lg object-contain", src: "{uri}", alt: "Uploaded crop leaf" }
                        } else {
                            span { class: "mb-4 text-4xl", "📷" }
                            p { class: "text-sm font-medium text-slate-700", "Drag & drop your crop leaf image" }
                            p { class: "mt-1 text-xs {theme::text_muted()}", "or click to browse files" }
                        }
                        input {
                            id: FILE_INPUT_ID,
                            class: "hidden",
                            r#type: "file",
                            accept: "image/*",
                            onchange: on_file_change,
                        }
                    }
                    if has_image {
                        button {
                            class: "{theme::btn_primary()} mt-4 w-full",
                            disabled: is_analyzing,
                            onclick: on_analyze,
                            if is_analyzing { "Analyzing..." } else { "Analyze Image" }
                        }
                    }
                }

                section { class: "{theme::card()} p-6",
                    h2 { class: "{theme::card_title()}", "Analysis Result" }
                    if let Some(analysis) = analysis {
                        div { class: "mt-4 animate-fade-in space-y-5",
                            div { class: "flex items-center gap-3",
                                span { class: "text-2xl", "⚠️" }
                                div {
                                    p { class: "text-sm {theme::text_muted()}", "Disease Detected" }
                                    p { class: "text-xl font-bold text-slate-900", "{analysis.disease}" }
                                }
                            }
                            div { class: "flex items-center gap-3",
                                span { class: "text-2xl", "✅" }
                                div {
                                    p { class: "text-sm {theme::text_muted()}", "Confidence" }
                                    span { class: "inline-flex items-center rounded-full border border-emerald-200 bg-emerald-100 px-2 py-0.5 text-base font-semibold text-emerald-700",
                                        "{analysis.confidence}%"
                                    }
                                }
                            }
                            div { class: "rounded-xl bg-emerald-50 p-4",
                                p { class: "mb-1 text-sm font-semibold text-emerald-900", "💊 Treatment Recommendation" }
                                p { class: "text-sm {theme::text_muted()}", "{analysis.treatment}" }
                            }
                        }
                    } else {
                        div { class: "flex h-48 items-center justify-center {theme::text_muted()}",
                            p { class: "text-sm", "Upload and analyze an image to see results." }
                        }
                    }
                }
            }
        }
    }
}

/// Reads the picked file inside the webview and hands back a data URI.
/// Non-image files are dropped without any error surface, matching the
/// upload contract.
fn load_selected_file(
    mut image: Signal<Option<LeafImage>>,
    mut result: Signal<Option<AnalysisResult>>,
    mut analyzing: Signal<bool>,
    mut active_ticket: Signal<Option<Uuid>>,
) {
    let script = format!(
        r#"(() => {{
            const input = document.getElementById('{FILE_INPUT_ID}');
            const file = input && input.files ? input.files[0] : null;
            if (!file || !file.type.startsWith('image/')) {{
                dioxus.send(null);
                return;
            }}
            const reader = new FileReader();
            reader.onload = () => dioxus.send(reader.result);
            reader.onerror = () => dioxus.send(null);
            reader.readAsDataURL(file);
        }})()"#
    );
    let mut eval = document::eval(&script);
    spawn(async move {
        match eval.recv::<Option<String>>().await {
            Ok(Some(data)) => {
                if let Some(upload) = LeafImage::from_data_uri(data) {
                    image.set(Some(upload));
                    // A fresh upload invalidates any result or in-flight run.
                    result.set(None);
                    analyzing.set(false);
                    active_ticket.set(None);
                }
            }
            Ok(None) => {}
            Err(err) => println!("File read bridge failed: {err}"),
        }
    });
}

fn open_file_picker() {
    let script = format!(
        r#"(() => {{
            const input = document.getElementById('{FILE_INPUT_ID}');
            if (input) {{ input.click(); }}
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        let _ = eval.await;
    });
}

/// Routes files dropped on the zone into the hidden input, so both entry
/// paths share the same change handler. Installed once per mount.
fn install_drop_bridge() {
    let script = format!(
        r#"(() => {{
            const zone = document.getElementById('{DROP_ZONE_ID}');
            const input = document.getElementById('{FILE_INPUT_ID}');
            if (!zone || !input || zone.dataset.dropBridge) {{
                return;
            }}
            zone.dataset.dropBridge = '1';
            zone.addEventListener('dragover', (e) => e.preventDefault());
            zone.addEventListener('drop', (e) => {{
                e.preventDefault();
                if (e.dataTransfer && e.dataTransfer.files.length) {{
                    input.files = e.dataTransfer.files;
                    input.dispatchEvent(new Event('change', {{ bubbles: true }}));
                }}
            }});
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        let _ = eval.await;
    });
}
