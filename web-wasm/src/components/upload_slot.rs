//! Upload slot component
//!
//! One slot per document: click or drag-and-drop a single PDF, show the
//! selected file with a clear button.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement, MouseEvent};

use crate::app::UploadedDocument;

#[component]
pub fn UploadSlot(
    label: &'static str,
    document: ReadSignal<Option<UploadedDocument>>,
    set_document: WriteSignal<Option<UploadedDocument>>,
) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                if let Some(file) = files.get(0) {
                    read_file(file, set_document);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        // open the file picker via a synthetic input
        let dom = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = dom
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("file");
        input.set_accept(".pdf");

        let input_ref = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(files) = input_ref.files() {
                if let Some(file) = files.get(0) {
                    read_file(file, set_document);
                }
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    let on_clear = move |ev: MouseEvent| {
        ev.stop_propagation();
        set_document.set(None);
    };

    view! {
        <div class="upload-slot">
            <label>{label}</label>
            <div
                class=move || {
                    let mut classes = vec!["dropzone"];
                    if document.get().is_some() {
                        classes.push("selected");
                    }
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <Show
                    when=move || document.get().is_some()
                    fallback=|| view! {
                        <div class="upload-icon">"⬆"</div>
                        <p>"Click to upload"</p>
                        <p class="text-muted">"or drag & drop PDF"</p>
                    }
                >
                    <div class="upload-icon">"📄"</div>
                    <p class="file-name">
                        {move || document.get().map(|d| d.file_name).unwrap_or_default()}
                    </p>
                    <p class="text-muted ready">"Ready"</p>
                    <button class="clear-button" on:click=on_clear>"×"</button>
                </Show>
            </div>
        </div>
    }
}

fn read_file(file: File, set_document: WriteSignal<Option<UploadedDocument>>) {
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_document.set(Some(UploadedDocument {
                    file_name: file_name.clone(),
                    data_url,
                }));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
