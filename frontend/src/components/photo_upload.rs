use crate::services::logging::Logger;
use gloo::file::callbacks::FileReader;
use gloo::file::File;
use std::collections::HashMap;
use web_sys::{DragEvent, Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PhotoUploadProps {
    /// Decoded photos in completion order
    pub photos: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
}

/// Photo upload with drag & drop and per-thumbnail removal.
///
/// Non-image files are skipped silently. Reads complete in any order;
/// each read appends its own data URL, and removal matches on the exact
/// decoded value rather than position.
#[function_component(PhotoUpload)]
pub fn photo_upload(props: &PhotoUploadProps) -> Html {
    let drag_over = use_state(|| false);
    // Keep reader handles alive until their callback has fired
    let readers = use_mut_ref(HashMap::<String, FileReader>::new);

    let process_files = {
        let on_add = props.on_add.clone();
        let readers = readers.clone();

        move |files: Vec<File>| {
            for file in files {
                if !file.raw_mime_type().starts_with("image/") {
                    Logger::debug_with_component(
                        "photo-upload",
                        &format!("bestand '{}' overgeslagen (geen afbeelding)", file.name()),
                    );
                    continue;
                }

                let file_name = file.name();
                let reader = {
                    let on_add = on_add.clone();
                    let readers = readers.clone();
                    let file_name = file_name.clone();

                    gloo::file::callbacks::read_as_data_url(&file, move |result| {
                        readers.borrow_mut().remove(&file_name);
                        match result {
                            Ok(data_url) => on_add.emit(data_url),
                            Err(err) => Logger::warn_with_component(
                                "photo-upload",
                                &format!("kon '{}' niet lezen: {}", file_name, err),
                            ),
                        }
                    })
                };
                readers.borrow_mut().insert(file_name, reader);
            }
        }
    };

    let on_input_change = {
        let process_files = process_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            process_files(files_from_list(input.files()));
            // Allow picking the same file again later
            input.set_value("");
        })
    };

    let on_drag_enter = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(true);
        })
    };

    let on_drag_over = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(true);
        })
    };

    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(false);
        })
    };

    let on_drop = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(false);

            let files = files_from_list(e.data_transfer().and_then(|transfer| transfer.files()));
            process_files(files);
        })
    };

    html! {
        <div class="photo-upload">
            <div
                class={classes!("upload-container", (*drag_over).then(|| "drag-over"))}
                ondragenter={on_drag_enter}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                <label class="upload-label">
                    {"Sleep foto's hierheen of klik om te kiezen"}
                    <input
                        type="file"
                        class="upload-input"
                        accept="image/*"
                        multiple=true
                        onchange={on_input_change}
                    />
                </label>
            </div>

            <div class="photo-preview">
                {for props.photos.iter().map(|photo| {
                    let on_remove = props.on_remove.clone();
                    let data_url = photo.clone();

                    html! {
                        <div class="photo-item">
                            <img src={photo.clone()} alt="Foto van de klus" />
                            <button
                                type="button"
                                class="remove-photo"
                                onclick={Callback::from(move |_: MouseEvent| on_remove.emit(data_url.clone()))}
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

fn files_from_list(list: Option<web_sys::FileList>) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.item(index) {
                files.push(File::from(file));
            }
        }
    }
    files
}
