//! Settings panel component

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FS, FC>(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    on_save: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-key">"Gemini API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="Enter your API key..."
                    prop:value=move || api_key.get()
                    on:input=move |ev| {
                        set_api_key.set(event_target_value(&ev));
                    }
                />
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "Get an API key →"
                </a>
            </div>
            <div class="api-actions">
                <button
                    class="btn btn-secondary btn-small"
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    "Save"
                </button>
                <button
                    class="btn btn-tertiary btn-small"
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "Clear"
                </button>
            </div>
        </div>
    }
}
