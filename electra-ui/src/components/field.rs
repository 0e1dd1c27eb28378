//! Form Fields
//!
//! Labelled inputs bound to string signals.

use leptos::*;

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 \
                           focus:border-primary-500 focus:outline-none";

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <textarea
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

/// Dropdown over fixed options; the empty value shows `placeholder`
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                on:change=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASS
            >
                {placeholder.map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        let current = option.clone();
                        view! {
                            <option value=option selected=move || value.get() == current>{text}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Submit button that disables itself while `busy`
#[component]
pub fn SubmitButton(
    label: &'static str,
    busy: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || busy.get()
            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if busy.get() {
                view! {
                    <div class="loading-spinner w-5 h-5" />
                    <span>"Saving..."</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
