use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Submit-triggered search box. Typing only updates the input; the query is
/// committed on Enter or on the search button.
#[component]
pub fn SearchForm(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_clear: Callback<()>,
    #[prop(into)]
    placeholder: String,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="search-form" on:submit=submit>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div class="search-form__input">
                    <input
                        type="search"
                        class="search-form__field"
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                    <Show when=move || !value.get().is_empty()>
                        <button
                            type="button"
                            class="search-form__clear"
                            title="Limpiar"
                            on:click=move |_| on_clear.run(())
                        >
                            {icon("x")}
                        </button>
                    </Show>
                </div>
                <button type="submit" class="button button--primary" disabled=move || disabled.get()>
                    {icon("search")}
                    " Buscar"
                </button>
            </Flex>
        </form>
    }
}
