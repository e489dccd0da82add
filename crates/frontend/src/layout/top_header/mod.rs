//! Top bar: sidebar toggle and console title

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"CEIC · Administración escolar"</span>
            </div>
        </div>
    }
}
