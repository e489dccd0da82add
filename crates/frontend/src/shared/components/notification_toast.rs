use crate::shared::icons::icon;
use crate::shared::list_controller::notification::{NotificationCenter, NotificationKind};
use leptos::prelude::*;

/// Stack of floating notifications, newest last
#[component]
pub fn NotificationToasts(
    center: RwSignal<NotificationCenter>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || center.with(|c| c.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{n.message}</span>
                            <button class="toast__close" title="Cerrar" on:click=move |_| on_dismiss.run(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
