use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{entity_form_modal, EditableEntity};
use crate::shared::components::notification_toast::NotificationToasts;
use crate::shared::icons::icon;
use crate::shared::list_controller::notification::{NotificationCenter, NotificationKind};
use crate::shared::list_controller::notify;
use crate::shared::rest_client;

/// Read-only view of one entity with an edit action and a way back to the list
pub fn entity_details_page<E: EditableEntity>(id: String) -> impl IntoView {
    let resource = E::RESOURCE;
    let item: RwSignal<Option<E>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading = RwSignal::new(false);
    let editing = RwSignal::new(false);
    let notifications = RwSignal::new(NotificationCenter::default());

    let load = {
        let id = id.clone();
        move || {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                let result = rest_client::fetch_one::<E>(resource, &id).await;
                if loading.try_update(|l| *l = false).is_none() {
                    return;
                }
                match result {
                    Ok(entity) => {
                        item.set(Some(entity));
                        error.set(None);
                    }
                    Err(err) => {
                        log::error!("GET /{}/{} failed: {}", resource.path(), id, err);
                        error.set(Some(err.user_message()));
                    }
                }
            });
        }
    };
    load();

    let on_saved = Callback::new(move |message: Option<String>| {
        editing.set(false);
        notify(
            notifications,
            NotificationKind::Success,
            message.unwrap_or_else(|| "Cambios guardados".to_string()),
        );
        load();
    });
    let on_close = Callback::new(move |_| editing.set(false));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <a class="button button--icon" href=resource.list_route() title="Volver">
                        {icon("arrow-left")}
                    </a>
                    <h1 class="page__title">
                        {move || item.with(|i| match i {
                            Some(entity) => entity.display_name(),
                            None => format!("{} #{}", resource.singular_label(), id),
                        })}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(true)
                        disabled=Signal::derive(move || item.with(Option::is_none))
                    >
                        {icon("edit")}
                        " Editar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || loading.get()>
                    <div class="page__loading">"Cargando..."</div>
                </Show>
                {move || item.with(|i| i.as_ref().map(|entity| {
                    entity
                        .detail_rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="details-row">
                                <span class="details-row__label">{label}</span>
                                <span class="details-row__value">{value}</span>
                            </div>
                        })
                        .collect_view()
                }))}
            </div>

            <NotificationToasts
                center=notifications
                on_dismiss=Callback::new(move |nid: u64| notifications.update(|c| c.dismiss(nid)))
            />
            {move || {
                (editing.get())
                    .then(|| item.get())
                    .flatten()
                    .map(|entity| entity_form_modal::<E>(Some(entity), on_saved, on_close))
            }}
        </div>
    }
}
