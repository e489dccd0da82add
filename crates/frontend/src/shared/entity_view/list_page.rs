use leptos::prelude::*;
use thaw::*;

use super::{entity_form_modal, EditableEntity};
use crate::shared::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::shared::components::notification_toast::NotificationToasts;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_form::SearchForm;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_controller::use_list_controller;
use crate::shared::list_utils::row_class;

/// Paginated, sortable, searchable table of one resource with the
/// recently viewed highlight, the delete prompt and the create/edit form.
pub fn entity_list_page<E: EditableEntity>() -> impl IntoView {
    let ctl = use_list_controller::<E>();
    let resource = E::RESOURCE;

    // None: form closed, Some(None): create, Some(Some(e)): edit e
    let editing: RwSignal<Option<Option<E>>> = RwSignal::new(None);

    let on_saved = Callback::new(move |message: Option<String>| {
        editing.set(None);
        ctl.saved(message);
    });
    let on_form_close = Callback::new(move |_| editing.set(None));
    let on_sort = Callback::new(move |field: String| ctl.change_sort(&field));
    let deleting = Signal::derive(move || ctl.delete.with(|d| d.is_busy()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{resource.title()}</h1>
                    <Badge>{move || ctl.total().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " Nuevo"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctl.refetch()
                        disabled=Signal::derive(move || ctl.loading())
                    >
                        {icon("refresh")}
                        {move || if ctl.loading() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || ctl.error().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchForm
                                value=Signal::derive(move || ctl.view.with(|s| s.search_input.clone()))
                                on_input=Callback::new(move |text: String| ctl.set_search_input(text))
                                on_submit=Callback::new(move |_| ctl.submit_search())
                                on_clear=Callback::new(move |_| ctl.clear_search())
                                placeholder=format!("Buscar {}...", resource.title().to_lowercase())
                                disabled=Signal::derive(move || ctl.loading())
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || ctl.view.with(|s| s.page))
                                total_pages=Signal::derive(move || ctl.total_pages())
                                total_count=Signal::derive(move || ctl.total())
                                page_size=Signal::derive(move || ctl.view.with(|s| s.page_size))
                                on_page_change=Callback::new(move |page: u32| ctl.go_to_page(page))
                                on_page_size_change=Callback::new(move |size: u32| ctl.change_page_size(size))
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {E::columns()
                                    .iter()
                                    .map(|column| view! {
                                        <SortableHeaderCell
                                            label=column.label
                                            sort_field=column.sort_field
                                            current_sort_field=Signal::derive(move || ctl.view.with(|s| s.sort_field.clone()))
                                            sort_direction=Signal::derive(move || ctl.view.with(|s| s.sort_direction))
                                            on_sort=on_sort
                                        />
                                    })
                                    .collect_view()}
                                <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || ctl.items()
                                // cells are part of the key so edited rows re-render
                                key=|item: &E| (item.id(), item.cells())
                                children=move |item: E| {
                                    let id = item.id_string();
                                    let id_for_class = id.clone();
                                    let id_for_view = id.clone();
                                    let detail_href = resource.detail_route(&id);
                                    let item_for_edit = item.clone();
                                    view! {
                                        <tr class=move || format!(
                                            "thaw-table-row {}",
                                            row_class(ctl.highlight.with(|h| h.is_highlighted(&id_for_class)))
                                        )>
                                            {item
                                                .cells()
                                                .into_iter()
                                                .map(|cell| view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                    </TableCell>
                                                })
                                                .collect_view()}
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        class="button button--icon"
                                                        href=detail_href
                                                        title="Ver"
                                                        on:click=move |_| ctl.remember_viewed(&id_for_view)
                                                    >
                                                        {icon("eye")}
                                                    </a>
                                                    <button
                                                        class="button button--icon"
                                                        title="Editar"
                                                        on:click=move |_| editing.set(Some(Some(item_for_edit.clone())))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Eliminar"
                                                        disabled=move || deleting.get()
                                                        on:click=move |_| ctl.request_delete(id.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </tr>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !ctl.loading() && ctl.error().is_none() && ctl.items().is_empty()>
                        <div class="table__empty">"No hay registros"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDeleteModal
                flow=ctl.delete
                entity_label=resource.singular_label()
                on_confirm=Callback::new(move |_| ctl.confirm_delete())
                on_cancel=Callback::new(move |_| ctl.cancel_delete())
            />
            <NotificationToasts
                center=ctl.notifications
                on_dismiss=Callback::new(move |id: u64| ctl.dismiss_notification(id))
            />
            {move || editing.get().map(|target| entity_form_modal::<E>(target, on_saved, on_form_close))}
        </div>
    }
}
