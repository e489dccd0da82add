use contracts::domain::common::{Entity, Resource};
use contracts::shared::list_envelope::ListPage;
use contracts::shared::list_state::{ListQuery, ListViewState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::delete_flow::{DeleteFlow, DeleteOutcome};
use super::highlight::{HighlightEffect, HighlightTracker, HIGHLIGHT_WINDOW_MS};
use super::loader::ListLoader;
use super::notification::{NotificationCenter, NotificationKind};
use crate::shared::rest_client;
use crate::shared::storage::{self, LocalStore};

/// Reactive list state of one resource page.
///
/// Owns the persisted `ListViewState`, the remote loader, the recently
/// viewed highlight, the delete prompt and the page's notifications.
/// Async completions write through `try_update`, so responses that arrive
/// after the page was unmounted are discarded silently.
pub struct ListController<E: Send + Sync + 'static> {
    pub resource: Resource,
    pub view: RwSignal<ListViewState>,
    pub loader: RwSignal<ListLoader<ListPage<E>>>,
    pub highlight: RwSignal<HighlightTracker>,
    pub delete: RwSignal<DeleteFlow>,
    pub notifications: RwSignal<NotificationCenter>,
    refresh: RwSignal<u64>,
}

impl<E: Send + Sync + 'static> Clone for ListController<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for ListController<E> {}

/// Creates the controller for `E`'s resource and wires its effects:
/// - every change of the view state is written to `{resources}Filters`
/// - every change of the committed query (or a manual refetch) loads a page
pub fn use_list_controller<E>() -> ListController<E>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let resource = E::RESOURCE;
    let controller = ListController {
        resource,
        view: RwSignal::new(storage::load_filters(&LocalStore, resource)),
        loader: RwSignal::new(ListLoader::new()),
        highlight: RwSignal::new(HighlightTracker::on_mount(storage::read_last_viewed(
            &LocalStore,
            resource,
        ))),
        delete: RwSignal::new(DeleteFlow::new()),
        notifications: RwSignal::new(NotificationCenter::default()),
        refresh: RwSignal::new(0),
    };

    let view = controller.view;
    Effect::new(move |_| {
        view.with(|s| storage::persist_filters(&LocalStore, resource, s));
    });

    // Typing into the search box changes `view` but not the query
    let query = Memo::new(move |_| view.with(ListViewState::query));
    let refresh = controller.refresh;
    Effect::new(move |_| {
        let q = query.get();
        refresh.track();
        controller.load(q);
    });

    controller
}

/// Shows a notification and schedules its auto-close, if it has one
pub fn notify(center: RwSignal<NotificationCenter>, kind: NotificationKind, message: String) {
    let Some(notification) = center.try_update(|c| c.push(kind, message)) else {
        return;
    };
    if let Some(delay) = notification.auto_close_ms() {
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            center.try_update(|c| c.dismiss(notification.id));
        });
    }
}

impl<E> ListController<E>
where
    E: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn load(self, query: ListQuery) {
        let Some(ticket) = self.loader.try_update(|l| l.begin()) else {
            return;
        };
        let resource = self.resource;
        spawn_local(async move {
            let result = rest_client::fetch_page::<E>(resource, &query).await;
            let ids = result.as_ref().ok().map(ListPage::ids);
            let applied = self
                .loader
                .try_update(|l| l.complete(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::warn!("dropping stale list response for /{}", resource.path());
                return;
            }
            if let Some(ids) = ids {
                log::debug!("/{}: {} rows on page {}", resource.path(), ids.len(), query.page);
                self.after_rows_loaded(ids);
            }
        });
    }

    fn after_rows_loaded(self, ids: Vec<String>) {
        let resource = self.resource;
        let Some(effect) = self.highlight.try_update(|h| h.on_rows_loaded(&ids)) else {
            return;
        };
        match effect {
            HighlightEffect::StartTimer => {
                let highlight = self.highlight;
                spawn_local(async move {
                    TimeoutFuture::new(HIGHLIGHT_WINDOW_MS).await;
                    // A disposed page leaves the marker alone: it may already
                    // hold the id of the row the user opened next.
                    if highlight.try_update(|h| h.on_timer_elapsed()).unwrap_or(false) {
                        storage::clear_last_viewed(&LocalStore, resource);
                    }
                });
            }
            HighlightEffect::ClearMarker => storage::clear_last_viewed(&LocalStore, resource),
            HighlightEffect::None => {}
        }
    }

    // ------------------------------------------------------------------
    // Read accessors (tracked)
    // ------------------------------------------------------------------

    pub fn items(&self) -> Vec<E> {
        self.loader
            .with(|l| l.data().map(|p| p.items.clone()).unwrap_or_default())
    }

    pub fn total(&self) -> u64 {
        self.loader.with(|l| l.data().map(|p| p.total).unwrap_or(0))
    }

    pub fn total_pages(&self) -> u32 {
        self.loader.with(|l| l.data().map(|p| p.total_pages).unwrap_or(0))
    }

    pub fn loading(&self) -> bool {
        self.loader.with(|l| l.loading())
    }

    pub fn error(&self) -> Option<String> {
        self.loader.with(|l| l.error().map(str::to_string))
    }
}

impl<E: Send + Sync + 'static> ListController<E> {
    // ------------------------------------------------------------------
    // Filter / pagination
    // ------------------------------------------------------------------

    pub fn set_search_input(&self, text: String) {
        self.view.update(|s| s.set_search_input(text));
    }

    pub fn submit_search(&self) {
        self.view.update(|s| s.submit_search());
    }

    pub fn clear_search(&self) {
        self.view.update(|s| s.clear_search());
    }

    pub fn change_sort(&self, field: &str) {
        self.view.update(|s| s.change_sort(field));
    }

    pub fn change_page_size(&self, size: u32) {
        self.view.update(|s| {
            s.change_page_size(size);
        });
    }

    pub fn go_to_page(&self, page: u32) {
        self.view.update(|s| s.go_to_page(page));
    }

    pub fn refetch(&self) {
        self.refresh.update(|n| *n += 1);
    }

    /// Marks a row before navigating to its detail page
    pub fn remember_viewed(&self, id: &str) {
        storage::mark_last_viewed(&LocalStore, self.resource, id);
    }

    // ------------------------------------------------------------------
    // Delete flow
    // ------------------------------------------------------------------

    pub fn request_delete(&self, id: String) {
        self.delete.update(|d| {
            d.request(id);
        });
    }

    pub fn cancel_delete(&self) {
        self.delete.update(|d| d.cancel());
    }

    pub fn confirm_delete(self) {
        let Some(Some(id)) = self.delete.try_update(|d| d.confirm()) else {
            return;
        };
        let resource = self.resource;
        spawn_local(async move {
            let result = rest_client::delete(resource, &id).await;
            match self.delete.try_update(|d| d.finish(result)).flatten() {
                Some(DeleteOutcome::Deleted { id, message }) => {
                    log::debug!("/{}/{} deleted", resource.path(), id);
                    self.notify(
                        NotificationKind::Success,
                        message.unwrap_or_else(|| {
                            format!("Registro de {} eliminado", resource.singular_label())
                        }),
                    );
                    self.refetch();
                }
                Some(DeleteOutcome::Failed { message, .. }) => {
                    self.notify(NotificationKind::Error, message);
                }
                None => {}
            }
        });
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notify(self, kind: NotificationKind, message: String) {
        notify(self.notifications, kind, message);
    }

    pub fn dismiss_notification(&self, id: u64) {
        self.notifications.update(|c| c.dismiss(id));
    }

    /// A create/update form saved successfully
    pub fn saved(self, message: Option<String>) {
        self.notify(
            NotificationKind::Success,
            message.unwrap_or_else(|| "Cambios guardados".to_string()),
        );
        self.refetch();
    }
}
