use crate::shared::list_controller::delete_flow::DeleteFlow;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Confirmation prompt of the delete flow. Shown while the flow is open;
/// both buttons are disabled while the delete call runs.
#[component]
pub fn ConfirmDeleteModal(
    flow: RwSignal<DeleteFlow>,
    /// Singular label of the entity, e.g. "alumno"
    entity_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let busy = Signal::derive(move || flow.with(|f| f.is_busy()));

    view! {
        <Show when=move || flow.with(|f| f.is_open())>
            <Modal
                title="Confirmar eliminación"
                on_close=on_cancel
                actions=Arc::new(move || view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=busy
                    >
                        {move || if busy.get() { "Eliminando..." } else { "Eliminar" }}
                    </Button>
                }.into_any())
            >
                <p>
                    {move || format!(
                        "¿Está seguro de eliminar el {} con ID {}? Esta acción no se puede deshacer.",
                        entity_label,
                        flow.with(|f| f.target().unwrap_or_default().to_string()),
                    )}
                </p>
            </Modal>
        </Show>
    }
}
