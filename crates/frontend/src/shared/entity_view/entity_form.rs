use std::collections::BTreeMap;
use std::sync::Arc;

use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form_values::{draft_to_values, values_to_draft, FieldKind, FormField, FormValues};
use super::EditableEntity;
use crate::shared::modal::Modal;
use crate::shared::rest_client::{self, SelectOption};

// ============================================================================
// View model
// ============================================================================

#[derive(Clone, Copy)]
struct FormViewModel {
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    submit_error: RwSignal<Option<String>>,
    saving: RwSignal<bool>,
    options: RwSignal<BTreeMap<&'static str, Vec<SelectOption>>>,
}

impl FormViewModel {
    fn new(values: FormValues) -> Self {
        Self {
            values: RwSignal::new(values),
            errors: RwSignal::new(FieldErrors::new()),
            submit_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            options: RwSignal::new(BTreeMap::new()),
        }
    }

    fn value(&self, name: &'static str) -> String {
        self.values.with(|v| v.get(name).cloned().unwrap_or_default())
    }

    fn set_value(&self, name: &'static str, value: String) {
        self.values.update(|v| {
            v.insert(name, value);
        });
    }

    fn error(&self, name: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(name).map(str::to_string))
    }

    /// Dropdown options for every reference field
    fn load_options(self, fields: &'static [FormField]) {
        for field in fields {
            let FieldKind::Reference(resource) = field.kind else {
                continue;
            };
            let name = field.name;
            spawn_local(async move {
                match rest_client::fetch_options(resource).await {
                    Ok(list) => {
                        self.options.try_update(|o| {
                            o.insert(name, list);
                        });
                    }
                    Err(err) => {
                        log::error!("options for {} unavailable: {}", name, err);
                        self.submit_error.try_set(Some(err.user_message()));
                    }
                }
            });
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

fn field_input(vm: FormViewModel, field: FormField) -> AnyView {
    let name = field.name;
    let disabled = move || vm.saving.get();
    match field.kind {
        FieldKind::Bool => view! {
            <input
                type="checkbox"
                id=name
                prop:checked=move || vm.value(name) == "true"
                on:change=move |ev| vm.set_value(name, event_target_checked(&ev).to_string())
                disabled=disabled
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=name
                rows="3"
                prop:value=move || vm.value(name)
                on:input=move |ev| vm.set_value(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
        FieldKind::Select(choices) => view! {
            <select
                id=name
                prop:value=move || vm.value(name)
                on:change=move |ev| vm.set_value(name, event_target_value(&ev))
                disabled=disabled
            >
                <option value="">"Seleccione..."</option>
                {choices
                    .iter()
                    .map(|&(value, label)| view! {
                        <option value=value selected=move || vm.value(name) == value>{label}</option>
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Reference(_) => view! {
            <select
                id=name
                prop:value=move || vm.value(name)
                on:change=move |ev| vm.set_value(name, event_target_value(&ev))
                disabled=disabled
            >
                <option value="">"Seleccione..."</option>
                {move || {
                    vm.options
                        .with(|o| o.get(name).cloned().unwrap_or_default())
                        .into_iter()
                        .map(|option| {
                            let value = option.value.clone();
                            view! {
                                <option value=option.value selected=move || vm.value(name) == value>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        _ => view! {
            <input
                type=field.input_type()
                id=name
                step=if field.kind == FieldKind::Decimal { "0.01" } else { "1" }
                prop:value=move || vm.value(name)
                on:input=move |ev| vm.set_value(name, event_target_value(&ev))
                disabled=disabled
            />
        }
        .into_any(),
    }
}

// ============================================================================
// Modal
// ============================================================================

/// Create (`editing == None`) or edit form of `E` in a modal.
///
/// Validation runs before any request; invalid fields are shown inline and
/// nothing is sent. A failed save keeps the form open with the message.
pub fn entity_form_modal<E: EditableEntity>(
    editing: Option<E>,
    on_saved: Callback<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let resource = E::RESOURCE;
    let fields = E::form_fields();
    let id = editing.as_ref().map(|e| e.id());
    let draft = editing.as_ref().map(E::to_draft).unwrap_or_default();
    let vm = FormViewModel::new(draft_to_values(&draft, fields));
    vm.load_options(fields);

    let submit = move || {
        if vm.saving.get_untracked() {
            return;
        }
        let draft = match vm
            .values
            .with_untracked(|v| values_to_draft::<E::Draft>(v, fields))
        {
            Ok(draft) => draft,
            Err(errors) => {
                vm.errors.set(errors);
                return;
            }
        };
        let check = if id.is_some() { draft.validate() } else { draft.validate_create() };
        if !check.is_empty() {
            vm.errors.set(check);
            return;
        }

        vm.errors.set(FieldErrors::new());
        vm.submit_error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => rest_client::update(resource, id, &draft).await,
                None => rest_client::create(resource, &draft).await,
            };
            if vm.saving.try_update(|s| *s = false).is_none() {
                return;
            }
            match result {
                Ok(message) => on_saved.run(message),
                Err(err) => {
                    log::error!("saving {} failed: {}", resource.singular_label(), err);
                    vm.submit_error.set(Some(err.user_message()));
                }
            }
        });
    };

    let title = match id {
        Some(id) => format!("Editar {} #{}", resource.singular_label(), id),
        None => format!("Nuevo {}", resource.singular_label()),
    };
    let close = Callback::new(move |_| {
        if !vm.saving.get_untracked() {
            on_close.run(());
        }
    });

    view! {
        <Modal
            title=title
            on_close=close
            actions=Arc::new(move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| close.run(())
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            }.into_any())
        >
            {move || vm.submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.error("_form").map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                {fields
                    .iter()
                    .map(|&field| view! {
                        <div class="form-group">
                            <label for=field.name>
                                {field.label}
                                {field.required.then_some(" *")}
                            </label>
                            {field_input(vm, field)}
                            {move || vm.error(field.name).map(|e| view! { <span class="form-error">{e}</span> })}
                        </div>
                    })
                    .collect_view()}
                <button type="submit" hidden=true></button>
            </form>
        </Modal>
    }
}
