use crate::domain::{details_view, list_view};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::{ParamSegment, StaticSegment};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="alert alert--error">"Página no encontrada"</div>
        </div>
    }
}

/// `/{segment}` for every resource in the sidebar
#[component]
fn ResourceListRoute() -> impl IntoView {
    let params = use_params_map();
    let resource = Memo::new(move |_| {
        params.with(|p| p.get("segment").as_deref().and_then(Resource::from_route_segment))
    });

    move || match resource.get() {
        Some(resource) => list_view(resource),
        None => view! { <NotFound /> }.into_any(),
    }
}

/// `/{segment}/:id`
#[component]
fn ResourceDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let target = Memo::new(move |_| {
        params.with(|p| {
            let resource = p.get("segment").as_deref().and_then(Resource::from_route_segment)?;
            Some((resource, p.get("id")?))
        })
    });

    move || match target.get() {
        Some((resource, id)) => details_view(resource, id),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let home = Resource::Students.list_route();

    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=move || view! { <Redirect path=home.clone() /> } />
            <Route path=ParamSegment("segment") view=ResourceListRoute />
            <Route path=(ParamSegment("segment"), ParamSegment("id")) view=ResourceDetailsRoute />
        </Routes>
    }
}
