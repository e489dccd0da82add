//! Sidebar with one entry per school resource

use crate::shared::icons::icon;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

struct MenuGroup {
    label: &'static str,
    items: &'static [(Resource, &'static str)], // (resource, icon)
}

const MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Personas",
        items: &[
            (Resource::Students, "students"),
            (Resource::Teachers, "teachers"),
            (Resource::Users, "users"),
        ],
    },
    MenuGroup {
        label: "Académico",
        items: &[
            (Resource::Grades, "grades"),
            (Resource::Courses, "courses"),
            (Resource::Cycles, "cycles"),
        ],
    },
    MenuGroup {
        label: "Catálogos",
        items: &[
            (Resource::Shifts, "shifts"),
            (Resource::AcademicLevels, "levels"),
        ],
    },
];

/// `/alumnos` and `/alumnos/12` both belong to the students entry
fn is_active(pathname: &str, resource: Resource) -> bool {
    pathname
        .trim_start_matches('/')
        .split('/')
        .next()
        .is_some_and(|segment| segment == resource.route_segment())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU.iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.iter().map(|&(resource, icon_name)| view! {
                        <a
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || location.pathname.with(|p| is_active(p, resource))
                            href=resource.list_route()
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{resource.title()}</span>
                            </div>
                        </a>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_in_the_menu() {
        for resource in Resource::ALL {
            assert!(MENU.iter().any(|g| g.items.iter().any(|(r, _)| *r == resource)));
        }
    }

    #[test]
    fn detail_routes_keep_their_entry_active() {
        assert!(is_active("/alumnos", Resource::Students));
        assert!(is_active("/alumnos/12", Resource::Students));
        assert!(!is_active("/catedraticos", Resource::Students));
        assert!(!is_active("/", Resource::Students));
    }
}
