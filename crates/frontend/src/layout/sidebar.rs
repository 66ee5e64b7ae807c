//! Sidebar navigation for the three application screens

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuEntry {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            path: "/",
            label: "Home",
            icon: "home",
        },
        MenuEntry {
            path: "/items",
            label: "Items",
            icon: "package",
        },
        MenuEntry {
            path: "/orders/add",
            label: "Add Order",
            icon: "shopping-cart",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav style="width: 190px; flex-shrink: 0; background: #1b1b1f; color: #eee; padding: 16px 0;">
            <div style="padding: 0 16px 16px; font-weight: 700; font-size: 1.1rem; color: #1db954;">
                {"Inventory"}
            </div>
            <ul style="list-style: none; margin: 0; padding: 0;">
                {menu_entries().into_iter().map(|entry| {
                    view! {
                        <li>
                            <A
                                href=entry.path
                                attr:style="display: flex; align-items: center; gap: 10px; padding: 10px 16px; color: #eee; text-decoration: none;"
                            >
                                {icon(entry.icon)}
                                <span>{entry.label}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
