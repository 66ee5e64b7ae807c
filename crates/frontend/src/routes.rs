use crate::domain::a001_item::ui::list::ItemsList;
use crate::domain::a003_order::ui::editor::OrderEditor;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div style="padding: 40px; max-width: 600px;">
            <h2 style="margin-top: 0;">{"Inventory"}</h2>
            <p style="color: #666;">
                {"Manage the item catalog or stage a new order."}
            </p>
            <ul style="line-height: 2;">
                <li><A href="/items">{"Items"}</A></li>
                <li><A href="/orders/add">{"Add order"}</A></li>
            </ul>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <HomePage /> }.into_any()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/items") view=ItemsList />
                    <Route path=path!("/orders/add") view=OrderEditor />
                </Routes>
            </Shell>
        </Router>
    }
}
