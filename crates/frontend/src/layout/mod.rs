pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell: fixed sidebar on the left, routed content on the right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div style="display: flex; min-height: 100vh; font-family: 'Roboto', sans-serif;">
            <Sidebar />
            <main style="flex: 1; padding: 20px; overflow: auto; background: #fafafa;">
                {children()}
            </main>
        </div>
    }
}
