use leptos::prelude::*;

/// Two-state confirmation modal gating a destructive action. The caller
/// decides when to render it; nothing happens until the user answers.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); width: 360px; padding: 20px;">
                <h3 style="margin: 0 0 12px; font-size: 1.1rem;">{title}</h3>
                <p style="margin: 0 0 20px; color: #555; font-size: 14px;">{message}</p>
                <div style="display: flex; justify-content: flex-end; gap: 10px;">
                    <button
                        style="padding: 8px 18px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;"
                        on:click=move |_| on_cancel.run(())
                    >
                        {"Cancel"}
                    </button>
                    <button
                        style="padding: 8px 18px; border: none; border-radius: 4px; background: #d32f2f; color: white; cursor: pointer;"
                        on:click=move |_| on_confirm.run(())
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
