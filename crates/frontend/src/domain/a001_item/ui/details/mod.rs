use crate::domain::a001_item::api::{create_item, update_item};
use crate::shared::icons::icon;
use contracts::domain::a001_item::{Item, ItemDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Parse a user-typed price. Accepts an optional "R$" prefix and a comma
/// decimal separator.
fn parse_price(input: &str) -> Option<f64> {
    let cleaned = input
        .trim()
        .trim_start_matches("R$")
        .trim()
        .replace(',', ".");
    cleaned.parse::<f64>().ok()
}

/// Add/edit modal for a catalog item. Validation runs before any network
/// call; failures render inline. In add mode the form stays open after a
/// successful save so several items can be entered in a row.
#[component]
pub fn ItemDetails(
    /// Existing item to edit; `None` switches to add mode.
    item: Option<Item>,
    /// Fired after every successful save, so the list can reload.
    on_saved: Callback<()>,
    /// Close request (either the close button or a finished edit).
    on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = item.as_ref().map(|i| i.id);
    let is_edit = editing_id.is_some();

    let (name, set_name) = signal(item.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (price_input, set_price_input) = signal(
        item.as_ref()
            .map(|i| format!("{:.2}", i.price))
            .unwrap_or_default(),
    );
    let (error, set_error) = signal(Option::<String>::None);
    let (message, set_message) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let handle_confirm = move || {
        set_message.set(None);
        let Some(price) = parse_price(&price_input.get()) else {
            set_error.set(Some("Price must be a number".to_string()));
            return;
        };
        let draft = ItemDraft::new(name.get().trim(), price);
        if let Err(e) = draft.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let outcome = match editing_id {
                Some(id) => update_item(id, &draft).await,
                None => create_item(&draft).await,
            };
            set_saving.set(false);
            match outcome {
                Ok(saved) => {
                    on_saved.run(());
                    if is_edit {
                        on_close.run(());
                    } else {
                        set_message.set(Some(format!("Item {} added", saved.name)));
                        set_name.set(String::new());
                        set_price_input.set(String::new());
                    }
                }
                Err(e) => {
                    log::error!("Item save failed: {e}");
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="position: relative; background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); width: 400px; padding: 24px; display: flex; flex-direction: column; gap: 14px;">
                <button
                    style="position: absolute; top: 10px; right: 10px; background: none; border: none; cursor: pointer; color: #666; padding: 4px;"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
                <h3 style="margin: 0; font-size: 1.15rem;">
                    {if is_edit { "Edit item" } else { "Add new item" }}
                </h3>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px;">
                    {"Name"}
                    <input
                        type="text"
                        autofocus
                        style="padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 14px;">
                    {"Price"}
                    <input
                        type="text"
                        placeholder="R$ 0,00"
                        style="padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || price_input.get()
                        on:input=move |ev| set_price_input.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|e| view! {
                    <div style="color: #c33; font-size: 13px;">{e}</div>
                })}

                <button
                    class="button button--primary"
                    style="height: 44px; font-size: 15px;"
                    disabled=move || saving.get()
                    on:click=move |_| handle_confirm()
                >
                    {move || if saving.get() { "Saving..." } else { "Confirm" }}
                </button>

                <div style="min-height: 20px; display: flex; align-items: center; justify-content: center;">
                    {move || message.get().map(|m| view! {
                        <span style="color: #1db954; font-size: 14px;">{m}</span>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_price;

    #[test]
    fn test_parse_price_accepts_common_forms() {
        assert_eq!(parse_price("9.50"), Some(9.5));
        assert_eq!(parse_price("9,50"), Some(9.5));
        assert_eq!(parse_price("R$ 12,00"), Some(12.0));
        assert_eq!(parse_price("  3 "), Some(3.0));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("1.2.3"), None);
    }
}
