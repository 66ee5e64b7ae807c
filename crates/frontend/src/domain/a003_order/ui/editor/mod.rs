pub mod state;

use crate::domain::a001_item::api::search_items;
use crate::domain::a002_customer::ui::picker::CustomerPicker;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::search::{should_search, Debouncer, QuerySequencer, DEBOUNCE_MS};
use contracts::domain::a001_item::Item;
use contracts::domain::a002_customer::Customer;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{LineItemTable, SortColumn, PAGE_SIZE_OPTIONS};

/// Order-creation screen: pick a customer, stage line items, manage the
/// staged table. Nothing here talks to an order endpoint; the table is a
/// staging area that lives and dies with the screen.
#[component]
pub fn OrderEditor() -> impl IntoView {
    let (customer, set_customer) = signal(Option::<Customer>::None);

    // The whole staged table is one state object; the view below renders
    // from its snapshot only.
    let table = RwSignal::new(LineItemTable::new());
    let snapshot = Memo::new(move |_| table.with(|t| t.snapshot()));

    // Item autocomplete
    let (item_query, set_item_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<Item>::new());
    let (item_loading, set_item_loading) = signal(false);
    let (item_error, set_item_error) = signal(Option::<String>::None);

    let debounce = StoredValue::new(Debouncer::new());
    let sequencer = StoredValue::new(QuerySequencer::new());

    let handle_item_input = move |val: String| {
        set_item_query.set(val.clone());
        let mut d = debounce.get_value();
        let ticket = d.note_input();
        debounce.set_value(d);

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if !debounce.get_value().is_current(ticket) {
                // Superseded while waiting; no request is sent.
                return;
            }
            if !should_search(&val) {
                // Retire any in-flight request so a late response cannot
                // repopulate the list that is being cleared.
                let mut s = sequencer.get_value();
                s.invalidate();
                sequencer.set_value(s);
                set_item_loading.set(false);
                set_suggestions.set(Vec::new());
                return;
            }

            let mut s = sequencer.get_value();
            let seq = s.begin();
            sequencer.set_value(s);

            set_item_loading.set(true);
            let outcome = search_items(val.trim()).await;

            if !sequencer.get_value().try_apply(seq) {
                // Stale response; a newer query owns the suggestion list
                // and the loading flag.
                return;
            }
            set_item_loading.set(false);
            match outcome {
                Ok(list) => {
                    set_item_error.set(None);
                    set_suggestions.set(list);
                }
                Err(e) => {
                    log::error!("Item search failed: {e}");
                    set_item_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let add_item = move |item: Item| {
        table.update(|t| t.add_line(&item));
        set_suggestions.set(Vec::new());
    };

    let (show_confirm, set_show_confirm) = signal(false);

    let toggle_sort = move |column: SortColumn| {
        table.update(|t| t.toggle_sort(column));
    };

    let sort_indicator = move |column: SortColumn| {
        let sort = snapshot.with(|s| s.sort);
        if sort.column == column {
            if sort.ascending {
                "↑"
            } else {
                "↓"
            }
        } else {
            ""
        }
    };

    view! {
        <div style="max-width: 960px;">
            <div style="font-size: 14px; color: #1db954; margin-bottom: 16px;">
                {"Orders > Add Order"}
            </div>

            // Customer
            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1); padding: 20px; margin-bottom: 20px;">
                <h3 style="margin: 0 0 12px; font-size: 1.1rem;">{"Customer"}</h3>
                <CustomerPicker
                    selected=Signal::derive(move || customer.get())
                    on_select=Callback::new(move |c| set_customer.set(c))
                />
            </div>

            // Item search
            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1); padding: 20px; margin-bottom: 20px;">
                <h3 style="margin: 0 0 12px; font-size: 1.1rem;">{"Add items"}</h3>
                <div style="position: relative; max-width: 420px;">
                    <input
                        type="text"
                        placeholder="Search item (min. 3 characters)..."
                        style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || item_query.get()
                        on:input=move |ev| handle_item_input(event_target_value(&ev))
                    />
                    {move || item_loading.get().then(|| view! {
                        <div style="padding: 6px 2px; color: #666; font-size: 13px;">{"Searching..."}</div>
                    })}
                    {move || item_error.get().map(|e| view! {
                        <div style="padding: 6px 2px; color: #c33; font-size: 13px;">{e}</div>
                    })}
                    {move || {
                        let list = suggestions.get();
                        (!list.is_empty()).then(|| view! {
                            <ul style="position: absolute; left: 0; right: 0; margin: 2px 0 0; padding: 0; list-style: none; background: white; border: 1px solid #ddd; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); max-height: 220px; overflow-y: auto; z-index: 20;">
                                {list.into_iter().map(|item| {
                                    let label = format!("{} — {:.2}", item.name, item.price);
                                    view! {
                                        <li
                                            style="padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #eee;"
                                            on:click=move |_| add_item(item.clone())
                                        >
                                            {label}
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        })
                    }}
                </div>
            </div>

            // Staged line items
            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1); padding: 20px;">
                <div style="display: flex; align-items: center; min-height: 40px;">
                    {move || {
                        let count = snapshot.with(|s| s.selected_count);
                        if count > 0 {
                            view! {
                                <span style="flex: 1; font-size: 15px;">{format!("{} selected", count)}</span>
                                <button
                                    style="background: none; border: none; cursor: pointer; color: #d32f2f; display: inline-flex; padding: 6px;"
                                    title="Delete selected"
                                    on:click=move |_| set_show_confirm.set(true)
                                >
                                    {icon("trash")}
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <h3 style="flex: 1; margin: 0; font-size: 1.1rem;">{"Order items"}</h3>
                            }.into_any()
                        }
                    }}
                </div>

                <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead>
                        <tr style="border-bottom: 2px solid #ddd;">
                            <th style="padding: 10px 8px; text-align: center; width: 40px;">
                                <input
                                    type="checkbox"
                                    prop:checked=move || snapshot.with(|s| s.all_selected)
                                    on:change=move |_| {
                                        let checked = !snapshot.with(|s| s.all_selected);
                                        table.update(|t| t.select_all(checked));
                                    }
                                    style="cursor: pointer;"
                                    title="Select/deselect all"
                                />
                            </th>
                            <th
                                style="padding: 10px 8px; text-align: left; cursor: pointer; user-select: none;"
                                on:click=move |_| toggle_sort(SortColumn::Name)
                            >
                                {"Item name "}
                                {move || sort_indicator(SortColumn::Name)}
                            </th>
                            <th
                                style="padding: 10px 8px; text-align: right; cursor: pointer; user-select: none; width: 120px;"
                                on:click=move |_| toggle_sort(SortColumn::Price)
                            >
                                {"Price "}
                                {move || sort_indicator(SortColumn::Price)}
                            </th>
                            <th
                                style="padding: 10px 8px; text-align: right; cursor: pointer; user-select: none; width: 110px;"
                                on:click=move |_| toggle_sort(SortColumn::Quantity)
                            >
                                {"Quantity "}
                                {move || sort_indicator(SortColumn::Quantity)}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let snap = snapshot.get();
                            if snap.rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="4" style="text-align: center; padding: 20px; color: #888;">
                                            {"No items staged yet"}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                snap.rows.into_iter().map(|line| {
                                    let id = line.id.value();
                                    let checked = snap.selected.contains(&id);
                                    view! {
                                        <tr
                                            style=move || format!(
                                                "border-bottom: 1px solid #eee; cursor: pointer; background: {};",
                                                if checked { "#e3f2fd" } else { "white" }
                                            )
                                            on:click=move |_| table.update(|t| t.toggle_select(id))
                                        >
                                            <td style="padding: 8px; text-align: center;">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=move |_| table.update(|t| t.toggle_select(id))
                                                    on:click=move |ev| ev.stop_propagation()
                                                    style="cursor: pointer;"
                                                />
                                            </td>
                                            <td style="padding: 8px;">{line.name.clone()}</td>
                                            <td style="padding: 8px; text-align: right;">{format!("{:.2}", line.price)}</td>
                                            <td style="padding: 8px; text-align: right;">{line.quantity}</td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>

                <PaginationControls
                    current_page=Signal::derive(move || snapshot.with(|s| s.page))
                    total_pages=Signal::derive(move || snapshot.with(|s| s.total_pages))
                    total_count=Signal::derive(move || snapshot.with(|s| s.total_rows))
                    page_size=Signal::derive(move || snapshot.with(|s| s.page_size))
                    on_page_change=Callback::new(move |p| table.update(|t| t.set_page(p)))
                    on_page_size_change=Callback::new(move |s| table.update(|t| t.set_page_size(s)))
                    page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                />
            </div>

            {move || show_confirm.get().then(|| view! {
                <ConfirmDialog
                    title="Remove lines"
                    message=format!(
                        "Remove {} selected line(s) from the order? This cannot be undone.",
                        snapshot.with(|s| s.selected_count)
                    )
                    on_confirm=Callback::new(move |_| {
                        table.update(|t| t.remove_selected());
                        set_show_confirm.set(false);
                    })
                    on_cancel=Callback::new(move |_| set_show_confirm.set(false))
                />
            })}
        </div>
    }
}
