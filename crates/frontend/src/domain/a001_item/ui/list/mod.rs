use crate::domain::a001_item::api::{delete_item, fetch_items, search_items};
use crate::domain::a001_item::ui::details::ItemDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::search::should_search;
use contracts::domain::a001_item::{Item, ItemId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

#[derive(Clone, Copy, PartialEq)]
enum SortColumn {
    Name,
    Price,
}

#[derive(Clone, Copy, PartialEq)]
enum SortDirection {
    Asc,
    Desc,
}

#[component]
pub fn ItemsList() -> impl IntoView {
    let (all_items, set_all_items) = signal(Vec::<Item>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Client-side name filter
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_input, set_filter_input) = signal(String::new());

    // Sorting
    let (sort_column, set_sort_column) = signal(SortColumn::Name);
    let (sort_direction, set_sort_direction) = signal(SortDirection::Asc);

    // Selected items (by id)
    let (selected_ids, set_selected_ids) = signal(HashSet::<i32>::new());

    // Pagination
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(5usize);

    // Details modal
    let (show_details, set_show_details) = signal(false);
    let (editing_item, set_editing_item) = signal(Option::<Item>::None);

    // Delete confirmation
    let (show_confirm_delete, set_show_confirm_delete) = signal(false);

    // Wholesale list replacement: drop selection, go back to the first page.
    let apply_items = move |items: Vec<Item>| {
        set_all_items.set(items);
        set_selected_ids.set(HashSet::new());
        set_page.set(0);
    };

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_items().await {
                Ok(data) => {
                    apply_items(data);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("Item list load failed: {e}");
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    // Server-side search using the current filter text.
    let run_search = move || {
        let query = filter_input.get();
        if query.trim().is_empty() {
            load();
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match search_items(query.trim()).await {
                Ok(data) => {
                    apply_items(data);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::error!("Item search failed: {e}");
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    // Initial load
    spawn_local(async move {
        load();
    });

    // Local filter applies at three characters, like the search endpoints.
    let handle_input_change = move |val: String| {
        set_filter_input.set(val.clone());
        if should_search(&val) || val.is_empty() {
            set_filter_text.set(val);
            set_page.set(0);
        }
    };

    let toggle_sort = move |column: SortColumn| {
        if sort_column.get() == column {
            set_sort_direction.set(match sort_direction.get() {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            });
        } else {
            set_sort_column.set(column);
            set_sort_direction.set(SortDirection::Asc);
        }
    };

    let filtered_items = move || {
        let filter = filter_text.get().to_lowercase();
        let mut items: Vec<Item> = all_items
            .get()
            .into_iter()
            .filter(|item| filter.is_empty() || item.name.to_lowercase().contains(&filter))
            .collect();

        let col = sort_column.get();
        let dir = sort_direction.get();
        items.sort_by(|a, b| {
            let cmp = match col {
                SortColumn::Name => a.name.cmp(&b.name),
                SortColumn::Price => a.price.total_cmp(&b.price),
            };
            match dir {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
        items
    };

    let total_pages = move || filtered_items().len().div_ceil(page_size.get().max(1)).max(1);

    let visible_items = move || {
        filtered_items()
            .into_iter()
            .skip(page.get() * page_size.get())
            .take(page_size.get())
            .collect::<Vec<Item>>()
    };

    let is_filter_active = move || !filter_text.get().is_empty();

    let toggle_item = move |id: i32| {
        set_selected_ids.update(|ids| {
            if !ids.remove(&id) {
                ids.insert(id);
            }
        });
    };

    let toggle_all_visible = move || {
        let visible_ids: HashSet<i32> = visible_items().iter().map(|item| item.id.value()).collect();
        set_selected_ids.update(|ids| {
            let all_selected = visible_ids.iter().all(|id| ids.contains(id));
            if all_selected {
                for id in visible_ids {
                    ids.remove(&id);
                }
            } else {
                for id in visible_ids {
                    ids.insert(id);
                }
            }
        });
    };

    let are_all_visible_selected = move || {
        let visible = visible_items();
        if visible.is_empty() {
            return false;
        }
        let selected = selected_ids.get();
        visible.iter().all(|item| selected.contains(&item.id.value()))
    };

    let open_add = move || {
        set_editing_item.set(None);
        set_show_details.set(true);
    };

    // Edit acts on a single selection.
    let open_edit = move || {
        let selected = selected_ids.get();
        if selected.len() != 1 {
            return;
        }
        let Some(&id) = selected.iter().next() else {
            return;
        };
        if let Some(item) = all_items.get().into_iter().find(|i| i.id.value() == id) {
            set_editing_item.set(Some(item));
            set_show_details.set(true);
        }
    };

    // Deletes run one by one; local rows are dropped only after every
    // request succeeded. A failure leaves the list as it was.
    let delete_selected = move || {
        set_show_confirm_delete.set(false);
        let ids: Vec<i32> = selected_ids.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            for id in &ids {
                if let Err(e) = delete_item(ItemId::new(*id)).await {
                    log::error!("Delete of item {id} failed: {e}");
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                    return;
                }
            }
            set_all_items.update(|items| items.retain(|item| !ids.contains(&item.id.value())));
            set_selected_ids.set(HashSet::new());
            set_is_loading.set(false);
        });
    };

    let sort_indicator = move |column: SortColumn| {
        if sort_column.get() == column {
            match sort_direction.get() {
                SortDirection::Asc => "↑",
                SortDirection::Desc => "↓",
            }
        } else {
            ""
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 60px); overflow: hidden;">
            // Toolbar
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;">
                <div style="position: relative; display: inline-flex; align-items: center;">
                    <input
                        type="text"
                        placeholder="Search items..."
                        style=move || format!(
                            "width: 280px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                            if is_filter_active() { "#fffbea" } else { "white" }
                        )
                        prop:value=move || filter_input.get()
                        on:input=move |ev| handle_input_change(event_target_value(&ev))
                    />
                    {move || (!filter_input.get().is_empty()).then(|| view! {
                        <button
                            style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                            on:click=move |_| {
                                set_filter_input.set(String::new());
                                set_filter_text.set(String::new());
                                set_page.set(0);
                            }
                            title="Clear"
                        >
                            {icon("x")}
                        </button>
                    })}
                </div>
                <button class="button button--secondary" title="Search on the server" on:click=move |_| run_search()>
                    {icon("search")}
                    {"Search"}
                </button>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
                <button class="button button--primary" on:click=move |_| open_add()>
                    {icon("plus")}
                    {"Add item"}
                </button>
                {move || (selected_ids.get().len() == 1).then(|| view! {
                    <button class="button button--secondary" on:click=move |_| open_edit()>
                        {icon("edit")}
                        {"Edit"}
                    </button>
                })}
                {move || (!selected_ids.get().is_empty()).then(|| view! {
                    <button
                        class="button button--danger"
                        on:click=move |_| set_show_confirm_delete.set(true)
                    >
                        {icon("trash")}
                        {"Delete"}
                    </button>
                })}

                // Counters
                <div style="margin-left: auto; display: flex; gap: 15px; font-size: 14px; color: #666;">
                    <span>
                        {"Total: "}
                        <strong style="color: #333;">{move || filtered_items().len()}</strong>
                    </span>
                    <span>
                        {"Selected: "}
                        <strong style="color: #2196f3;">{move || selected_ids.get().len()}</strong>
                    </span>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin: 8px; font-size: 15px; flex-shrink: 0;">{e}</div>
            })}

            {move || if is_loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"Loading..."}</div> }.into_any()
            } else {
                let items = visible_items();
                view! {
                    <div style="flex: 1; overflow-y: auto; overflow-x: hidden;">
                        <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                            <thead style="position: sticky; top: 0; background: #f9f9f9; z-index: 10;">
                                <tr style="border-bottom: 2px solid #ddd;">
                                    <th style="padding: 10px 8px; text-align: center; width: 40px;">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || are_all_visible_selected()
                                            on:change=move |_| toggle_all_visible()
                                            style="cursor: pointer;"
                                            title="Select/deselect all visible"
                                        />
                                    </th>
                                    <th
                                        style="padding: 10px 8px; text-align: left; cursor: pointer; user-select: none;"
                                        on:click=move |_| toggle_sort(SortColumn::Name)
                                    >
                                        {"Name "}
                                        {move || sort_indicator(SortColumn::Name)}
                                    </th>
                                    <th
                                        style="padding: 10px 8px; text-align: right; cursor: pointer; user-select: none; width: 140px;"
                                        on:click=move |_| toggle_sort(SortColumn::Price)
                                    >
                                        {"Price "}
                                        {move || sort_indicator(SortColumn::Price)}
                                    </th>
                                </tr>
                            </thead>
                            <tbody>
                                {if items.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="3" style="text-align: center; padding: 20px; color: #888;">
                                                {if all_items.get().is_empty() {
                                                    "No items. Press 'Refresh' or add the first item."
                                                } else {
                                                    "Nothing matches the filter"
                                                }}
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    items.into_iter().enumerate().map(|(idx, item)| {
                                        let bg_color = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                        let item_id = item.id.value();
                                        let item_for_click = item.clone();
                                        view! {
                                            <tr
                                                style=format!("background: {}; border-bottom: 1px solid #eee; cursor: pointer;", bg_color)
                                                on:click=move |_| {
                                                    set_editing_item.set(Some(item_for_click.clone()));
                                                    set_show_details.set(true);
                                                }
                                            >
                                                <td style="padding: 8px; text-align: center;">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || selected_ids.get().contains(&item_id)
                                                        on:change=move |_| toggle_item(item_id)
                                                        on:click=move |ev| ev.stop_propagation()
                                                        style="cursor: pointer;"
                                                    />
                                                </td>
                                                <td style="padding: 8px;" title=item.name.clone()>{item.name.clone()}</td>
                                                <td style="padding: 8px; text-align: right;">{format!("{:.2}", item.price)}</td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                    <div style="flex-shrink: 0; padding: 0 10px;">
                        <PaginationControls
                            current_page=Signal::derive(move || page.get())
                            total_pages=Signal::derive(total_pages)
                            total_count=Signal::derive(move || filtered_items().len())
                            page_size=Signal::derive(move || page_size.get())
                            on_page_change=Callback::new(move |p| set_page.set(p))
                            on_page_size_change=Callback::new(move |s| {
                                set_page_size.set(s);
                                set_page.set(0);
                            })
                        />
                    </div>
                }.into_any()
            }}

            // Details modal
            {move || show_details.get().then(|| view! {
                <ItemDetails
                    item=editing_item.get()
                    on_saved=Callback::new(move |_| load())
                    on_close=Callback::new(move |_| {
                        set_show_details.set(false);
                        set_editing_item.set(None);
                    })
                />
            })}

            // Delete confirmation
            {move || show_confirm_delete.get().then(|| view! {
                <ConfirmDialog
                    title="Delete items"
                    message=format!("Delete {} selected item(s)? This cannot be undone.", selected_ids.get().len())
                    on_confirm=Callback::new(move |_| delete_selected())
                    on_cancel=Callback::new(move |_| set_show_confirm_delete.set(false))
                />
            })}
        </div>
    }
}
