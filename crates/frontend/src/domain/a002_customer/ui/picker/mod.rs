use crate::domain::a002_customer::api::search_customers;
use crate::shared::icons::icon;
use crate::shared::search::{should_search, Debouncer, QuerySequencer, DEBOUNCE_MS};
use contracts::domain::a002_customer::Customer;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Debounced customer autocomplete. The chosen customer is owned by the
/// parent; this component only drives the lookup and reports picks.
#[component]
pub fn CustomerPicker(
    #[prop(into)] selected: Signal<Option<Customer>>,
    on_select: Callback<Option<Customer>>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<Customer>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let debounce = StoredValue::new(Debouncer::new());
    let sequencer = StoredValue::new(QuerySequencer::new());

    let handle_input = move |val: String| {
        set_query.set(val.clone());
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
                set_loading.set(false);
                set_results.set(Vec::new());
                return;
            }

            let mut s = sequencer.get_value();
            let seq = s.begin();
            sequencer.set_value(s);

            set_loading.set(true);
            let outcome = search_customers(val.trim()).await;

            if !sequencer.get_value().try_apply(seq) {
                // Stale response; a newer query owns the result list and
                // the loading flag.
                return;
            }
            set_loading.set(false);
            match outcome {
                Ok(list) => {
                    set_error.set(None);
                    set_results.set(list);
                }
                Err(e) => {
                    log::error!("Customer search failed: {e}");
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let pick = move |customer: Customer| {
        set_results.set(Vec::new());
        set_query.set(String::new());
        on_select.run(Some(customer));
    };

    view! {
        <div style="position: relative; max-width: 420px;">
            {move || match selected.get() {
                Some(customer) => view! {
                    <div style="display: inline-flex; align-items: center; gap: 8px; padding: 8px 12px; background: #e8f5e9; border: 1px solid #1db954; border-radius: 4px;">
                        <span>{customer.name.clone()}</span>
                        <button
                            style="background: none; border: none; cursor: pointer; display: inline-flex; color: #666; padding: 0;"
                            title="Clear customer"
                            on:click=move |_| on_select.run(None)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <input
                        type="text"
                        placeholder="Search customer (min. 3 characters)..."
                        style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || query.get()
                        on:input=move |ev| handle_input(event_target_value(&ev))
                    />
                }.into_any(),
            }}

            {move || loading.get().then(|| view! {
                <div style="padding: 6px 2px; color: #666; font-size: 13px;">{"Searching..."}</div>
            })}

            {move || error.get().map(|e| view! {
                <div style="padding: 6px 2px; color: #c33; font-size: 13px;">{e}</div>
            })}

            {move || {
                let list = results.get();
                (selected.get().is_none() && !list.is_empty()).then(|| view! {
                    <ul style="position: absolute; left: 0; right: 0; margin: 2px 0 0; padding: 0; list-style: none; background: white; border: 1px solid #ddd; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); max-height: 220px; overflow-y: auto; z-index: 20;">
                        {list.into_iter().map(|customer| {
                            let label = customer.name.clone();
                            view! {
                                <li
                                    style="padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #eee;"
                                    on:click=move |_| pick(customer.clone())
                                >
                                    {label}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                })
            }}
        </div>
    }
}
