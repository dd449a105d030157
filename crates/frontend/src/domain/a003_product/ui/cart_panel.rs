use crate::domain::a003_product::cart;
use crate::shared::components::table::format_vnd;
use crate::shared::icons::icon;
use contracts::domain::a003_product::CartItem;
use leptos::prelude::*;
use thaw::*;

/// Cart contents with quantity inputs and the "create invoice request" action.
#[component]
pub fn CartPanel(
    cart: RwSignal<Vec<CartItem>>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_empty = move || cart.with(|c| c.is_empty());

    view! {
        <div class="cart-panel">
            <div class="cart-panel__header">
                {icon("cart")}
                <span>{move || format!("Cart ({})", cart.with(|c| c.len()))}</span>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <div class="cart-panel__empty">"The cart is empty."</div> }
            >
                <ul class="cart-panel__items">
                    <For
                        each=move || cart.get()
                        key=|item| (item.product.id, item.quantity)
                        children=move |item| {
                            let product_id = item.product.id;
                            let stock = item.product.quantity;
                            view! {
                                <li class="cart-panel__item">
                                    <div class="cart-panel__name">{item.product.product_name.clone()}</div>
                                    <input
                                        type="number"
                                        class="cart-panel__qty"
                                        min="1"
                                        max=stock.to_string()
                                        prop:value=item.quantity.to_string()
                                        on:change=move |ev| {
                                            let quantity = event_target_value(&ev).parse::<i64>().unwrap_or(1);
                                            cart.update(|c| cart::set_quantity(c, product_id, quantity));
                                        }
                                    />
                                    <span class="cart-panel__line-total">{format_vnd(item.line_total())}</span>
                                    <button
                                        class="cart-panel__remove"
                                        title="Remove"
                                        on:click=move |_| cart.update(|c| c.retain(|i| i.product.id != product_id))
                                    >
                                        {icon("x")}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="cart-panel__footer">
                <div class="cart-panel__total">
                    "Total: "
                    <strong>{move || cart.with(|c| format_vnd(cart::total(c)))}</strong>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || is_empty() || submitting.get())
                    on_click=move |_| on_submit.run(())
                >
                    {move || if submitting.get() { "Sending..." } else { "Create invoice request" }}
                </Button>
            </div>
        </div>
    }
}
