pub mod state;

use self::state::create_state;
use super::cart_panel::CartPanel;
use crate::domain::a003_product::api::{create_order, delete_order, fetch_categories, fetch_products};
use crate::domain::a003_product::cart::{self, CartToggle};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::format_vnd;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{clamp_page, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use contracts::domain::a003_product::{CreateOrderRequest, Product};
use contracts::domain::a004_order::order_code;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const UNDO_WINDOW_MS: u32 = 5000;

#[component]
pub fn ProductCatalog() -> impl IntoView {
    let state = create_state();
    let cart_items = RwSignal::new(cart::load_cart());
    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let notifications = use_notifications();

    Effect::new(move |_| cart_items.with(|c| cart::save_cart(c)));

    let load_products = move || {
        let category_id = state.with_untracked(|s| s.category_id);
        spawn_local(async move {
            set_loading.set(true);
            match fetch_products(category_id).await {
                Ok(products) => {
                    state.update(|s| {
                        s.products = products;
                        s.page = clamp_page(s.page, s.total_pages());
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let load_categories = move || {
        spawn_local(async move {
            match fetch_categories().await {
                Ok(categories) => state.update(|s| s.categories = categories),
                Err(e) => log::warn!("Failed to load categories: {}", e),
            }
        });
    };

    let toggle_cart = move |product: Product| {
        let mut outcome = CartToggle::Removed;
        cart_items.update(|c| outcome = cart::toggle(c, &product));
        if outcome == CartToggle::OutOfStock {
            notifications.warning(format!("{} is out of stock.", product.product_name));
        }
    };

    let undo_order = move |order_id: i64| {
        spawn_local(async move {
            match delete_order(order_id).await {
                Ok(()) => {
                    notifications.info(format!("Invoice request {} was cancelled.", order_code(order_id)));
                    load_products();
                }
                Err(e) => {
                    log::error!("Undo of order {} failed: {}", order_id, e);
                    notifications.error(e.user_message());
                }
            }
        });
    };

    let submit_order = move || {
        let request = cart_items.with_untracked(|c| CreateOrderRequest::from_cart(c));
        if request.items.is_empty() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match create_order(&request).await {
                Ok(order) => {
                    log::info!("Created order {}", order.id);
                    cart_items.set(Vec::new());
                    load_products();
                    notifications.success_with_action(
                        format!("Invoice request {} created.", order_code(order.id)),
                        "Undo",
                        Callback::new(move |_| undo_order(order.id)),
                        UNDO_WINDOW_MS,
                    );
                }
                Err(e) => {
                    log::error!("Failed to create order: {}", e);
                    notifications.error(e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    let export = move || {
        let rows = state.with_untracked(|s| s.filtered());
        if let Err(e) = export_to_csv(&rows, "products.csv") {
            notifications.warning(e);
        }
    };

    load_categories();
    load_products();

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_CUSTOM>
            <PageHeader title="Products" subtitle="Pick products to request an invoice">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                    {icon("download")}
                    " CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_products()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="catalog">
                <div class="catalog__main">
                    <div class="filter-panel">
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <label class="form__label">
                                    "Category: "
                                    <select
                                        class="form__select"
                                        on:change=move |ev| {
                                            let category_id = event_target_value(&ev).parse::<i64>().ok();
                                            state.update(|s| s.set_category(category_id));
                                            load_products();
                                        }
                                    >
                                        <option value="">"All categories"</option>
                                        {move || {
                                            state
                                                .with(|s| s.categories.clone())
                                                .into_iter()
                                                .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                                .collect_view()
                                        }}
                                    </select>
                                </label>
                                <div style="flex: 1; max-width: 320px;">
                                    <SearchInput
                                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                                        on_change=Callback::new(move |q| state.update(|s| s.set_search(q)))
                                        placeholder="Search by name..."
                                    />
                                </div>
                            </Flex>
                        </div>
                    </div>

                    {move || error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{e}</MessageBarBody>
                        </MessageBar>
                    })}

                    <Show when=move || loading.get()>
                        <Spinner label="Loading products..." />
                    </Show>

                    <div class="product-grid">
                        <For
                            each=move || state.with(|s| s.page_rows())
                            key=|p| (p.id, p.quantity)
                            children=move |product| {
                                let product_id = product.id;
                                let in_cart = move || cart_items.with(|c| cart::contains(c, product_id));
                                let for_click = product.clone();
                                view! {
                                    <div class="product-card" class:product-card--selected=in_cart>
                                        {product.image.clone().map(|src| view! {
                                            <img class="product-card__image" src=src alt=product.product_name.clone() />
                                        })}
                                        <div class="product-card__body">
                                            <div class="product-card__name">{product.product_name.clone()}</div>
                                            <div class="product-card__category">
                                                {product.category_name.clone().unwrap_or_default()}
                                            </div>
                                            <div class="product-card__price">{format_vnd(product.price)}</div>
                                            <div class="product-card__stock" class:product-card__stock--out=!product.in_stock()>
                                                {if product.in_stock() {
                                                    format!("In stock: {}", product.quantity)
                                                } else {
                                                    "Out of stock".to_string()
                                                }}
                                            </div>
                                        </div>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| toggle_cart(for_click.clone())
                                        >
                                            {move || if in_cart() { "Remove" } else { "Add to cart" }}
                                        </Button>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <Show when=move || !loading.get() && state.with(|s| s.total_count() == 0)>
                        <div class="table__empty">"No products found."</div>
                    </Show>

                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        total_count=Signal::derive(move || state.with(|s| s.total_count()))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                </div>

                <CartPanel
                    cart=cart_items
                    submitting=submitting
                    on_submit=Callback::new(move |_| submit_order())
                />
            </div>
        </PageFrame>
    }
}
