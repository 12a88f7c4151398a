use leptos::*;
use leptos_meta::*;
use platform_host_web::build_store_host;
use storefront_state::{use_storefront, Product, StoreConfig, StorefrontProvider, ThemePreference};

fn featured_products() -> Vec<Product> {
    let mut headphones = Product::new("p1", "Studio Headphones", 129.0);
    headphones.category = "audio".to_string();
    headphones.rating = Some(4.7);
    let mut keyboard = Product::new("p2", "Mechanical Keyboard", 89.5);
    keyboard.category = "peripherals".to_string();
    let mut lamp = Product::new("p3", "Desk Lamp", 34.0);
    lamp.category = "home".to_string();
    lamp.in_stock = false;
    vec![headphones, keyboard, lamp]
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = StoreConfig::default();
    let host = build_store_host(&config.dark_class);

    view! {
        <Title text="Storefront" />
        <Meta name="description" content="Product catalog with saved favorites and theme preference." />

        <StorefrontProvider host=host config=config>
            <header class="site-header">
                <FavoritesBadge />
                <ThemeToggle />
            </header>
            <main class="site-root">
                <ul class="product-grid">
                    {featured_products()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </ul>
            </main>
        </StorefrontProvider>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let label = format!("{} ({:.2} {})", product.name, product.price, product.currency);
    view! {
        <li class="product-card">
            <span>{label}</span>
            <FavoriteButton product=product />
        </li>
    }
}

#[component]
pub fn FavoriteButton(product: Product) -> impl IntoView {
    let storefront = use_storefront();
    let id = product.id.clone();
    let saved = move || storefront.is_favorite(id.as_str());
    let saved_for_label = saved.clone();

    view! {
        <button
            class="favorite-button"
            aria-pressed=move || saved().to_string()
            on:click=move |_| {
                storefront.toggle_favorite(product.clone());
            }
        >
            {move || if saved_for_label() { "Saved" } else { "Save" }}
        </button>
    }
}

#[component]
pub fn FavoritesBadge() -> impl IntoView {
    let storefront = use_storefront();

    view! {
        <span class="favorites-badge">
            {move || format!("Favorites: {}", storefront.favorites_count())}
        </span>
        <button class="favorites-clear" on:click=move |_| storefront.clear_favorites()>
            "Clear"
        </button>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let storefront = use_storefront();
    let label = move || {
        let change = storefront.theme.get();
        format!("Theme: {} ({})", change.preference, change.effective.as_str())
    };

    view! {
        <button class="theme-toggle" on:click=move |_| storefront.toggle_theme()>
            {label}
        </button>
        <button class="theme-system" on:click=move |_| storefront.set_theme(ThemePreference::System)>
            "Follow system"
        </button>
    }
}
