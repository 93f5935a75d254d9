//! Prime Time demo binary
//!
//! Drives a scripted session through the store and prints what a screen
//! would show. Uses Wolfram|Alpha when `WOLFRAM_APP_ID` is set and a
//! built-in table of the first hundred primes otherwise.

use prime_time::mocks::MockNthPrimeClient;
use prime_time::{
    AppAction, AppConfig, AppEnvironment, AppReducer, AppState, AppStore, CounterAction,
    FavoritePrimesAction, IsPrimeModalAction,
};
use prime_time_core::environment::UuidGenerator;
use prime_time_runtime::{Store, metrics::register_metrics};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prime_time=debug,prime_time_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    register_metrics();

    println!("=== Prime Time ===\n");

    let env = if let Some(config) = AppConfig::from_env_optional()? {
        tracing::info!(config = ?config.wolfram(), "Using Wolfram|Alpha");
        AppEnvironment::live(&config)?
    } else {
        tracing::warn!("WOLFRAM_APP_ID not set, falling back to offline answers");
        AppEnvironment::new(
            Arc::new(MockNthPrimeClient::first_hundred()),
            Arc::new(UuidGenerator),
        )
    };

    let store: AppStore = Store::new(AppState::default(), AppReducer::new(), env);

    // Count up to 7 and ask whether it is prime
    for _ in 0..7 {
        store.send(AppAction::Counter(CounterAction::Increment)).await?;
    }
    print_counter(&store).await;

    store
        .send(AppAction::Counter(CounterAction::IsPrimeButtonTapped))
        .await?;
    print_sheet(&store).await;

    println!("\n>>> Tapping the favorite button");
    store
        .send(AppAction::IsPrimeModal(IsPrimeModalAction::ToggleFavoriteTapped))
        .await?;
    print_sheet(&store).await;
    store
        .send(AppAction::Counter(CounterAction::IsPrimeModalDismissed))
        .await?;

    // Nth prime lookup
    let title = store.state(|s| s.counter_feature().nth_prime_button_title()).await;
    println!("\n>>> {title}");
    let mut handle = store
        .send(AppAction::Counter(CounterAction::NthPrimeButtonTapped))
        .await?;
    handle.wait().await;

    if let Some(alert) = store.state(|s| s.nth_prime.alert).await {
        println!("Alert: {}", alert.message());
    }
    store.send(AppAction::Counter(CounterAction::AlertDismissed)).await?;

    // Count down to 4, save it anyway, then delete the row
    for _ in 0..3 {
        store.send(AppAction::Counter(CounterAction::Decrement)).await?;
    }
    print_counter(&store).await;
    print_sheet(&store).await;

    println!("\n>>> Adding 4 to favorites anyway");
    store.send(AppAction::AddFavorite(4)).await?;
    print_favorites(&store).await;

    println!("\n>>> Deleting the first two rows");
    store
        .send(AppAction::FavoritePrimes(FavoritePrimesAction::DeleteAt(vec![0, 1])))
        .await?;
    print_favorites(&store).await;

    store.shutdown(Duration::from_secs(5)).await?;

    println!("\n=== Done ===");
    Ok(())
}

async fn print_counter(store: &AppStore) {
    let count = store.state(AppState::count).await;
    println!("Count: {count}");
}

async fn print_sheet(store: &AppStore) {
    let sheet = store.state(AppState::is_prime_modal).await;
    println!("Sheet: {}", sheet.verdict());
    if let Some(button) = sheet.favorite_button_title() {
        println!("       [{button}]");
    }
}

async fn print_favorites(store: &AppStore) {
    let favorites = store.state(|s| s.favorites.values()).await;
    println!("Favorites: {favorites:?}");
}
