use anyhow::Context;
use food_cart::actions::{Action, OrderAction};
use food_cart::commands::{self, Command, HELP};
use food_cart::effect_runner::EffectRunner;
use food_cart::middleware::{logging::LoggingMiddleware, promocode::PromocodeMiddleware};
use food_cart::state::AppState;
use food_cart::store::Store;
use food_cart::view_models::OrderSummaryViewModel;
use food_cart_client::HttpCartService;
use food_cart_config::AppConfig;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    let log_file = food_cart::logger::init()?;
    log::info!("Starting food-cart, logging to {}", log_file.display());

    let config = AppConfig::load();
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let service = Arc::new(
        HttpCartService::from_config(&config).context("Failed to build cart service")?,
    );

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::from_config(&config));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(PromocodeMiddleware::new()));

    let runner = EffectRunner::new(
        runtime.handle().clone(),
        service,
        config.user_id.clone(),
        store.dispatcher().clone(),
    );

    let result = run_session(&mut store, &runner, &runtime);

    log::info!("Exiting food-cart");
    result
}

fn run_session(store: &mut Store, runner: &EffectRunner, runtime: &Runtime) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", HELP)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        // results of finished background lookups
        let effects = store.process_pending();
        runner.run_all(effects);

        let command = match commands::parse(&line, store.state()) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Dispatch(action) => {
                let is_promo = matches!(action, Action::Order(OrderAction::PromocodeApply(_)));
                let handles = runner.run_all(store.dispatch(action));

                if is_promo {
                    // the checkout waits for the lookup; notifications never block
                    for handle in handles {
                        if let Err(e) = runtime.block_on(handle) {
                            log::error!("Discount lookup task failed: {}", e);
                        }
                    }
                    let effects = store.process_pending();
                    runner.run_all(effects);
                }

                writeln!(stdout, "{}", OrderSummaryViewModel::from_state(store.state()))?;
            }
            Command::ShowCart => {
                let cart = &store.state().cart;
                if cart.is_empty() {
                    writeln!(stdout, "cart is empty")?;
                }
                for item in &cart.list {
                    writeln!(
                        stdout,
                        "{:>3} x {:<24} ${:.2}",
                        item.quantity_or_zero(),
                        item.label(),
                        item.price
                    )?;
                }
            }
            Command::ShowWishlist => {
                let wishlist = &store.state().wishlist;
                if wishlist.is_empty() {
                    writeln!(stdout, "wishlist is empty")?;
                }
                for item in &wishlist.list {
                    writeln!(stdout, "  {:<24} ${:.2}", item.label(), item.price)?;
                }
            }
            Command::ShowSummary => {
                writeln!(stdout, "{}", OrderSummaryViewModel::from_state(store.state()))?;
            }
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
