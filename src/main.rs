use clap::Parser;
use nobel_explorer::app::render::{render_keys, render_rows};
use nobel_explorer::core::ConfigProvider;
use nobel_explorer::utils::error::ErrorSeverity;
use nobel_explorer::utils::{logger, validation::Validate};
use nobel_explorer::{
    CliConfig, NobelError, PrizeEngine, PrizePipeline, PrizeQuery, Selector, TomlConfig,
};

fn fail(e: &NobelError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path) {
            Ok(file) => config = config.merge_file(&file),
            Err(e) => fail(&e),
        }
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let format = config.output_format();
    let list_categories = config.list_categories;
    let list_countries = config.list_countries;
    tracing::info!("Using prize API at {}", config.api_endpoint());

    let category = config.category_filter().map(str::to_string);
    let country = config.country_filter().map(str::to_string);

    let engine = PrizeEngine::new(PrizePipeline::new(config));
    let snapshot = match engine.run().await {
        Ok(snapshot) => snapshot,
        Err(e) => fail(&e),
    };

    let mut query = PrizeQuery::new(snapshot);

    let output = if list_categories {
        render_keys(&query.get_prize_keys_in_order(), format)
    } else if list_countries {
        render_keys(&query.get_country_keys_in_order(), format)
    } else {
        let mut prizes = Selector::prize_selector(&query);
        let mut countries = Selector::country_selector(&query);

        let mut rows = query.current_view();
        if let Some(category) = category {
            rows = prizes
                .select(&category, &mut query)
                .unwrap_or_else(|e| fail(&e));
        }
        if let Some(country) = country {
            rows = countries
                .select(&country, &mut query)
                .unwrap_or_else(|e| fail(&e));
        }
        tracing::info!("Showing {} laureates", rows.len());
        render_rows(&rows, format)
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => fail(&e),
    }
}
