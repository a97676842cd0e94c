use anyhow::Context;
use clap::Parser;
use package_route::config::toml_config::TomlConfig;
use package_route::config::{Command, LogFormat, OutputFormat};
use package_route::utils::error::ErrorSeverity;
use package_route::utils::{logger, validation::Validate};
use package_route::{
    get_package_route, parse_segments, segments_from_location, use_package_route, CliConfig,
    MemoryRouter, PackageIdentity, Route, RouteError,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入配置檔 (日誌尚未初始化，錯誤直接輸出)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, file_config.log_level()),
        LogFormat::Json => logger::init_json_logger(cli.verbose, file_config.log_level()),
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = file_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &file_config).await {
        let Some(route_error) = e.downcast_ref::<RouteError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            route_error,
            route_error.category(),
            route_error.severity()
        );
        eprintln!("❌ {}", route_error.user_friendly_message());
        eprintln!("💡 {}", route_error.recovery_suggestion());

        let exit_code = match route_error.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig, file_config: &TomlConfig) -> anyhow::Result<()> {
    let format = match cli.format {
        Some(format) => format,
        None => file_config.output_format()?.unwrap_or_default(),
    };

    match &cli.command {
        Command::Build { name, version, url } => {
            let route = get_package_route(name, version.as_deref());
            tracing::debug!(path = %route.to_path(), "route built");
            let absolute = if *url {
                Some(file_config.absolute_url(&route.to_path())?)
            } else {
                None
            };
            print_route(&route, absolute.as_deref(), format)?;
        }
        Command::Parse { location } => {
            let segments = segments_from_location(location)?;
            print_identity(&parse_segments(&segments), format)?;
        }
        Command::Watch => watch_stdin(format).await?,
    }

    Ok(())
}

async fn watch_stdin(format: OutputFormat) -> anyhow::Result<()> {
    let router = MemoryRouter::new();
    let route = use_package_route(&router);
    let mut last_printed: Option<PackageIdentity> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let location = line.trim();
        if location.is_empty() {
            continue;
        }

        if let Err(e) = router.navigate_to(location) {
            tracing::warn!("⚠️ Skipping '{}': {}", location, e);
            continue;
        }

        let identity = route.identity();
        if last_printed.as_ref() != Some(&*identity) {
            print_identity(&identity, format)?;
            last_printed = Some((*identity).clone());
        }
    }

    tracing::info!(
        "✅ Watch finished after {} recomputations",
        route.binding().recomputations()
    );
    Ok(())
}

fn print_route(route: &Route, absolute_url: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", route.to_path());
            if let Some(url) = absolute_url {
                println!("{}", url);
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(route).map_err(RouteError::from)?;
            if let Some(url) = absolute_url {
                value["url"] = serde_json::Value::String(url.to_string());
            }
            println!("{}", serde_json::to_string(&value).map_err(RouteError::from)?);
        }
    }
    Ok(())
}

fn print_identity(identity: &PackageIdentity, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => match &identity.requested_version {
            Some(version) => println!("{}\t{}", identity.package_name, version),
            None => println!("{}", identity.package_name),
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(identity).map_err(RouteError::from)?);
        }
    }
    Ok(())
}
