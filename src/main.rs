use clap::Parser;
use clumio_sdk::config::Command;
use clumio_sdk::core::ConfigProvider;
use clumio_sdk::utils::error::ErrorSeverity;
use clumio_sdk::utils::{logger, validation::Validate};
use clumio_sdk::{
    CliConfig, ClumioClient, ClumioError, ExportFormat, Exporter, Filter, ListParams,
    LocalStorage,
};
use std::time::Duration;

const DEFAULT_LIST_LIMIT: u32 = 100;

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI command: {:?}", config.command);

    if let Err(e) = run(&mut config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: &mut CliConfig) -> Result<(), ClumioError> {
    config.load_file_config()?;
    config.validate()?;

    let client = ClumioClient::from_config(&*config)?;
    tracing::debug!(
        "Using {} (OU context: {})",
        config.base_url(),
        config.organizational_unit_context().unwrap_or("-")
    );

    match config.command.clone() {
        Command::List {
            resource,
            filter,
            limit,
            all,
            sort,
        } => {
            let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
            let mut params = list_params(filter.as_deref())?.limit(limit);
            if let Some(sort) = sort {
                params = params.sort(sort);
            }
            let max_items = if all { None } else { Some(limit as usize) };

            let items = client.lister(resource).list_values(&params, max_items).await?;
            tracing::info!("📋 {} {} item(s)", items.len(), resource);
            print_json(&items)?;
        }
        Command::Get { resource, id } => {
            let item = client.reader(resource)?.read_value(&id).await?;
            print_json(&item)?;
        }
        Command::Export {
            resource,
            format,
            output_path,
            filter,
        } => {
            let format: ExportFormat = format
                .as_deref()
                .or(config.export_format())
                .unwrap_or("csv")
                .parse()?;
            let output_path = output_path.unwrap_or_else(|| config.export_output_path());
            clumio_sdk::utils::validation::validate_path("output_path", &output_path)?;

            let params = list_params(filter.as_deref())?;
            let items = client.lister(resource).list_values(&params, None).await?;

            let exporter = Exporter::new(LocalStorage::new(output_path.clone()), output_path);
            let written = exporter.export(resource.as_str(), &items, format).await?;
            tracing::info!("📁 Exported {} {} item(s)", items.len(), resource);
            println!("{}", written);
        }
        Command::Task {
            id,
            wait,
            timeout_seconds,
            poll_seconds,
        } => {
            let tasks = client.tasks();
            let task = if wait {
                tasks
                    .wait_for_task(
                        &id,
                        Duration::from_secs(poll_seconds),
                        Duration::from_secs(timeout_seconds),
                    )
                    .await?
            } else {
                tasks.read_task(&id).await?
            };
            print_json(&task)?;
        }
    }

    Ok(())
}

fn list_params(filter: Option<&str>) -> Result<ListParams, ClumioError> {
    let mut params = ListParams::new();
    if let Some(raw) = filter {
        params = params.filter(Filter::from_json_str(raw)?);
    }
    Ok(params)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), ClumioError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
