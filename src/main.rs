//! podio-items: inspeção de items do Podio
//!
//! Lê o JSON de um item (ou de uma lista de items do endpoint de filtro) de um
//! arquivo ou do stdin, decodifica os campos pela tag `type` e imprime o
//! resultado como resumo legível ou como JSON re-codificado.
//!
//! Configuração em camadas (config/default.toml, config/{RUN_MODE}.toml,
//! variáveis PODIO__*), com flags da linha de comando por cima.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use podio::{DecodeOptions, ItemDecoder, UnknownFieldPolicy};
use podio_items::config::Settings;
use podio_items::report;
use podio_items::utils::{logging::*, AppResult};

/// Decodifica items do Podio em campos tipados
#[derive(Parser)]
#[command(name = "podio-items")]
#[command(version = "0.1.0")]
#[command(about = "Decodifica o JSON de items do Podio", long_about = None)]
struct Cli {
    /// Arquivo JSON do item (stdin se omitido)
    input: Option<PathBuf>,

    /// Entrada é o resultado do endpoint de filtro (`filtered`, `total`, `items`)
    #[arg(short = 'l', long)]
    list: bool,

    /// Tag de tipo desconhecida aborta o item
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Tag de tipo desconhecida vira campo opaco (padrão)
    #[arg(long)]
    lenient: bool,

    /// Omite e lista campos com erro em vez de abortar o item
    #[arg(short = 'c', long)]
    collect: bool,

    /// Profundidade máxima de items aninhados via campos `app`
    #[arg(long)]
    max_depth: Option<usize>,

    /// Formato de saída (summary, json, pretty)
    #[arg(short = 'o', long, default_value = "summary")]
    output: OutputFormat,

    /// Modo verbose para debug
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Clone, Debug, PartialEq)]
enum OutputFormat {
    Summary,
    Json,
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Formato desconhecido: {}", s)),
        }
    }
}

fn main() {
    // Carregar variáveis de ambiente do .env (se existir)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Erro: Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    let level = if cli.verbose { "debug" } else { settings.logging.level.as_str() };
    init_tracing(level);

    let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    log_config_loaded(&env);

    match run(&cli, &settings) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("❌ Erro: {}", e);
            std::process::exit(1);
        }
    }
}

/// Opções efetivas: settings com as flags da CLI por cima
fn decode_options(cli: &Cli, settings: &Settings) -> DecodeOptions {
    let mut options = settings.decode_options();
    if cli.strict {
        options.unknown_types = UnknownFieldPolicy::Strict;
    } else if cli.lenient {
        options.unknown_types = UnknownFieldPolicy::Lenient;
    }
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    options
}

fn read_input(cli: &Cli) -> AppResult<String> {
    let buffer = match &cli.input {
        Some(path) => {
            let buffer = std::fs::read_to_string(path)?;
            log_input_read(&path.display().to_string(), buffer.len());
            buffer
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            log_input_read("stdin", buffer.len());
            buffer
        }
    };
    Ok(buffer)
}

/// Retorna o exit code: 0 sucesso, 3 item decodificado com campos omitidos
fn run(cli: &Cli, settings: &Settings) -> AppResult<i32> {
    let decoder = ItemDecoder::new(decode_options(cli, settings));
    let input = read_input(cli)?;

    if cli.list {
        let list = decoder.decode_item_list(&input)?;
        log_item_list_decoded(list.items.len(), list.total);

        match cli.output {
            OutputFormat::Summary => print!("{}", report::item_list_summary(&list)),
            OutputFormat::Json => println!("{}", serde_json::to_string(&list)?),
            OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&list)?),
        }
        return Ok(0);
    }

    let (item, errors) = if cli.collect || settings.decoder.collect_field_errors {
        let partial = decoder.decode_item_partial(&input)?;
        (partial.item, partial.errors)
    } else {
        (decoder.decode_item(&input)?, Vec::new())
    };

    log_item_decoded(item.id(), item.fields().len());
    if !errors.is_empty() {
        log_field_errors(item.id(), errors.len());
    }

    match cli.output {
        OutputFormat::Summary => print!("{}", report::item_summary(&item)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&item)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&item)?),
    }

    if errors.is_empty() {
        Ok(0)
    } else {
        eprint!("{}", report::errors_summary(&errors));
        Ok(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podio_items::config::{DecoderSettings, LoggingSettings};

    fn settings(strict: bool) -> Settings {
        Settings {
            decoder: DecoderSettings {
                strict_unknown_types: strict,
                collect_field_errors: false,
                max_depth: 16,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("summary".parse::<OutputFormat>(), Ok(OutputFormat::Summary));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cli_flags_override_settings() {
        let cli = Cli::parse_from(["podio-items", "item.json", "--lenient", "--max-depth", "3"]);
        let options = decode_options(&cli, &settings(true));
        assert_eq!(options.unknown_types, UnknownFieldPolicy::Lenient);
        assert_eq!(options.max_depth, 3);

        let cli = Cli::parse_from(["podio-items", "--strict"]);
        let options = decode_options(&cli, &settings(false));
        assert_eq!(options.unknown_types, UnknownFieldPolicy::Strict);
        assert_eq!(options.max_depth, 16);
    }

    #[test]
    fn test_settings_apply_without_flags() {
        let cli = Cli::parse_from(["podio-items", "-o", "pretty"]);
        assert_eq!(cli.output, OutputFormat::Pretty);
        assert_eq!(decode_options(&cli, &settings(true)).unknown_types, UnknownFieldPolicy::Strict);
    }
}
