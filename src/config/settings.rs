use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use podio::{DecodeOptions, UnknownFieldPolicy, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub decoder: DecoderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DecoderSettings {
    /// Tag de tipo desconhecida vira erro em vez de campo opaco
    pub strict_unknown_types: bool,
    /// Coleta erros de campo em vez de abortar o item
    pub collect_field_errors: bool,
    pub max_depth: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Filtro padrão do tracing quando RUST_LOG não está definido
    pub level: String,
}

impl Settings {
    /// Carrega a partir do diretório `config/` relativo ao diretório atual
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Camadas, da menor para a maior prioridade:
    /// defaults embutidos, `{dir}/default`, `{dir}/{RUN_MODE}`, variáveis `PODIO__*`
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("decoder.strict_unknown_types", false)?
            .set_default("decoder.collect_field_errors", false)?
            .set_default("decoder.max_depth", DEFAULT_MAX_DEPTH as u64)?
            .set_default("logging.level", "info")?
            // Arquivo de configuração base
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&dir.join(&run_mode).to_string_lossy()).required(false))
            // PODIO__DECODER__MAX_DEPTH=4 -> decoder.max_depth
            .add_source(Environment::with_prefix("PODIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn decode_options(&self) -> DecodeOptions {
        let unknown_types = if self.decoder.strict_unknown_types {
            UnknownFieldPolicy::Strict
        } else {
            UnknownFieldPolicy::Lenient
        };

        DecodeOptions {
            unknown_types,
            max_depth: self.decoder.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    // Todas as variáveis lidas pelo loader, para isolar cada teste
    fn clean_env<'a>(overrides: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
        let mut vars: Vec<(&str, Option<&str>)> = vec![
            ("RUN_MODE", None),
            ("PODIO__DECODER__STRICT_UNKNOWN_TYPES", None),
            ("PODIO__DECODER__COLLECT_FIELD_ERRORS", None),
            ("PODIO__DECODER__MAX_DEPTH", None),
            ("PODIO__LOGGING__LEVEL", None),
        ];
        for &(key, value) in overrides {
            vars.retain(|(k, _)| *k != key);
            vars.push((key, Some(value)));
        }
        vars
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();

        let settings =
            temp_env::with_vars(clean_env(&[]), || Settings::load_from(dir.path())).unwrap();

        assert!(!settings.decoder.strict_unknown_types);
        assert!(!settings.decoder.collect_field_errors);
        assert_eq!(settings.decoder.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.decode_options(), DecodeOptions::default());
    }

    #[test]
    fn test_run_mode_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[decoder]\nmax_depth = 8\n\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("test.toml"),
            "[decoder]\nstrict_unknown_types = true\n",
        )
        .unwrap();

        let settings = temp_env::with_vars(clean_env(&[("RUN_MODE", "test")]), || {
            Settings::load_from(dir.path())
        })
        .unwrap();

        assert_eq!(settings.decoder.max_depth, 8);
        assert!(settings.decoder.strict_unknown_types);
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.decode_options().unknown_types, UnknownFieldPolicy::Strict);
    }

    #[test]
    fn test_environment_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[decoder]\nmax_depth = 8\n").unwrap();

        let settings = temp_env::with_vars(
            clean_env(&[
                ("PODIO__DECODER__MAX_DEPTH", "2"),
                ("PODIO__DECODER__COLLECT_FIELD_ERRORS", "true"),
            ]),
            || Settings::load_from(dir.path()),
        )
        .unwrap();

        assert_eq!(settings.decoder.max_depth, 2);
        assert!(settings.decoder.collect_field_errors);
        assert_eq!(settings.decode_options().max_depth, 2);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[decoder]\nmax_depth = \"fundo\"\n").unwrap();

        let result = temp_env::with_vars(clean_env(&[]), || Settings::load_from(dir.path()));
        assert!(result.is_err());
    }
}
