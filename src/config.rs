//! Configuración central de la aplicación demo.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`). El engine (`pipe-core`) no necesita configuración.
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Entrada de las ejecuciones demo (`PIPE_DEMO_INPUT`).
    pub demo_input: i64,
    /// Tamaño del lote concurrente (`PIPE_DEMO_BATCH`).
    pub demo_batch: usize,
    /// Filtro de logs por defecto si `RUST_LOG` no está definido (`PIPE_LOG`).
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let demo_input = env_parse("PIPE_DEMO_INPUT").unwrap_or(5);
        let demo_batch = env_parse("PIPE_DEMO_BATCH").unwrap_or(8);
        let log_filter = env::var("PIPE_LOG").unwrap_or_else(|_| "info".to_string());
        Self { demo_input, demo_batch, log_filter }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { demo_input: 5,
               demo_batch: 8,
               log_filter: "info".to_string() }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Forzar carga temprana de .env desde el binario.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parse_ignores_garbage() {
        env::set_var("PIPE_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_parse::<i64>("PIPE_TEST_GARBAGE"), None);
        env::set_var("PIPE_TEST_NUMBER", " 42 ");
        assert_eq!(env_parse::<i64>("PIPE_TEST_NUMBER"), Some(42));
        assert_eq!(env_parse::<i64>("PIPE_TEST_MISSING_KEY"), None);
    }

    #[test]
    fn defaults_match_documented_values() {
        let c = AppConfig::default();
        assert_eq!(c.demo_input, 5);
        assert_eq!(c.demo_batch, 8);
        assert_eq!(c.log_filter, "info");
    }
}
