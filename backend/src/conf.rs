// Configuration definitions, functions and tests
//

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string as de_num;
use std::sync::Arc;

static ENV_PREFIX: &str = "EV";

fn prefixed_env(suffix: &str) -> String {
    format!("{}__{}", ENV_PREFIX, suffix)
}

#[derive(Clone, derived_deref::Deref)]
pub struct Conf {
    #[target]
    pub env_conf: Arc<EnvConf>,
    pub env: Env,
}

impl Conf {
    pub fn new(env: Env, env_conf: EnvConf) -> Self {
        Self {
            env_conf: Arc::new(env_conf),
            env,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnvConf {
    #[serde(deserialize_with = "de_num")]
    pub port: u16,
    pub host: String,

    pub sheets: SheetsConf,
    pub uploads_dir: String,
    // directory with the built frontend, served as the fallback
    pub static_dir: Option<String>,

    pub auth: AuthConf,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SheetsConf {
    // None keeps the book in memory only
    pub snapshot: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthConf {
    // seeded into the admins sheet when it is empty
    pub fallback_admin: String,
    // Google-style tokeninfo endpoint; None disables token verification
    // and falls back to the client-provided email
    pub token_info_url: Option<String>,
}

impl EnvConf {
    pub fn derive(env: Env) -> Self {
        fn join_filename(conf_dir: &std::path::Path, filename: &str) -> String {
            conf_dir
                .join(filename)
                .into_os_string()
                .into_string()
                .unwrap()
        }

        let conf_dir = std::env::var(prefixed_env("CONF_DIR"))
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| {
                let base_path = std::env::current_dir().unwrap();
                base_path.join("conf")
            });

        let conf_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&join_filename(&conf_dir, "default")).required(true),
            )
            .add_source(
                config::File::with_name(&join_filename(&conf_dir, env.as_ref())).required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build();

        let conf = conf_builder.unwrap();

        match conf.try_deserialize() {
            Ok(conf) => conf,
            Err(e) => {
                dbg!(&e);
                Err(e).expect("correct config")
            }
        }
    }

    pub fn test_default() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".into(),
            sheets: SheetsConf { snapshot: None },
            uploads_dir: std::env::temp_dir()
                .join("event-uploads-test")
                .to_string_lossy()
                .into_owned(),
            static_dir: None,
            auth: AuthConf {
                fallback_admin: "admin@example.com".into(),
                token_info_url: None,
            },
        }
    }
}

use derive_more::Display;

#[derive(Debug, PartialEq, Display, Clone, Copy)]
pub enum Env {
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "prod")]
    Prod,
}

impl Env {
    pub fn derive() -> Self {
        // One variable to rule all
        let glob_env = std::env::var("EV_ENV").unwrap_or_else(|_| "local".into());

        // Or set a more specific per executable
        std::env::var(prefixed_env("ENV"))
            .unwrap_or(glob_env)
            .try_into()
            .expect("valid variable")
    }

    pub fn local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `prod`.",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envtestkit::{lock::lock_test, set_env};

    #[test]
    fn default_current_env() {
        assert!(Env::derive().local());
    }

    #[test]
    fn env_override() {
        let _lock = lock_test();
        let _guard = set_env("EV_ENV".into(), "prod");

        assert!(Env::derive().prod());
    }

    #[test]
    fn specific_env_override_wins() {
        let _lock = lock_test();
        let _glob = set_env("EV_ENV".into(), "prod");
        let _specific = set_env(prefixed_env("ENV").into(), "local");

        assert!(Env::derive().local());
    }
}
