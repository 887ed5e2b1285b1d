use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EnvVars {
    pub jwt_secret: String,
}

impl EnvVars {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["JWT_SECRET"]))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::EnvVars;

    #[test]
    fn loads_secret_from_environment() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("JWT_SECRET", "super-secret");

            let env = EnvVars::load().unwrap();

            assert_eq!(env.jwt_secret, "super-secret");
            Ok(())
        });
    }

    #[test]
    fn fails_when_secret_missing() {
        figment::Jail::expect_with(|_jail| {
            assert!(EnvVars::load().is_err());
            Ok(())
        });
    }
}
