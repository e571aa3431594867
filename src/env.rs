use std::sync::LazyLock;

pub struct Env {
    port: u16,
    pokedex_seed: Option<String>,
}

impl Env {
    fn get() -> &'static Self {
        static ENV: LazyLock<Env> = LazyLock::new(|| {
            let port = env_with_default_for_empty("PORT", "3000")
                .parse::<u16>()
                .expect("Failed to parse PORT env var as u16");

            let pokedex_seed = match std::env::var("POKEDEX_SEED") {
                Ok(pokedex_seed) if !pokedex_seed.is_empty() => Some(pokedex_seed),
                Ok(_) | Err(std::env::VarError::NotPresent) => None,
                Err(err) => panic!("Invalid POKEDEX_SEED env var: {err:?}"),
            };

            Env { port, pokedex_seed }
        });

        &ENV
    }

    #[must_use]
    pub fn port() -> u16 {
        Self::get().port
    }

    /// Path to a JSON seed file for the Pokedex store, if configured.
    #[must_use]
    pub fn pokedex_seed() -> Option<&'static str> {
        Self::get().pokedex_seed.as_deref()
    }
}

fn env_with_default_for_empty(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Err(std::env::VarError::NotPresent) => default.to_string(),
        Ok(value) if value.is_empty() => default.to_string(),
        Ok(value) => value,
        Err(err) => panic!("Invalid {var} env var: {err:?}"),
    }
}
