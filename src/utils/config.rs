pub struct Config {
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub separator: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alive_glyph: Self::ALIVE_GLYPH,
            dead_glyph: Self::DEAD_GLYPH,
            separator: Self::SEPARATOR,
        }
    }
}

impl Config {
    pub const ALIVE_GLYPH: char = '\u{25A3}';
    pub const DEAD_GLYPH: char = '\u{25A2}';
    pub const SEPARATOR: &'static str = " ";

    pub const RANDOM_SIDE: i64 = 16;
    pub const RANDOM_FILL_RATE: f64 = 0.3;

    pub const ALIVE_GLYPH_VAR: &'static str = "LIFE_ALIVE_GLYPH";
    pub const DEAD_GLYPH_VAR: &'static str = "LIFE_DEAD_GLYPH";

    /// Defaults overridden by `LIFE_ALIVE_GLYPH` / `LIFE_DEAD_GLYPH` (first char is used).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let glyph = |key: &str, default: char| {
            lookup(key)
                .and_then(|value| value.chars().next())
                .unwrap_or(default)
        };
        Self {
            alive_glyph: glyph(Self::ALIVE_GLYPH_VAR, Self::ALIVE_GLYPH),
            dead_glyph: glyph(Self::DEAD_GLYPH_VAR, Self::DEAD_GLYPH),
            ..Self::default()
        }
    }
}
