#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorChoice {
    Always,
    Never { env_var: String },
}

impl ColorChoice {
    pub fn enabled(&self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Color choice for the `diff` subcommand. `diffnc` never colors.
pub fn diff_color() -> ColorChoice {
    if std::env::var_os("UFODIFF_FORCE_COLOR").is_some() {
        return ColorChoice::Always;
    }

    if std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        return ColorChoice::Never {
            env_var: "NO_COLOR".to_string(),
        };
    }

    ColorChoice::Always
}

/// Filter directive for the tracing subscriber, from `UFODIFF_LOG`.
pub fn log_filter() -> String {
    std::env::var("UFODIFF_LOG")
        .ok()
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}
