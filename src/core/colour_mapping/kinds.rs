use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    Cubehelix,
    Hsv,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::Cubehelix, Self::Hsv];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cubehelix => "Cubehelix",
            Self::Hsv => "HSV escape",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Cubehelix => "cubehelix",
            Self::Hsv => "hsv",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourMapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.cli_name()).collect();
                format!("unknown colour map '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_names_case_insensitively() {
        assert_eq!("cubehelix".parse(), Ok(ColourMapKind::Cubehelix));
        assert_eq!("HSV".parse(), Ok(ColourMapKind::Hsv));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "viridis".parse::<ColourMapKind>().unwrap_err();

        assert!(err.contains("cubehelix, hsv"));
    }
}
