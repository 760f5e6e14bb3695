// Light/dark theme state and the palette computed from it.
// Colors track the MUI palette the site launched with.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Root class that flips the CSS custom properties.
    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

/// Colors and gradients derived from the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    /// Full-bleed gradient behind About / Projects / Contact.
    pub page_gradient: &'static str,
    /// The deeper gradient behind the Home hero.
    pub hero_gradient: &'static str,
}

impl Palette {
    pub fn of(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Light => Palette {
                primary: "#6366F1",
                secondary: "#4F46E5",
                background: "#F3F4F6",
                paper: "#FFFFFF",
                page_gradient:
                    "linear-gradient(135deg, #E0E7FF 0%, #C7D2FE 30%, #A5B4FC 60%, #C7D2FE 100%)",
                hero_gradient:
                    "linear-gradient(135deg, #f8f9ff 0%, #e6e9ff 30%, #d6dbff 60%, #e6e9ff 100%)",
            },
            ThemeMode::Dark => Palette {
                primary: "#6366F1",
                secondary: "#818CF8",
                background: "#121212",
                paper: "#1E1E1E",
                page_gradient:
                    "linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #334155 100%)",
                hero_gradient:
                    "linear-gradient(135deg, #0a0a0f 0%, #1a1a2e 50%, #16213e 100%)",
            },
        }
    }
}

/// The one theme state holder. Provided once at the app root,
/// read by every component that styles itself.
#[derive(Clone, Copy)]
pub struct ThemeContext(RwSignal<ThemeMode>);

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.0.get()
    }

    pub fn is_dark(&self) -> bool {
        self.0.get().is_dark()
    }

    /// Flips the mode and nothing else.
    pub fn toggle(&self) {
        self.0.update(|mode| *mode = mode.toggled());
    }

    pub fn palette(&self) -> Palette {
        Palette::of(self.0.get())
    }
}

pub fn provide_theme() {
    provide_context(ThemeContext(RwSignal::new(ThemeMode::default())));
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_twice_restores_the_mode() {
        let start = ThemeMode::default();
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn palettes_differ_between_modes() {
        let light = Palette::of(ThemeMode::Light);
        let dark = Palette::of(ThemeMode::Dark);
        assert_ne!(light, dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.page_gradient, dark.page_gradient);
    }

    #[test]
    fn primary_is_mode_independent() {
        assert_eq!(
            Palette::of(ThemeMode::Light).primary,
            Palette::of(ThemeMode::Dark).primary
        );
    }
}
