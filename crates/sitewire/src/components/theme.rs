//! Theme controller: light/dark mode attribute, icon glyph, spin animation.

use sitewire_dom::{Effect, Event, NodeId, TimerKey};
use sitewire_store::PrefKey;

use crate::app::{AppEvent, Component, Ctx};

/// How long the toggle button's rotation transition runs before resetting.
const SPIN_MS: u64 = 300;

/// The two visual modes. Anything unexpected read back from storage parses
/// as `Light`, so the store invariant (always one of the two) holds even
/// against a hand-edited preference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Toggle glyph: the icon advertises the mode you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }
}

/// Applies the stored theme at mount and flips it on toggle clicks.
///
/// The flip is a binary flip of the in-memory value, not a read-modify of
/// the store. Re-clicking mid-animation reschedules the keyed reset timer,
/// restarting the transform.
pub struct ThemeToggle {
    mode: ThemeMode,
    root: Option<NodeId>,
    button: Option<NodeId>,
    icon: Option<NodeId>,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::Light,
            root: None,
            button: None,
            icon: None,
        }
    }

    fn apply_mode(&self, ctx: &mut Ctx<'_>) {
        if let Some(root) = self.root {
            ctx.apply(Effect::SetAttr {
                node: root,
                name: "data-theme".to_string(),
                value: self.mode.as_str().to_string(),
            });
        }
        if let Some(icon) = self.icon {
            ctx.apply(Effect::SetText {
                node: icon,
                text: self.mode.icon().to_string(),
            });
        }
    }

    fn reset_key(&self) -> TimerKey {
        TimerKey::new("theme", self.button, "reset")
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ThemeToggle {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        let Some(root) = ctx.page().root() else {
            return false;
        };
        self.root = Some(root);
        // The toggle button is optional: the stored mode still gets applied
        // to the page; only the click affordance goes missing.
        self.button = ctx.page().by_id("themeToggle");
        self.icon = ctx.page().by_class("theme-icon").first().copied();
        self.mode = ThemeMode::parse(&ctx.store().get(PrefKey::Theme));
        self.apply_mode(ctx);
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::Dom(Event::Click { target }) if Some(*target) == self.button => {
                self.mode = self.mode.flipped();
                self.apply_mode(ctx);
                ctx.store_mut().set(PrefKey::Theme, self.mode.as_str());
                if let Some(button) = self.button {
                    ctx.apply(Effect::SetStyle {
                        node: button,
                        name: "transform".to_string(),
                        value: "rotate(360deg)".to_string(),
                    });
                    ctx.apply(Effect::Schedule {
                        key: self.reset_key(),
                        after_ms: SPIN_MS,
                    });
                }
            }
            AppEvent::Dom(Event::Timer { key }) if *key == self.reset_key() => {
                if let Some(button) = self.button {
                    ctx.apply(Effect::SetStyle {
                        node: button,
                        name: "transform".to_string(),
                        value: "rotate(0deg)".to_string(),
                    });
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_never_leaves_the_two_modes() {
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
    }

    #[test]
    fn flip_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.flipped().flipped(), mode);
        }
    }

    #[test]
    fn icon_advertises_the_other_mode() {
        assert_eq!(ThemeMode::Light.icon(), "🌙");
        assert_eq!(ThemeMode::Dark.icon(), "☀️");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parsing_any_stored_value_round_trips(value in ".*") {
            let mode = ThemeMode::parse(&value);
            prop_assert_eq!(ThemeMode::parse(mode.as_str()), mode);
        }
    }
}
