// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard shortcuts: parsing binding text like `"Ctrl+Shift+R"`, the actions they
//! trigger, and registering them with the host's global hotkey service.

use std::{collections::{BTreeMap, HashMap},
          fmt::{Debug, Display, Formatter, Result},
          str::FromStr,
          sync::mpsc::Sender};

use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::{InlineString, inline_string};

/// Something a shortcut can do. The names are the keys of the `shortcuts` map in the
/// config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ShortcutAction {
    Reset,
    Copy,
    ToggleTransparency,
    ToggleMagnifier,
    ToggleSnapping,
    PointToPoint,
    Quit,
    Help,
    ClearGuides,
}

#[must_use]
pub fn default_shortcuts() -> [(ShortcutAction, &'static str); 9] {
    [
        (ShortcutAction::Reset, "Ctrl+R"),
        (ShortcutAction::Copy, "Ctrl+C"),
        (ShortcutAction::ToggleTransparency, "Ctrl+T"),
        (ShortcutAction::ToggleMagnifier, "Ctrl+M"),
        (ShortcutAction::ToggleSnapping, "Ctrl+S"),
        (ShortcutAction::PointToPoint, "Ctrl+P"),
        (ShortcutAction::Quit, "Ctrl+Q"),
        (ShortcutAction::Help, "F1"),
        (ShortcutAction::ClearGuides, "Ctrl+G"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub win: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        win: false,
    };

    #[must_use]
    pub fn is_empty(&self) -> bool { *self == Self::NONE }
}

/// A key plus the modifiers held with it. The key name is normalized: single characters
/// are upper case (`"R"`), longer names are capitalized (`"F1"`, `"Left"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub modifiers: Modifiers,
    pub key: InlineString,
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum KeyBindingParseError {
    #[error("Key binding is empty")]
    Empty,

    #[error("Key binding '{binding}' has no key, only modifiers")]
    #[diagnostic(help("Add a key after the modifiers, eg: Ctrl+R"))]
    MissingKey { binding: String },

    #[error("Unknown modifier '{modifier}' in key binding '{binding}'")]
    #[diagnostic(help("Use Ctrl, Alt, Shift or Win"))]
    UnknownModifier { modifier: String, binding: String },
}

fn normalize_key(it: &str) -> InlineString {
    let mut chars = it.chars();
    match chars.next() {
        None => InlineString::new(),
        Some(first) => {
            let rest: String = chars.as_str().to_lowercase();
            inline_string!("{}{rest}", first.to_uppercase())
        }
    }
}

fn apply_modifier(modifiers: &mut Modifiers, name: &str) -> bool {
    match name.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => modifiers.ctrl = true,
        "alt" => modifiers.alt = true,
        "shift" => modifiers.shift = true,
        "win" | "super" => modifiers.win = true,
        _ => return false,
    }
    true
}

impl KeyBinding {
    #[must_use]
    pub fn new(modifiers: Modifiers, key: &str) -> Self {
        Self {
            modifiers,
            key: normalize_key(key.trim()),
        }
    }

    /// A key with no modifiers, eg: `F1` or `Left`.
    #[must_use]
    pub fn plain(key: &str) -> Self { Self::new(Modifiers::NONE, key) }
}

impl FromStr for KeyBinding {
    type Err = KeyBindingParseError;

    fn from_str(binding: &str) -> std::result::Result<Self, Self::Err> {
        let binding = binding.trim();
        if binding.is_empty() {
            return Err(KeyBindingParseError::Empty);
        }

        let parts: Vec<&str> = binding.split('+').map(str::trim).collect();
        let Some((key, modifier_names)) = parts.split_last() else {
            return Err(KeyBindingParseError::Empty);
        };

        let mut modifiers = Modifiers::NONE;
        for name in modifier_names {
            if !apply_modifier(&mut modifiers, name) {
                return Err(KeyBindingParseError::UnknownModifier {
                    modifier: (*name).to_string(),
                    binding: binding.to_string(),
                });
            }
        }

        // "Ctrl+" or a lone modifier.
        let mut probe = Modifiers::NONE;
        if key.is_empty() || apply_modifier(&mut probe, key) {
            return Err(KeyBindingParseError::MissingKey {
                binding: binding.to_string(),
            });
        }

        Ok(KeyBinding::new(modifiers, key))
    }
}

impl Display for KeyBinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let Modifiers {
            ctrl,
            alt,
            shift,
            win,
        } = self.modifiers;
        for (held, name) in [(ctrl, "Ctrl"), (alt, "Alt"), (shift, "Shift"), (win, "Win")] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

pub type HotkeyCallback = Box<dyn FnMut() + Send + 'static>;

/// The host's global hotkey service.
pub trait HotkeyRegistry {
    /// Returns `false` if the binding could not be registered (eg: another app owns it).
    fn register(&mut self, binding: &KeyBinding, callback: HotkeyCallback) -> bool;
    fn unregister_all(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationFailureReason {
    UnknownAction,
    InvalidBinding(KeyBindingParseError),
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFailure {
    pub action_name: String,
    pub binding: String,
    pub reason: RegistrationFailureReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationReport {
    pub registered: Vec<(ShortcutAction, KeyBinding)>,
    pub failed: Vec<RegistrationFailure>,
}

impl RegistrationReport {
    #[must_use]
    pub fn is_complete(&self) -> bool { self.failed.is_empty() }
}

/// Register every configured shortcut. Pressing one sends its action on `sender`; the
/// host drains the receiving end and forwards each action to the ruler. Failures are
/// logged and collected in the report, they never stop the remaining registrations.
pub fn register_shortcuts(
    registry: &mut impl HotkeyRegistry,
    shortcuts: &BTreeMap<String, String>,
    sender: &Sender<ShortcutAction>,
) -> RegistrationReport {
    let mut report = RegistrationReport::default();

    for (action_name, binding_text) in shortcuts {
        let failure = |reason| RegistrationFailure {
            action_name: action_name.clone(),
            binding: binding_text.clone(),
            reason,
        };

        let Ok(action) = action_name.parse::<ShortcutAction>() else {
            report.failed.push(failure(RegistrationFailureReason::UnknownAction));
            continue;
        };

        let binding = match binding_text.parse::<KeyBinding>() {
            Ok(binding) => binding,
            Err(error) => {
                report
                    .failed
                    .push(failure(RegistrationFailureReason::InvalidBinding(error)));
                continue;
            }
        };

        let sender = sender.clone();
        let callback: HotkeyCallback = Box::new(move || {
            // The receiver is gone when the app is shutting down.
            sender.send(action).ok();
        });

        if registry.register(&binding, callback) {
            report.registered.push((action, binding));
        } else {
            report.failed.push(failure(RegistrationFailureReason::Rejected));
        }
    }

    for it in &report.failed {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "Could not register shortcut.",
            action = %it.action_name,
            binding = %it.binding,
            reason = ?it.reason
        );
    }

    report
}

/// Keeps callbacks in a map and lets tests (and the CLI) "press" keys. A binding can
/// only be registered once, like most OS hotkey services.
#[derive(Default)]
pub struct InMemoryHotkeyRegistry {
    callbacks: HashMap<KeyBinding, HotkeyCallback>,
}

impl Debug for InMemoryHotkeyRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("InMemoryHotkeyRegistry")
            .field("bindings", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl InMemoryHotkeyRegistry {
    #[must_use]
    pub fn len(&self) -> usize { self.callbacks.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.callbacks.is_empty() }

    /// Run the callback for `binding`. Returns `false` if nothing is bound to it.
    pub fn press(&mut self, binding: &KeyBinding) -> bool {
        match self.callbacks.get_mut(binding) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl HotkeyRegistry for InMemoryHotkeyRegistry {
    fn register(&mut self, binding: &KeyBinding, callback: HotkeyCallback) -> bool {
        if self.callbacks.contains_key(binding) {
            return false;
        }
        self.callbacks.insert(binding.clone(), callback);
        true
    }

    fn unregister_all(&mut self) { self.callbacks.clear(); }
}
