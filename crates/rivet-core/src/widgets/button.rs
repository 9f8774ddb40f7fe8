//! Button states and their presets

use crate::style::{StyleName, StyleRegistry};
use crate::tree::{NodeId, WidgetTree};

/// Visual state of a button-like object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
    ToggledReleased,
    ToggledPressed,
    Inactive,
}

impl ButtonState {
    pub fn press(self) -> Self {
        match self {
            ButtonState::Released => ButtonState::Pressed,
            ButtonState::ToggledReleased => ButtonState::ToggledPressed,
            other => other,
        }
    }

    pub fn release(self) -> Self {
        match self {
            ButtonState::Pressed => ButtonState::Released,
            ButtonState::ToggledPressed => ButtonState::ToggledReleased,
            other => other,
        }
    }

    /// Flip between the plain and the toggled variant of the state
    pub fn toggle(self) -> Self {
        match self {
            ButtonState::Released => ButtonState::ToggledReleased,
            ButtonState::Pressed => ButtonState::ToggledPressed,
            ButtonState::ToggledReleased => ButtonState::Released,
            ButtonState::ToggledPressed => ButtonState::Pressed,
            ButtonState::Inactive => ButtonState::Inactive,
        }
    }
}

/// Which family of presets a button uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyleSet {
    #[default]
    Plain,
    ListElement,
}

impl ButtonStyleSet {
    /// The preset drawn for `state`
    pub fn style_name(self, state: ButtonState) -> StyleName {
        match (self, state) {
            (ButtonStyleSet::Plain, ButtonState::Released) => StyleName::ButtonReleased,
            (ButtonStyleSet::Plain, ButtonState::Pressed) => StyleName::ButtonPressed,
            (ButtonStyleSet::Plain, ButtonState::ToggledReleased) => StyleName::ButtonToggledReleased,
            (ButtonStyleSet::Plain, ButtonState::ToggledPressed) => StyleName::ButtonToggledPressed,
            (ButtonStyleSet::Plain, ButtonState::Inactive) => StyleName::ButtonInactive,
            (ButtonStyleSet::ListElement, ButtonState::Released) => StyleName::ListElementReleased,
            (ButtonStyleSet::ListElement, ButtonState::Pressed) => StyleName::ListElementPressed,
            (ButtonStyleSet::ListElement, ButtonState::ToggledReleased) => {
                StyleName::ListElementToggledReleased
            }
            (ButtonStyleSet::ListElement, ButtonState::ToggledPressed) => {
                StyleName::ListElementToggledPressed
            }
            (ButtonStyleSet::ListElement, ButtonState::Inactive) => StyleName::ListElementInactive,
        }
    }
}

impl WidgetTree {
    /// Switch an object to the preset of `state` in `set`
    pub fn apply_button_state(
        &mut self,
        id: NodeId,
        registry: &StyleRegistry,
        set: ButtonStyleSet,
        state: ButtonState,
    ) {
        self.set_style(id, registry.shared(set.style_name(state)));
    }
}
