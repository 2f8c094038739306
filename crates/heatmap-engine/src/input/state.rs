use super::types::{InputEvent, Modifiers};

/// Input state the runtime keeps between events of a single window.
///
/// Only the modifier set is retained: wheel events carry no modifiers of their
/// own, so translation stamps them from here. Events themselves are handed to
/// the app as they arrive and never buffered.
#[derive(Debug, Copy, Clone, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::Key { modifiers, .. } => self.modifiers = *modifiers,
            // Releases are not delivered while unfocused.
            InputEvent::Focused(false) => self.modifiers = Modifiers::default(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, PointerMoveEvent};

    fn shift() -> Modifiers {
        Modifiers { shift: true, ..Modifiers::default() }
    }

    #[test]
    fn modifiers_follow_change_and_key_events() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::ModifiersChanged(shift()));
        assert_eq!(st.modifiers, shift());

        st.apply_event(&InputEvent::Key {
            key: Key::H,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: false,
        });
        assert_eq!(st.modifiers, Modifiers::default());
    }

    #[test]
    fn focus_loss_drops_modifiers() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::ModifiersChanged(shift()));
        st.apply_event(&InputEvent::Focused(false));
        assert_eq!(st.modifiers, Modifiers::default());
    }

    #[test]
    fn pointer_stream_without_frames_retains_nothing() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::ModifiersChanged(shift()));
        for i in 0..200_000 {
            let ev = InputEvent::PointerMoved(PointerMoveEvent { x: i as f32, y: 1.0 });
            st.apply_event(&ev);
        }
        assert_eq!(st.modifiers, shift());
        assert_eq!(std::mem::size_of::<InputState>(), std::mem::size_of::<Modifiers>());
    }
}
