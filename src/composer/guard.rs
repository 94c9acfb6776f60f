//! Scoped ownership of the submit control for one request.

use crate::dom::SubmitControl;

/// Holds the submit control in its sending state.
///
/// Acquiring remembers the control's caption, disables it and shows the
/// sending caption. Dropping re-enables it and puts the remembered caption
/// back, on every exit path including early returns, `?` and unwinding.
pub(crate) struct SendingGuard<'a> {
    control: &'a dyn SubmitControl,
    original_label: String,
}

impl<'a> SendingGuard<'a> {
    /// Returns `None` if the control is already disabled, i.e. another
    /// request is in flight.
    pub(crate) fn acquire(control: &'a dyn SubmitControl, sending_label: &str) -> Option<Self> {
        if control.is_disabled() {
            return None;
        }
        let original_label = control.label();
        control.set_disabled(true);
        control.set_label(sending_label);
        Some(Self {
            control,
            original_label,
        })
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.control.set_disabled(false);
        self.control.set_label(&self.original_label);
    }
}
