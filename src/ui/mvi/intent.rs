/// Marker for user actions a screen reacts to: a keystroke that edits a
/// field, a selection, a submit, a visibility toggle.
pub trait Intent: Send + 'static {}
