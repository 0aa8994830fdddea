/// Display state of the "select all" header checkbox.
///
/// Computed from the visible page and the selection on every render; the
/// rendering layer copies it onto whatever checkbox primitive it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeaderTriState {
    pub checked: bool,
    pub indeterminate: bool,
}

impl HeaderTriState {
    pub const UNCHECKED: Self = Self {
        checked: false,
        indeterminate: false,
    };

    pub const CHECKED: Self = Self {
        checked: true,
        indeterminate: false,
    };

    pub const INDETERMINATE: Self = Self {
        checked: false,
        indeterminate: true,
    };
}
