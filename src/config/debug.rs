//! Debug-build print switches, grouped so they can be flipped in one place.

pub struct DebugFlags {
    /// Log clicks, quick-select fills and validation rejections
    pub print_ui_interactions: bool,
    /// Log the raw JSON bodies returned by the backend
    pub print_api_responses: bool,
    /// Log every view-state transition as it is applied
    pub print_state_transitions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_api_responses: false,
    print_state_transitions: true,
};
