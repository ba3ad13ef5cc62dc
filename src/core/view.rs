//! Observable view state the workflows write into.

/// The display-facing state of the two workflows.
///
/// Each display region is written by exactly one workflow: the balance query
/// owns `balance_region`, the conversion owns `result_region`. The only state
/// both touch is `convert_enabled`: the balance query may set it, the
/// conversion clears it when it submits.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last rendering of the balance query: a formatted balance or a
    /// structured error.
    pub balance_region: Option<String>,
    /// Last rendering of the conversion: a transaction link, fixed guidance,
    /// or a structured error.
    pub result_region: Option<String>,
    /// Whether the conversion trigger is currently available. Enabled only by
    /// a balance query observing a strictly positive balance.
    pub convert_enabled: bool,
    /// Busy indicator of the balance query workflow.
    pub balance_busy: bool,
    /// Busy indicator of the conversion workflow.
    pub convert_busy: bool,
}
