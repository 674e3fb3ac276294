/// State selected in the dropdown on first render, when the data has it.
pub const DEFAULT_STATE: &str = "Tamil Nadu";

/// The pair of control values that decides what the chart shows.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ViewState {
    pub year: i32,
    pub state: String,
}

impl ViewState {
    pub fn new(year: i32, state: impl Into<String>) -> Self {
        Self {
            year,
            state: state.into(),
        }
    }

    /// Initial controls: the earliest year, and [`DEFAULT_STATE`] if it is one of
    /// the options, otherwise the first option. `None` when there are no states.
    pub fn initial(first_year: i32, states: &[String]) -> Option<Self> {
        let state = states
            .iter()
            .find(|s| s.as_str() == DEFAULT_STATE)
            .or_else(|| states.first())?;
        Some(Self::new(first_year, state.clone()))
    }
}
