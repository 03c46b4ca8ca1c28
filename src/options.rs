const DEFAULT_NAMING: CompositeNaming = CompositeNaming::Positional;
const DEFAULT_SPLIT_DESTINATIONS: bool = true;
const DEFAULT_MAX_STATES: Option<usize> = None;

/// How the subset construction identifies composite states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeNaming {
    /// A composite state is the string concatenation of the names of its successors.
    /// The successors of a composite are collected from the source states at the positions `0..len(name)`,
    /// so the names only describe the intended subsets if the source states are named like `s0`, `s1`, ... in order.
    Positional,
    /// A composite state is the set of source states it stands for.
    /// Composites are accepting if any member is accepting, and the empty set is the dead state.
    StateSet,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// How composite states are identified during subset construction.
    pub naming: CompositeNaming,
    /// Whether a comma-joined destination in a transition record (`s0:a>s1,s2`) yields one transition per destination.
    /// If `false`, the whole destination is read as a single state name.
    pub split_destinations: bool,
    /// The maximum number of states a single subset construction pass may create.
    /// If the limit is reached, the construction fails instead of growing further.
    /// `None` means unbounded.
    pub max_states: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            naming: DEFAULT_NAMING,
            split_destinations: DEFAULT_SPLIT_DESTINATIONS,
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

impl Options {
    pub fn set_max_states(&mut self, max: usize) {
        self.max_states = Some(max)
    }

    pub fn with_naming(mut self, naming: CompositeNaming) -> Self {
        self.naming = naming;
        self
    }
}
