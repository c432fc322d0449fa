//! Pipeline state: the element sequence or the sticky fault.
//!
//! Every operator goes through `apply` (non-terminal) or `terminal`, which
//! match on the state and short-circuit on `Err` before any element or
//! callback is touched. A fault, once set, is moved along unchanged.

use linq_core::config::PipelineConfig;

use crate::metrics;
use crate::traits::OpError;

#[derive(Debug, Clone)]
pub struct Queryable<T> {
    state: Result<Vec<T>, OpError>,
    config: PipelineConfig,
}

impl<T> Queryable<T> {
    /// Wrap a present sequence. An empty sequence is valid.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            state: Ok(values),
            config: PipelineConfig::default(),
        }
    }

    /// Nullable entry point: `None` faults with `NilInput`.
    pub fn from_option(values: Option<Vec<T>>) -> Self {
        Self::with_config(values, PipelineConfig::default())
    }

    pub fn with_config(values: Option<Vec<T>>, config: PipelineConfig) -> Self {
        let state = values.ok_or(OpError::NilInput);
        if let Err(fault) = &state {
            metrics::emit_fault(config.trace_operators, "from", fault);
        }
        Self { state, config }
    }

    /// A pipeline that starts out faulted.
    pub fn failed(fault: OpError) -> Self {
        Self {
            state: Err(fault),
            config: PipelineConfig::default(),
        }
    }

    /// Replace the configuration carried by this pipeline.
    pub fn configure(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The current elements, or the carried fault.
    pub fn results(self) -> Result<Vec<T>, OpError> {
        self.state
    }

    pub fn fault(&self) -> Option<&OpError> {
        self.state.as_ref().err()
    }

    pub fn is_faulted(&self) -> bool {
        self.state.is_err()
    }

    /// Run a non-terminal operator over the owned elements.
    pub(crate) fn apply<U, F>(self, op: &'static str, f: F) -> Queryable<U>
    where
        F: FnOnce(Vec<T>, &PipelineConfig) -> Result<Vec<U>, OpError>,
    {
        let config = self.config;
        let values = match self.state {
            Ok(values) => values,
            Err(fault) => {
                metrics::emit_skip(config.trace_operators, op);
                return Queryable {
                    state: Err(fault),
                    config,
                };
            }
        };

        let input = values.len();
        let state = f(values, &config);
        match &state {
            Ok(out) => metrics::emit_op(config.trace_operators, op, input, out.len()),
            Err(fault) => metrics::emit_fault(config.trace_operators, op, fault),
        }
        Queryable { state, config }
    }

    /// Run a terminal operator; a carried fault is returned as-is.
    pub(crate) fn terminal<R, F>(self, op: &'static str, f: F) -> Result<R, OpError>
    where
        F: FnOnce(Vec<T>) -> Result<R, OpError>,
    {
        let enabled = self.config.trace_operators;
        let values = match self.state {
            Ok(values) => values,
            Err(fault) => {
                metrics::emit_skip(enabled, op);
                return Err(fault);
            }
        };

        let input = values.len();
        let out = f(values);
        match &out {
            Ok(_) => metrics::emit_op(enabled, op, input, 1),
            Err(fault) => metrics::emit_fault(enabled, op, fault),
        }
        out
    }
}

impl<T> From<Vec<T>> for Queryable<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for Queryable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
