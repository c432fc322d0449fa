//! Sticky first-fault behaviour across whole chains.


use std::fmt;

use linq::{OpError, PipelineConfig, Queryable, WindowPolicy};
use test_data_gen::generate_ints;

#[derive(Debug)]
struct RejectError {
    value: i64,
}

impl fmt::Display for RejectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected {}", self.value)
    }
}

impl std::error::Error for RejectError {}

#[test]
fn test_callback_fault_resurfaces_unchanged() {
    let mut original: Option<OpError> = None;
    let out = Queryable::new(vec![1i64, 2, 3, 4])
        .select(|v| {
            if *v == 3 {
                let fault = OpError::callback(RejectError { value: *v });
                original = Some(fault.clone());
                Err(fault)
            } else {
                Ok(*v)
            }
        })
        .filter(|_| panic!("filter must not run after a fault"))
        .order()
        .distinct()
        .take(1)
        .reverse()
        .results();

    let fault = out.expect_err("pipeline must be faulted");
    let original = original.expect("projector saw 3");
    assert!(fault.is_same_fault(&original));
    assert_eq!(fault.downcast_ref::<RejectError>().map(|e| e.value), Some(3));
    assert_eq!(fault.to_string(), "rejected 3");
}

#[test]
fn test_first_fault_wins() {
    let out = Queryable::new(vec![1i64, 2])
        .filter(|_| Err(OpError::msg("first")))
        .select(|_| -> Result<i64, OpError> { Err(OpError::msg("second")) })
        .results();
    assert!(matches!(out, Err(OpError::Message(m)) if m == "first"));
}

#[test]
fn test_fault_from_terminal_predicate() {
    let out = Queryable::new(generate_ints(10, 5))
        .count_by(|v| Err(OpError::callback(RejectError { value: *v })));
    assert!(out.unwrap_err().downcast_ref::<RejectError>().is_some());
}

#[test]
fn test_strict_window_policy_faults_uniformly() {
    let cfg = PipelineConfig {
        window_policy: WindowPolicy::Strict,
        trace_operators: false,
    };
    let out = Queryable::with_config(Some(vec![1, 2, 3]), cfg)
        .skip(1)
        .take(-2)
        .skip(-9)
        .results();
    assert!(matches!(
        out,
        Err(OpError::NegativeParam { op: "take", value: -2 })
    ));

    let lenient = Queryable::new(vec![1, 2, 3]).configure(PipelineConfig::default());
    assert_eq!(lenient.take(-2).results().unwrap(), Vec::<i32>::new());
}

#[test]
fn test_config_from_json_drives_pipeline() {
    let cfg = PipelineConfig::from_json(r#"{"window_policy": "strict", "trace_operators": false}"#)
        .expect("valid config");
    let out = Queryable::with_config(Some(vec!["a"]), cfg).take(-1).results();
    assert!(matches!(out, Err(OpError::NegativeParam { .. })));
}
