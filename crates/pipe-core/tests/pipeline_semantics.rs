//! Propiedades observables de construcción + invocación.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use pipe_core::{args, pipe, FailureKind, InvocationFault, Pipeline};

fn power_plus_one(store: Arc<AtomicI64>) -> Pipeline {
    pipe![|x: i64| -> Result<i64, &'static str> {
              if x < 0 {
                  return Err("x should not be negative");
              }
              Ok(x * x)
          },
          |x: i64| x + 1,
          move |x: i64| store.store(x, Ordering::SeqCst)]
}

#[test]
fn empty_pipeline_always_succeeds() {
    let p = pipe![];
    assert!(p.is_empty());
    assert!(p.invoke(()).is_ok());
    assert!(p.invoke(args![1, "x", vec![0u8; 3]]).is_ok());
}

#[test]
fn success_stores_square_plus_one() {
    let store = Arc::new(AtomicI64::new(0));
    let p = power_plus_one(store.clone());
    assert!(p.invoke((5_i64,)).is_ok());
    assert_eq!(store.load(Ordering::SeqCst), 26);
}

#[test]
fn negative_input_fails_at_first_step_and_leaves_sink_untouched() {
    let store = Arc::new(AtomicI64::new(-1));
    let p = power_plus_one(store.clone());
    let err = p.invoke((-3_i64,)).expect_err("negative input must fail");
    assert_eq!(err.to_string(), "1st func failed: x should not be negative");
    assert_eq!(err.position(), 1);
    assert_eq!(err.kind(), FailureKind::Domain);
    assert_eq!(store.load(Ordering::SeqCst), -1);
}

/// Pipeline de `n` pasos identidad donde el paso `k` falla.
fn failing_at(n: usize, k: usize) -> Pipeline {
    let mut builder = Pipeline::builder();
    for i in 1..=n {
        builder = builder.then(move |x: u32| -> Result<u32, String> {
                             if i == k { Err(format!("boom at {i}")) } else { Ok(x) }
                         });
    }
    builder.build()
}

#[test]
fn error_message_uses_english_ordinals() {
    for (k, expected) in [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th"), (12, "12th"),
                          (13, "13th"), (21, "21st"), (22, "22nd"), (23, "23rd")]
    {
        let err = failing_at(25, k).invoke((0_u32,)).unwrap_err();
        assert_eq!(err.to_string(), format!("{expected} func failed: boom at {k}"));
        assert_eq!(err.position(), k);
    }
}

#[test]
fn earlier_steps_keep_their_side_effects() {
    let ran = Arc::new(AtomicUsize::new(0));
    let (a, b) = (ran.clone(), ran.clone());
    let p = pipe![move |x: i32| {
                      a.fetch_add(1, Ordering::SeqCst);
                      x
                  },
                  |_: i32| -> Result<i32, std::io::Error> { Err(std::io::Error::other("disk")) },
                  move |_: i32| {
                      b.fetch_add(100, Ordering::SeqCst);
                  }];
    let err = p.invoke((1,)).unwrap_err();
    assert_eq!(err.to_string(), "2nd func failed: disk");
    assert!(err.domain_error().and_then(|e| e.downcast_ref::<std::io::Error>()).is_some());
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

#[test]
fn invoking_twice_gives_identical_outcomes() {
    let p = pipe![|x: i64| x * 3, |x: i64| -> Result<(), String> { if x > 10 { Err(format!("{x} too big")) } else { Ok(()) } }];
    for input in [2_i64, 4] {
        let first = p.invoke((input,)).map_err(|e| e.to_string());
        let second = p.invoke((input,)).map_err(|e| e.to_string());
        assert_eq!(first, second);
    }
    assert_eq!(p.invoke((4_i64,)).unwrap_err().to_string(), "2nd func failed: 12 too big");
}

#[test]
fn wrong_arity_is_reported_not_raised() {
    let p = pipe![|a: i32, b: i32| a + b, |_: i32| {}];
    let err = p.invoke((1,)).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Fault);
    assert_eq!(err.fault(), Some(&InvocationFault::ArityMismatch { expected: 2, got: 1 }));
    assert_eq!(err.to_string(), "1st func aborted: call with 1 arguments, expected 2");
}

#[test]
fn wrong_type_is_reported_not_raised() {
    let p = pipe![|x: i64| x + 1];
    let err = p.invoke(("five",)).unwrap_err();
    assert_eq!(err.to_string(), "1st func aborted: call using &str as type i64 for argument 1");
}

#[test]
fn mismatch_between_steps_is_found_at_invocation() {
    let p = pipe![|x: i32| x.to_string(), |x: i32| x];
    let err = p.invoke((9,)).unwrap_err();
    assert_eq!(err.position(), 2);
    assert!(matches!(err.fault(), Some(InvocationFault::TypeMismatch { found: "alloc::string::String", .. })));
}

#[test]
fn panics_inside_steps_are_contained() {
    let p = pipe![|v: Vec<i32>| v[10]];
    let err = p.invoke((vec![1, 2, 3],)).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Fault);
    assert!(err.to_string().starts_with("1st func aborted: panicked: index out of bounds"));
}

#[test]
fn multi_value_returns_are_spread() {
    let p = pipe![|s: String| (s.len(), s.to_uppercase()),
                  |n: usize, up: String| -> Result<(), String> {
                      if n == 3 && up == "ABC" { Ok(()) } else { Err(format!("{n} {up}")) }
                  }];
    assert!(p.invoke((String::from("abc"),)).is_ok());
}

#[test]
fn std_smart_pointers_and_collections_are_carried() {
    let p = pipe![|x: i32| Arc::new(x),
                  |a: Arc<i32>| HashMap::from([(PathBuf::from("x"), *a)]),
                  |m: HashMap<PathBuf, i32>| -> Result<(), String> {
                      match m.get(&PathBuf::from("x")) {
                          Some(7) => Ok(()),
                          other => Err(format!("{other:?}")),
                      }
                  }];
    assert!(p.invoke((7,)).is_ok());
    assert_eq!(p.invoke((8,)).unwrap_err().to_string(), "3rd func failed: Some(8)");
}

/// Tipo ajeno sin `StepOutput`: viaja dentro de una tupla de un elemento.
struct Opaque(u16);

#[test]
fn one_tuple_carries_any_type() {
    let p = pipe![|x: u16| (Opaque(x),), |o: Opaque| -> Result<(), String> { if o.0 == 3 { Ok(()) } else { Err(o.0.to_string()) } }];
    assert!(p.invoke((3_u16,)).is_ok());
}

struct Fuse;

impl Drop for Fuse {
    fn drop(&mut self) {
        panic!("fuse blew");
    }
}

pipe_core::carry!(Fuse);

#[test]
fn panicking_drop_of_leftover_values_stays_inside_invoke() {
    let p = pipe![|x: i32| -> Result<Fuse, String> { if x > 0 { Ok(Fuse) } else { Err("no fuse".into()) } }];
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| p.invoke((1,))));
    let err = outcome.expect("invoke must return normally").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Fault);
    assert_eq!(err.to_string(), "1st func aborted: panicked: fuse blew");
    assert_eq!(p.invoke((0,)).unwrap_err().to_string(), "1st func failed: no fuse");
}
