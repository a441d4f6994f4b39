use std::sync::{Arc, Mutex};
use std::thread;

use pipe_core::{pipe, Pipeline};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn pipeline_is_send_and_sync() {
    assert_send_sync::<Pipeline>();
}

#[test]
fn same_pipeline_from_many_threads() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let p = pipe![|x: u64| x * x,
                  |x: u64| x + 1,
                  move |x: u64| sink.lock().unwrap().push(x)];

    thread::scope(|s| {
        for i in 0..8_u64 {
            let p = &p;
            s.spawn(move || p.invoke((i,)).unwrap());
        }
    });

    let mut got = seen.lock().unwrap().clone();
    got.sort_unstable();
    assert_eq!(got, (0..8_u64).map(|i| i * i + 1).collect::<Vec<_>>());
}

#[test]
fn clones_run_independently() {
    let p = pipe![|x: i32| -> Result<i32, String> { if x % 2 == 0 { Ok(x) } else { Err(format!("{x} is odd")) } }];
    let handles: Vec<_> = (0..4).map(|i| {
                                    let p = p.clone();
                                    thread::spawn(move || p.invoke((i,)).map_err(|e| e.to_string()))
                                })
                                .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results,
               vec![Ok(()), Err("1st func failed: 1 is odd".to_string()), Ok(()), Err("1st func failed: 3 is odd".to_string())]);
}
