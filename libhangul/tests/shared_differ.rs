//! The differ holds no state, so one instance serves many threads.

use std::sync::Arc;

use libhangul::{differ, joined_text, Classification};

#[test]
fn differ_is_shared_across_threads() {
    let differ = Arc::new(differ());
    let inputs = [
        ("머", "먹고"),
        ("안녕", "안녕하세요"),
        ("가나다", "가나다"),
        ("ㅎ", "하늘"),
    ];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&(typed, full)| {
                let differ = Arc::clone(&differ);
                scope.spawn(move || differ.diff_window(typed, full, true))
            })
            .collect();

        for (handle, &(typed, _)) in handles.into_iter().zip(inputs.iter()) {
            let segs = handle.join().unwrap();
            assert_eq!(joined_text(&segs), typed);
            assert!(segs.iter().all(|s| s.state != Classification::Unequal));
        }
    });
}
