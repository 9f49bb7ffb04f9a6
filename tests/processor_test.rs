use data_processor::{check, transform, validate, DataProcessor, Mode, ProcessError, Processor};

#[test]
fn test_transform_reference_table() {
    let cases = [
        (0, "double", 0),
        (-5, "triple", 0),
        (12, "double", 29),
        (4, "double", 8),
        (7, "double", 13),
        (150, "double", 200),
        (10, "triple", 30),
        (60, "triple", 0),
        (5, "unknown", 0),
    ];

    for (input, mode, expected) in cases {
        assert_eq!(
            transform(input, mode),
            expected,
            "transform({}, {:?})",
            input,
            mode
        );
    }
}

#[test]
fn test_transform_matches_explicit_surface_when_applied() {
    let processor = DataProcessor::new();
    for input in -20..=120 {
        for mode in ["double", "triple", "other"] {
            let compat = processor.transform(input, mode);
            match processor.try_transform(input, &Mode::from(mode)) {
                Ok(value) => assert_eq!(compat, value),
                Err(_) => assert_eq!(compat, 0),
            }
        }
    }
}

#[test]
fn test_double_results_are_positive_for_positive_inputs() {
    for input in 1..=1_000 {
        assert!(transform(input, "double") > 0, "input {}", input);
    }
}

#[test]
fn test_validate_reference_cases() {
    assert!(!validate(&[]));
    assert!(!validate(&[1, -2, 3]));
    assert!(!validate(&vec![1; 1000]));
    assert!(validate(&[1, 2, 3]));
}

#[test]
fn test_every_positive_batch_below_limit_validates() {
    let mut values = Vec::with_capacity(999);
    for len in 1..=999 {
        values.push((len as i32 * 7919) % 10_007 + 1);
        assert!(validate(&values), "length {}", len);
    }
}

#[test]
fn test_validate_does_not_touch_store() {
    let mut processor = DataProcessor::new();
    processor.append(3);
    assert!(processor.validate(&[1, 2]));
    assert!(!processor.validate(&[]));
    assert_eq!(processor.values(), &[3]);
}

#[test]
fn test_check_and_validate_agree() {
    let batches: Vec<Vec<i32>> = vec![
        vec![],
        vec![1],
        vec![0],
        vec![i32::MIN],
        vec![5; 999],
        vec![5; 1000],
        vec![3, 2, 1, -1],
    ];
    for batch in &batches {
        assert_eq!(check(batch).is_ok(), validate(batch), "{:?}", batch);
    }
}

#[test]
fn test_append_101_keeps_first_100() {
    let mut processor = DataProcessor::new();
    let inputs: Vec<i32> = (0..101).map(|i| 9_999 - i * 3).collect();
    for &value in &inputs {
        processor.append(value);
    }

    assert_eq!(processor.len(), 100);
    assert_eq!(processor.values(), &inputs[..100]);
}

#[test]
fn test_rejected_appends_leave_store_unchanged() {
    let mut processor = DataProcessor::new();
    processor.append(10);
    processor.append(20);
    let before = processor.clone();

    processor.append(0);
    processor.append(-1);
    processor.append(10_000);

    assert_eq!(processor, before);
}

#[test]
fn test_rejected_appends_do_not_consume_capacity() {
    let mut processor = DataProcessor::new();
    for value in -50..=150 {
        processor.append(value);
    }
    assert_eq!(processor.len(), 100);
    assert_eq!(processor.values().first(), Some(&1));
    assert_eq!(processor.values().last(), Some(&100));
    assert!(matches!(
        processor.try_append(1),
        Err(ProcessError::CapacityExceeded { .. })
    ));
}

#[test]
fn test_shared_store_behind_mutex() {
    use std::sync::{Arc, Mutex};

    let shared = Arc::new(Mutex::new(DataProcessor::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                for i in 1..=40 {
                    shared.lock().unwrap().append(t * 1_000 + i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let processor = shared.lock().unwrap();
    assert_eq!(processor.len(), 100);
    assert!(processor.values().iter().all(|v| *v > 0 && *v < 10_000));
}
