use loglight::{JsonLogFormatter, Logger, MemorySink};
use serde::Serialize;
use std::collections::HashSet;
use std::thread;

#[derive(Serialize)]
struct Event {
    thread: usize,
    seq: usize,
    padding: String,
}

#[test]
fn test_concurrent_entries_never_interleave() {
    let memory = MemorySink::new();
    let logger = Logger::new(true, JsonLogFormatter::new(false)).with_output_sink(memory.clone());

    let num_threads = 8;
    let entries_per_thread = 200;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let logger = logger.for_origin(format!("worker{thread_id}"));
            thread::spawn(move || {
                for seq in 0..entries_per_thread {
                    let emission = logger
                        .info_defer(|| Event {
                            thread: thread_id,
                            seq,
                            // Long enough that a torn write would be visible
                            padding: "x".repeat(512),
                        })
                        .unwrap();
                    assert!(emission.is_written());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), num_threads * entries_per_thread);

    let mut seen = HashSet::new();
    for line in &lines {
        let parsed: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|_| panic!("Torn line: {line}"));
        assert_eq!(parsed["LogLevel"], "INFO");
        assert_eq!(parsed["Data"]["padding"].as_str().unwrap().len(), 512);

        let key = (
            parsed["Data"]["thread"].as_u64().unwrap(),
            parsed["Data"]["seq"].as_u64().unwrap(),
        );
        assert!(seen.insert(key), "Duplicate entry {key:?}");
    }
}

#[test]
fn test_logger_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Logger>();
    assert_send_sync::<MemorySink>();
}
