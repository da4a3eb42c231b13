use sqlbulk::{blocking::Client, BulkOptions, Model};
use tests::{assert_ok, Op, RecordingConnection};

#[derive(Debug, Clone, PartialEq, Model)]
struct Event {
    #[column("Name")]
    name: String,
}

#[test]
fn blocking_client_runs_to_completion() {
    let conn = RecordingConnection::new();
    let log = conn.ops_log_handle();

    let mut client = assert_ok!(Client::new(conn));
    let events = vec![
        Event {
            name: "start".to_string(),
        },
        Event {
            name: "stop".to_string(),
        },
    ];

    assert_ok!(client.bulk_insert(&events, &BulkOptions::default()));

    // `Event` has no key, so rows are not selected back.
    let returned = assert_ok!(client.bulk_insert_and_select(events.clone(), &BulkOptions::default()));
    assert_eq!(returned, events);

    let ops = log.lock().unwrap();
    assert_eq!(ops.len(), 6);
    assert!(matches!(&ops[5], Op::ExecuteBatch(sql) if sql.starts_with("INSERT INTO [Events]")));
}
