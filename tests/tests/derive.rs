use pretty_assertions::assert_eq;
use sqlbulk::{
    schema::{self, Field},
    stmt::{Primitive, Type, Value, ValueRecord},
    Model, SqlEnum,
};

#[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
#[repr(i16)]
enum Priority {
    Low = 10,
    High = 20,
}

#[derive(Debug, PartialEq, Model)]
#[table = "ops.Tickets"]
struct Ticket {
    #[key]
    #[column("TicketId")]
    id: i32,

    title: String,

    priority: Option<Priority>,

    #[computed]
    #[column("UpdatedAt")]
    updated_at: chrono::DateTime<chrono::Utc>,

    #[skip]
    dirty: bool,
}

#[test]
fn schema_lists_mapped_fields() {
    let schema = Ticket::schema();

    assert_eq!(schema.name, "Ticket");
    assert_eq!(schema.table_name.as_deref(), Some("ops.Tickets"));
    assert_eq!(
        schema.fields,
        [
            Field::new("id", Type::I32).with_column("TicketId").key(),
            Field::new("title", Type::String),
            Field::new("priority", Type::I16).nullable(),
            Field::new("updated_at", Type::DateTimeUtc)
                .with_column("UpdatedAt")
                .computed(),
        ]
    );
}

#[test]
fn metadata_is_resolved_once() {
    let meta = schema::resolve::<Ticket>();

    assert_eq!(meta.key_fields().count(), 1);
    assert_eq!(meta.column_name("updated_at"), Some("UpdatedAt"));
    assert!(std::sync::Arc::ptr_eq(&meta, &schema::resolve::<Ticket>()));
}

#[test]
fn record_and_load() {
    let updated_at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let ticket = Ticket {
        id: 3,
        title: "printer on fire".to_string(),
        priority: Some(Priority::High),
        updated_at,
        dirty: true,
    };

    let record = ticket.record().unwrap();
    assert_eq!(
        record.to_vec(),
        [
            Value::I32(3),
            Value::from("printer on fire"),
            Value::I16(20),
            Value::DateTimeUtc(updated_at),
        ]
    );

    let loaded = Ticket::load(record).unwrap();
    assert_eq!(
        loaded,
        Ticket {
            dirty: false,
            ..ticket
        }
    );
}

#[test]
fn enums_use_their_repr() {
    assert_eq!(<Priority as Primitive>::TYPE, Type::I16);
    assert_eq!(Priority::Low.to_value().unwrap(), Value::I16(10));
    assert_eq!(Priority::load(Value::I16(20)).unwrap(), Priority::High);
    assert_eq!(
        <Option<Priority>>::load(Value::Null).unwrap(),
        None
    );

    // Narrower integers read back from the database are accepted.
    assert_eq!(Priority::load(Value::U8(10)).unwrap(), Priority::Low);
}

#[test]
fn load_checks_the_column_count() {
    let err = Ticket::load(ValueRecord::from_vec(vec![Value::I32(1)])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid result: expected 4 columns for Ticket, got 1"
    );
}

#[test]
fn derive_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
