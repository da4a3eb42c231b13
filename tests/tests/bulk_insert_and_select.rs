use pretty_assertions::assert_eq;
use sqlbulk::{
    stmt::{Type, Value, ValueRecord},
    BulkInsert, BulkOptions, Model, SqlEnum,
};
use tests::{assert_err, assert_ok, init_tracing, Op, RecordingConnection};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
enum Plan {
    Free,
    Pro,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "dbo.Accounts"]
struct Account {
    #[key]
    #[column("Id")]
    id: i64,

    #[column("Email")]
    email: String,

    #[column("Plan")]
    plan: Plan,

    #[computed]
    #[column("Created")]
    created: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "AuditLog"]
struct AuditEntry {
    #[column("Message")]
    message: String,
}

#[derive(Debug, Clone, PartialEq, Model)]
struct Country {
    #[key]
    code: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "GuidIdentity"]
struct GuidIdentity {
    #[key]
    #[column("Id")]
    id: Uuid,

    #[column("Int_Col")]
    int_col: i32,

    #[column("Name")]
    name: Option<String>,
}

fn account(email: &str, plan: Plan) -> Account {
    Account {
        id: 0,
        email: email.to_string(),
        plan,
        created: None,
    }
}

fn row(values: Vec<Value>) -> ValueRecord {
    ValueRecord::from_vec(values)
}

#[tokio::test]
async fn inserted_rows_are_loaded() {
    init_tracing();

    let created = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let mut conn = RecordingConnection::new().with_rows(vec![
        row(vec![
            Value::I64(7),
            Value::from("a@example.com"),
            Value::I32(0),
            Value::DateTime(created),
        ]),
        row(vec![
            Value::I64(8),
            Value::from("b@example.com"),
            Value::I32(1),
            Value::DateTime(created),
        ]),
    ]);

    let accounts = vec![
        account("a@example.com", Plan::Free),
        account("b@example.com", Plan::Pro),
    ];

    let inserted = assert_ok!(
        conn.bulk_insert_and_select(accounts, &BulkOptions::default())
            .await
    );

    assert_eq!(
        inserted,
        [
            Account {
                id: 7,
                email: "a@example.com".to_string(),
                plan: Plan::Free,
                created: Some(created),
            },
            Account {
                id: 8,
                email: "b@example.com".to_string(),
                plan: Plan::Pro,
                created: Some(created),
            },
        ]
    );

    let ops = conn.ops();
    assert_eq!(ops.len(), 3);
    assert!(ops[1].is_bulk_copy());

    let Op::Query { sql, ty } = &ops[2] else {
        panic!("expected a query; op={:#?}", ops[2]);
    };
    assert_eq!(ty, &[Type::I64, Type::String, Type::I32, Type::DateTime]);
    assert_eq!(
        sql,
        "DECLARE @TempInserted_dboAccounts TABLE ([Id] bigint);\n\
         INSERT INTO [dbo].[Accounts] ([Email], [Plan]) OUTPUT inserted.[Id] INTO @TempInserted_dboAccounts ([Id]) \
         SELECT [Email], [Plan] FROM #TempInsert_dboAccounts;\n\
         SELECT target.[Id] AS [id], target.[Email] AS [email], target.[Plan] AS [plan], target.[Created] AS [created] \
         FROM [dbo].[Accounts] target INNER JOIN @TempInserted_dboAccounts ins ON target.[Id] = ins.[Id];\n\
         DROP TABLE #TempInsert_dboAccounts;"
    );
}

#[tokio::test]
async fn keyless_models_fall_back_to_insert() {
    let mut conn = RecordingConnection::new();
    let entries = vec![
        AuditEntry {
            message: "first".to_string(),
        },
        AuditEntry {
            message: "second".to_string(),
        },
    ];

    let returned = assert_ok!(
        conn.bulk_insert_and_select(entries.clone(), &BulkOptions::default())
            .await
    );
    assert_eq!(returned, entries);

    // No rows are selected back; the merge is a plain insert.
    let ops = conn.ops();
    assert_eq!(ops.len(), 3);
    assert!(matches!(&ops[2], Op::ExecuteBatch(_)));
    assert_eq!(
        ops[2].sql(),
        Some(
            "INSERT INTO [AuditLog] ([Message]) SELECT [Message] FROM #TempInsert_AuditLog;\n\
             DROP TABLE #TempInsert_AuditLog;"
        )
    );
}

#[tokio::test]
async fn keyless_fallback_ignores_identity_insert() {
    let mut conn = RecordingConnection::new();
    let entries = vec![AuditEntry {
        message: "rotated keys".to_string(),
    }];
    let options = BulkOptions::new().identity_insert(true);

    let returned = assert_ok!(conn.bulk_insert_and_select(entries.clone(), &options).await);
    assert_eq!(returned, entries);

    let ops = conn.ops();
    assert_eq!(ops.len(), 3);
    assert_eq!(
        ops[0].sql(),
        Some("SELECT TOP 0 [Message] INTO #TempInsert_AuditLog FROM [AuditLog] target WITH(NOLOCK);")
    );

    let Op::BulkCopy { copy, .. } = &ops[1] else {
        panic!("expected a bulk copy, got {:?}", ops[1]);
    };
    assert!(!copy.keep_identity);

    assert_eq!(
        ops[2].sql(),
        Some(
            "INSERT INTO [AuditLog] ([Message]) SELECT [Message] FROM #TempInsert_AuditLog;\n\
             DROP TABLE #TempInsert_AuditLog;"
        )
    );
}

#[tokio::test]
async fn unsupported_key_type_fails_before_io() {
    let mut conn = RecordingConnection::new();
    let countries = vec![Country {
        code: "NZ".to_string(),
        name: "New Zealand".to_string(),
    }];

    let err = assert_err!(
        conn.bulk_insert_and_select(countries.clone(), &BulkOptions::default())
            .await
    );
    assert!(err.is_unsupported_key_type());
    assert!(err.is_configuration());
    assert!(conn.ops().is_empty());

    // A plain insert does not capture keys, so any key type works.
    assert_ok!(conn.bulk_insert(&countries, &BulkOptions::default()).await);
    assert_eq!(conn.ops().len(), 3);
}

#[tokio::test]
async fn guid_keys_with_identity_insert() {
    let ids = [Uuid::new_v4(), Uuid::new_v4()];

    let mut conn = RecordingConnection::new().with_rows(
        ids.iter()
            .map(|id| row(vec![Value::Uuid(*id), Value::I32(5), Value::Null]))
            .collect(),
    );

    let records: Vec<_> = ids
        .iter()
        .map(|id| GuidIdentity {
            id: *id,
            int_col: 5,
            name: None,
        })
        .collect();

    let options = BulkOptions::new().identity_insert(true);
    let inserted = assert_ok!(
        conn.bulk_insert_and_select(records.clone(), &options)
            .await
    );
    assert_eq!(inserted, records);

    let ops = conn.ops();

    // GUID keys are not identity columns, so the staging table is a plain
    // clone and `IDENTITY_INSERT` is never toggled.
    assert_eq!(
        ops[0].sql(),
        Some("SELECT TOP 0 [Id], [Int_Col], [Name] INTO #TempInsert_GuidIdentity FROM [GuidIdentity] target WITH(NOLOCK);")
    );

    let sql = ops[2].sql().unwrap();
    assert!(sql.starts_with("DECLARE @TempInserted_GuidIdentity TABLE ([Id] uniqueidentifier);\n"));
    assert!(!sql.contains("IDENTITY_INSERT"));
}

#[tokio::test]
async fn malformed_rows_are_rejected() {
    let mut conn = RecordingConnection::new()
        .with_rows(vec![row(vec![Value::I64(1), Value::from("a@example.com")])]);

    let err = assert_err!(
        conn.bulk_insert_and_select(vec![account("a@example.com", Plan::Free)], &BulkOptions::default())
            .await
    );
    assert!(err.is_invalid_result());
    assert_eq!(
        err.to_string(),
        "invalid result: expected 4 columns for Account, got 2"
    );
}

#[tokio::test]
async fn unknown_enum_discriminants_are_rejected() {
    let mut conn = RecordingConnection::new().with_rows(vec![row(vec![
        Value::I64(1),
        Value::from("a@example.com"),
        Value::I32(9),
        Value::Null,
    ])]);

    let err = assert_err!(
        conn.bulk_insert_and_select(vec![account("a@example.com", Plan::Free)], &BulkOptions::default())
            .await
    );
    assert_eq!(err.to_string(), "no variant of Plan has discriminant 9");
}
