use pretty_assertions::assert_eq;
use sqlbulk::{
    stmt::{Type, Value},
    BulkInsert, BulkOptions, Model, SqlEnum, TableNameConvention,
};
use std::time::Duration;
use tests::{assert_err, assert_ok, init_tracing, Op, RecordingConnection};

#[derive(Debug, Clone, Copy, PartialEq, SqlEnum)]
#[repr(u8)]
enum Status {
    Active = 1,
    Suspended = 2,
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table = "dbo.Users"]
struct User {
    #[key]
    #[column("Id")]
    id: i64,

    #[column("Name")]
    name: String,

    #[column("Age")]
    age: Option<i32>,

    #[column("Status")]
    status: Status,

    #[computed]
    #[column("Created")]
    created: Option<chrono::NaiveDateTime>,

    #[skip]
    scratch: String,
}

#[derive(Debug, Model)]
struct Note {
    id: i32,
    body: String,
}

fn user(name: &str, age: Option<i32>, status: Status) -> User {
    User {
        id: 0,
        name: name.to_string(),
        age,
        status,
        created: None,
        scratch: "not stored".to_string(),
    }
}

#[tokio::test]
async fn stage_copy_merge_in_order() {
    init_tracing();

    let mut conn = RecordingConnection::new();
    let users = vec![
        user("ann", Some(30), Status::Active),
        user("bob", None, Status::Suspended),
    ];

    assert_ok!(conn.bulk_insert(&users, &BulkOptions::default()).await);

    let ops = conn.ops();
    assert_eq!(ops.len(), 3);

    assert_eq!(
        ops[0].sql(),
        Some("SELECT TOP 0 [Name], [Age], [Status] INTO #TempInsert_dboUsers FROM [dbo].[Users] target WITH(NOLOCK);")
    );

    let Op::BulkCopy { copy, table } = &ops[1] else {
        panic!("expected a bulk copy; op={:#?}", ops[1]);
    };
    assert_eq!(copy.destination, "#TempInsert_dboUsers");
    assert_eq!(table.len(), 2);

    assert!(matches!(&ops[2], Op::ExecuteBatch(_)));
    assert_eq!(
        ops[2].sql(),
        Some(
            "INSERT INTO [dbo].[Users] ([Name], [Age], [Status]) SELECT [Name], [Age], [Status] FROM #TempInsert_dboUsers;\n\
             DROP TABLE #TempInsert_dboUsers;"
        )
    );
}

#[tokio::test]
async fn columns_are_typed_from_fields() {
    let mut conn = RecordingConnection::new();
    let users = vec![
        user("ann", Some(30), Status::Active),
        user("bob", None, Status::Suspended),
    ];

    assert_ok!(conn.bulk_insert(&users, &BulkOptions::default()).await);

    let ops = conn.ops();
    let Op::BulkCopy { table, .. } = &ops[1] else {
        panic!("expected a bulk copy; op={:#?}", ops[1]);
    };

    let columns: Vec<_> = table
        .columns()
        .iter()
        .map(|column| (column.name.as_str(), column.ty, column.nullable))
        .collect();
    assert_eq!(
        columns,
        [
            ("Name", Type::String, false),
            ("Age", Type::I32, true),
            ("Status", Type::U8, false),
        ]
    );

    // Rows keep input order; enums are stored as their discriminant and
    // `None` becomes `NULL`.
    assert_eq!(
        table.rows()[0].to_vec(),
        [Value::from("ann"), Value::I32(30), Value::U8(1)]
    );
    assert_eq!(
        table.rows()[1].to_vec(),
        [Value::from("bob"), Value::Null, Value::U8(2)]
    );
}

#[tokio::test]
async fn options_reach_the_bulk_copy() {
    let mut conn = RecordingConnection::new();
    let options = BulkOptions::new()
        .batch_size(500)
        .timeout(Duration::from_secs(90));

    assert_ok!(
        conn.bulk_insert(&[user("ann", None, Status::Active)], &options)
            .await
    );

    let ops = conn.ops();
    let Op::BulkCopy { copy, .. } = &ops[1] else {
        panic!("expected a bulk copy; op={:#?}", ops[1]);
    };
    assert_eq!(copy.batch_size, 500);
    assert_eq!(copy.timeout, Some(Duration::from_secs(90)));
    assert!(!copy.keep_identity);
}

#[tokio::test]
async fn identity_insert_writes_keys() {
    let mut conn = RecordingConnection::new();
    let mut ann = user("ann", None, Status::Active);
    ann.id = 42;

    let options = BulkOptions::new().identity_insert(true);
    assert_ok!(conn.bulk_insert(&[ann], &options).await);

    let ops = conn.ops();
    assert_eq!(
        ops[0].sql(),
        Some(
            "SELECT TOP 0 [Id], [Name], [Age], [Status] INTO #TempInsert_dboUsers FROM [dbo].[Users] target WITH(NOLOCK) \
             UNION ALL SELECT TOP 0 [Id], [Name], [Age], [Status] FROM [dbo].[Users] WITH(NOLOCK);"
        )
    );

    let Op::BulkCopy { copy, table } = &ops[1] else {
        panic!("expected a bulk copy; op={:#?}", ops[1]);
    };
    assert!(copy.keep_identity);
    assert_eq!(table.columns()[0].name, "Id");
    assert_eq!(table.rows()[0][0], Value::I64(42));

    assert_eq!(
        ops[2].sql(),
        Some(
            "SET IDENTITY_INSERT [dbo].[Users] ON;\n\
             INSERT INTO [dbo].[Users] ([Id], [Name], [Age], [Status]) SELECT [Id], [Name], [Age], [Status] FROM #TempInsert_dboUsers;\n\
             SET IDENTITY_INSERT [dbo].[Users] OFF;\n\
             DROP TABLE #TempInsert_dboUsers;"
        )
    );
}

#[tokio::test]
async fn table_name_convention() {
    let mut conn = RecordingConnection::new();
    let notes = [Note {
        id: 1,
        body: "hello".to_string(),
    }];

    assert_ok!(conn.bulk_insert(&notes, &BulkOptions::default()).await);
    assert_eq!(
        conn.ops()[0].sql(),
        Some("SELECT TOP 0 [body] INTO #TempInsert_Notes FROM [Notes] target WITH(NOLOCK);")
    );

    let mut conn = RecordingConnection::new();
    let options = BulkOptions::new().table_names(TableNameConvention::new("app.tbl", ""));

    assert_ok!(conn.bulk_insert(&notes, &options).await);
    assert_eq!(
        conn.ops()[0].sql(),
        Some("SELECT TOP 0 [body] INTO #TempInsert_apptblNote FROM [app].[tblNote] target WITH(NOLOCK);")
    );
}

#[tokio::test]
async fn empty_input_sends_nothing() {
    let mut conn = RecordingConnection::new();
    let users: Vec<User> = vec![];

    assert_ok!(conn.bulk_insert(&users, &BulkOptions::default()).await);
    assert!(conn.ops().is_empty());
}

#[tokio::test]
async fn driver_errors_stop_the_insert() {
    let mut conn = RecordingConnection::new().fail_at(1, "Cannot insert the value NULL");
    let users = [user("ann", None, Status::Active)];

    let err = assert_err!(conn.bulk_insert(&users, &BulkOptions::default()).await);
    assert!(err.is_driver());
    assert_eq!(err.to_string(), "Cannot insert the value NULL");

    // The merge never runs and the staging table is left for the session to
    // clean up.
    let ops = conn.ops();
    assert_eq!(ops.len(), 2);
    assert!(ops[1].is_bulk_copy());
}

#[tokio::test]
async fn staging_failure_skips_the_copy() {
    let mut conn = RecordingConnection::new().fail_at(0, "Invalid object name 'dbo.Users'.");
    let users = [user("ann", None, Status::Active)];

    let err = assert_err!(conn.bulk_insert(&users, &BulkOptions::default()).await);
    assert_eq!(err.to_string(), "Invalid object name 'dbo.Users'.");
    assert_eq!(conn.ops().len(), 1);
}
