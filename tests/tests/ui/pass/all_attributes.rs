use sqlbulk::{Model, SqlEnum};

#[derive(Clone, Copy, SqlEnum)]
#[repr(u8)]
enum Color {
    Red,
    Green,
}

#[derive(Model)]
#[table = "dbo.Widgets"]
struct Widget {
    #[key]
    #[column("WidgetId")]
    id: uuid::Uuid,

    #[column(name = "DisplayName")]
    name: Option<String>,

    color: Color,

    weight: f64,

    stock: u32,

    #[computed]
    created: chrono::NaiveDateTime,

    #[skip]
    #[allow(dead_code)]
    cache: Vec<String>,
}

fn main() {
    let _ = <Widget as sqlbulk::Model>::schema();
}
