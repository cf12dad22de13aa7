use chrono::NaiveDate;
use sqlstep_core::prelude::*;

fn main() -> Result<()> {
    // RUST_LOG=trace shows every rendered statement
    tracing_subscriber::fmt::init();

    // SELECT with conditions, sorting and a limit
    let select_query = select("users", Multiple::of("id", ["name", "email"]))
        .where_(("age", Relation::Gt, 18))
        .and(("status", "active")) // IN ('active')
        .or(("city", "LIKE", "%York%"))
        .sort(SortType::OrderBy, SortKey::desc("age"), [SortKey::of("name")])
        .limit_range(5, 15)?;

    println!("SELECT SQL: {}", select_query.build()?);

    // Aggregates nest in call order
    let count_query = select(
        "orders",
        Aggregate::of(AggregateType::Count, Single::distinct("customer_id")),
    )
    .sort(SortType::GroupBy, "region", []);

    println!("COUNT SQL: {}", count_query.build()?);

    // INSERT, from literals or from a sub-select
    let signup = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
    let insert_query = insert("users").values(Multiple::of(
        Value::from("John Doe"),
        [Value::from(30), Value::from(signup)],
    ));
    println!("INSERT SQL: {}", insert_query.build()?);

    let archive_query = insert("users_archive").values(select("users", Single::all()));
    println!("ARCHIVE SQL: {}", archive_query.build()?);

    // UPDATE with several assignments
    let update_query = update("users")
        .set("email", "newemail@example.com")
        .and("last_login", signup)
        .where_(("id", Relation::Eq, 123));

    println!("UPDATE SQL: {}", update_query.build()?);

    // DELETE with a sub-select membership test
    let delete_query = delete("sessions")
        .where_(("user_id", select("banned_users", "id")))
        .or(("expires", Relation::Lt, signup));

    println!("DELETE SQL: {}", delete_query.build()?);

    // Invalid limits are rejected where they are introduced
    if let Err(err) = select("users", Single::all()).limit_range(10, 5) {
        println!("Rejected: {}", err);
    }

    Ok(())
}
