use sqlstep_core::prelude::*;
use sqlstep_core::{validate_all, SqlValidator, SqliteValidator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let validator = SqliteValidator::new([
        "CREATE TABLE users (id INTEGER, name TEXT, age INTEGER)",
        "CREATE TABLE banned_users (id INTEGER)",
    ]);

    let statements = vec![
        select("users", Multiple::of("id", ["name"]))
            .where_(("age", Relation::Gte, 18))
            .sort(SortType::OrderBy, SortKey::desc("age"), [])
            .limit(10)?
            .build()?,
        insert("users").values(Multiple::of(Value::from(1), [Value::from("Ann"), Value::from(30)])).build()?,
        update("users").set("age", 31).where_(("id", Relation::Eq, 1)).build()?,
        delete("users").where_(("id", select("banned_users", "id"))).build()?,
        // Unknown table, rejected by the engine
        delete("visitors").build()?,
    ];

    for sql in &statements {
        match validator.validate(sql).await {
            Ok(()) => println!("OK       {}", sql),
            Err(err) => println!("REJECTED {} ({})", sql, err),
        }
    }

    let failures = validate_all(&[validator], &statements[0]).await;
    println!("{} engine(s) rejected the first statement", failures.len());

    Ok(())
}
