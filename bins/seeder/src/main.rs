//! Database seeder for Saldo development and testing.
//!
//! Seeds the small-business chart of accounts and a handful of balanced
//! journal entries for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use saldo_core::catalog::AccountType;
use saldo_core::journal::{EntryKind, JournalEntryInput, JournalLineInput};
use saldo_db::entities::accounts;
use saldo_db::repositories::account::{AccountRepository, CreateAccountInput};
use saldo_db::repositories::journal::JournalRepository;

/// The seeded chart of accounts: (code, name, type).
const CHART: &[(&str, &str, AccountType)] = &[
    ("1100", "Kas", AccountType::Asset),
    ("1200", "Piutang Usaha", AccountType::Asset),
    ("1300", "Sewa Dibayar di Muka", AccountType::Asset),
    ("1600", "Peralatan Outbond", AccountType::Asset),
    ("1700", "Akumulasi Penyusutan", AccountType::Asset),
    ("2100", "Utang Usaha", AccountType::Liability),
    ("2600", "Utang Bank", AccountType::Liability),
    ("3100", "Modal Pemilik", AccountType::Equity),
    ("3200", "Prive Pemilik", AccountType::Prive),
    ("4100", "Pendapatan Jasa", AccountType::Revenue),
    ("5100", "Beban Sewa", AccountType::Expense),
    ("5200", "Beban Gaji", AccountType::Expense),
    ("5300", "Beban Penyusutan", AccountType::Expense),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = saldo_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding chart of accounts...");
    seed_accounts(&db).await;

    println!("Seeding sample journal entries...");
    seed_entries(&db).await;

    println!("Seeding complete!");
}

async fn seed_accounts(db: &DatabaseConnection) {
    let repo = AccountRepository::new(db.clone());

    for &(code, name, account_type) in CHART {
        let exists = accounts::Entity::find()
            .filter(accounts::Column::Code.eq(code))
            .one(db)
            .await
            .expect("Failed to query accounts");

        if exists.is_some() {
            println!("  {code} {name} already present, skipping");
            continue;
        }

        repo.create_account(CreateAccountInput {
            code: code.to_string(),
            name: name.to_string(),
            account_type,
            is_active: true,
        })
        .await
        .expect("Failed to seed account");
        println!("  {code} {name}");
    }
}

async fn seed_entries(db: &DatabaseConnection) {
    let repo = JournalRepository::new(db.clone());
    let year = 2024;

    let existing = repo
        .list_for_period(year, None)
        .await
        .expect("Failed to query entries");
    if !existing.is_empty() {
        println!("  Year {year} already has entries, skipping");
        return;
    }

    let account_id = |code: &str| {
        let db = db.clone();
        let code = code.to_string();
        async move {
            accounts::Entity::find()
                .filter(accounts::Column::Code.eq(code.as_str()))
                .one(&db)
                .await
                .expect("Failed to query account")
                .expect("Seeded account missing")
                .id
        }
    };

    let cash = account_id("1100").await;
    let capital = account_id("3100").await;
    let revenue = account_id("4100").await;
    let salaries = account_id("5200").await;

    let entries = vec![
        (
            "JV-001",
            NaiveDate::from_ymd_opt(year, 1, 2).unwrap(),
            "Setoran modal awal",
            vec![
                (cash, true, Decimal::new(5_000_000, 0)),
                (capital, false, Decimal::new(5_000_000, 0)),
            ],
        ),
        (
            "JV-002",
            NaiveDate::from_ymd_opt(year, 1, 10).unwrap(),
            "Pendapatan jasa tunai",
            vec![
                (cash, true, Decimal::new(1_000_000, 0)),
                (revenue, false, Decimal::new(1_000_000, 0)),
            ],
        ),
        (
            "JV-003",
            NaiveDate::from_ymd_opt(year, 1, 31).unwrap(),
            "Pembayaran gaji",
            vec![
                (salaries, true, Decimal::new(300_000, 0)),
                (cash, false, Decimal::new(300_000, 0)),
            ],
        ),
    ];

    for (number, date, description, lines) in entries {
        let input = JournalEntryInput {
            date,
            number: number.to_string(),
            description: description.to_string(),
            lines: lines
                .into_iter()
                .map(|(account_id, is_debit, amount)| JournalLineInput {
                    account_id: Some(account_id.into()),
                    is_debit,
                    amount,
                    tax: None,
                })
                .collect(),
            created_by: None,
        };

        repo.post(year, EntryKind::Ordinary, input)
            .await
            .expect("Failed to seed journal entry");
        println!("  {number} {description}");
    }
}
