use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};

use crate::types::{Bucket, Expenses, FinancialSummary, Income, Transaction};

/// A registered account. Passwords are stored as salted SHA-256 digests;
/// this is a demo backend, not a real credential store.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_salt: String,
    pub password_digest: String,
}

impl UserRecord {
    pub fn verify_password(&self, password: &str) -> bool {
        password_digest(&self.password_salt, password) == self.password_digest
    }
}

pub fn password_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// All backend state: collections plus their id counters. Lives behind one
/// mutex; every handler takes the lock for the duration of its work.
pub struct Backend {
    pub users: Vec<UserRecord>,
    pub buckets: Vec<Bucket>,
    pub transactions: Vec<Transaction>,
    pub summaries: Vec<FinancialSummary>,
    pub next_user_id: i64,
    pub next_bucket_id: i64,
    pub next_transaction_id: i64,
    pub next_summary_id: i64,
}

impl Backend {
    pub fn seeded() -> Self {
        let now = Utc::now();
        let salt = "finbin-seed";
        let users = vec![UserRecord {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password_salt: salt.to_string(),
            password_digest: password_digest(salt, "password"),
        }];

        let buckets = vec![
            Bucket {
                id: 1,
                user_id: 1,
                name: "Emergency Fund".to_string(),
                target_amount: 10000.0,
                current_saved_amount: 2000.0,
                priority_score: 0.9,
                deadline: now + Duration::days(180),
                status: "In Progress".to_string(),
            },
            Bucket {
                id: 2,
                user_id: 1,
                name: "Vacation".to_string(),
                target_amount: 3000.0,
                current_saved_amount: 1500.0,
                priority_score: 0.6,
                deadline: now + Duration::days(90),
                status: "In Progress".to_string(),
            },
            Bucket {
                id: 3,
                user_id: 1,
                name: "New Car".to_string(),
                target_amount: 20000.0,
                current_saved_amount: 5000.0,
                priority_score: 0.7,
                deadline: now + Duration::days(365),
                status: "In Progress".to_string(),
            },
        ];

        let transactions = vec![
            Transaction {
                id: 1,
                user_id: 1,
                amount: -50.0,
                description: "Grocery Shopping".to_string(),
                category: Some("Groceries".to_string()),
                transaction_date: now - Duration::days(1),
                reference: Some("REF123".to_string()),
                notes: Some("Weekly shopping".to_string()),
                is_reconciled: true,
            },
            Transaction {
                id: 2,
                user_id: 1,
                amount: -120.0,
                description: "Electric Bill".to_string(),
                category: Some("Utilities".to_string()),
                transaction_date: now - Duration::days(5),
                reference: Some("UTIL456".to_string()),
                notes: Some("Monthly payment".to_string()),
                is_reconciled: true,
            },
            Transaction {
                id: 3,
                user_id: 1,
                amount: 2500.0,
                description: "Salary Deposit".to_string(),
                category: Some("Income".to_string()),
                transaction_date: now - Duration::days(15),
                reference: Some("SAL789".to_string()),
                notes: Some("Monthly salary".to_string()),
                is_reconciled: true,
            },
        ];

        let summaries = vec![FinancialSummary {
            id: 1,
            savings_balance: 5000.0,
            investment_balance: 15000.0,
            debt_balance: 8000.0,
            user_id: 1,
            income: Income {
                id: 1,
                salary: 5000.0,
                investments: 200.0,
                business_income: 0.0,
                financial_summary_id: 1,
            },
            expenses: Expenses {
                id: 1,
                rent_mortgage: 1200.0,
                utilities: 200.0,
                insurance: 150.0,
                loan_payments: 300.0,
                groceries: 400.0,
                transportation: 150.0,
                subscriptions: 50.0,
                entertainment: 100.0,
                financial_summary_id: 1,
            },
        }];

        Self {
            users,
            buckets,
            transactions,
            summaries,
            next_user_id: 2,
            next_bucket_id: 4,
            next_transaction_id: 4,
            next_summary_id: 2,
        }
    }
}

/// Shared handle handlers clone into themselves.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<Backend>>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Backend::seeded())),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Backend> {
        self.inner.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_user_password() {
        let backend = Backend::seeded();
        assert!(backend.users[0].verify_password("password"));
        assert!(!backend.users[0].verify_password("wrong"));
    }

    #[test]
    fn test_seed_collections() {
        let backend = Backend::seeded();
        assert_eq!(backend.buckets.len(), 3);
        assert_eq!(backend.transactions.len(), 3);
        assert_eq!(backend.summaries.len(), 1);
    }
}
