use std::sync::Mutex;

use chrono::{Duration, Utc};

use crate::types::{
    Bucket, BucketDraft, Expenses, FinancialSummary, Income, Transaction, TransactionDraft,
};

/// In-memory state backing demo sessions for the lifetime of the process.
///
/// This is the only mutable state in the demo layer. Instances are owned by
/// the client that serves them, so tests can construct isolated stores.
/// Mutations are last-write-wins; there is no per-session partitioning
/// beyond userId filtering.
pub struct DemoStore {
    inner: Mutex<DemoState>,
}

struct DemoState {
    buckets: Vec<Bucket>,
    transactions: Vec<Transaction>,
    /// Shared across buckets and transactions; every issued id is strictly
    /// greater than all earlier ones from either collection.
    next_id: i64,
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DemoStore {
    /// Store pre-populated with the demo user's records.
    pub fn seeded() -> Self {
        let now = Utc::now();
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

        Self {
            inner: Mutex::new(DemoState {
                buckets,
                transactions,
                next_id: 4,
            }),
        }
    }

    /// Empty store; useful for tests that want full control of contents.
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(DemoState {
                buckets: Vec::new(),
                transactions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn list_buckets(&self, user_id: i64) -> Vec<Bucket> {
        let state = self.inner.lock().unwrap();
        state
            .buckets
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn get_bucket(&self, bucket_id: i64, user_id: i64) -> Option<Bucket> {
        let state = self.inner.lock().unwrap();
        state
            .buckets
            .iter()
            .find(|b| b.id == bucket_id && b.user_id == user_id)
            .cloned()
    }

    pub fn create_bucket(&self, user_id: i64, draft: BucketDraft) -> Bucket {
        let mut state = self.inner.lock().unwrap();
        let id = state.allocate_id();
        let bucket = Bucket {
            id,
            user_id,
            name: draft.name,
            target_amount: draft.target_amount,
            current_saved_amount: draft.current_saved_amount.unwrap_or(0.0),
            priority_score: draft.priority_score.unwrap_or(0.5),
            deadline: draft.deadline.unwrap_or_else(|| Utc::now() + Duration::days(180)),
            status: draft.status.unwrap_or_else(|| "In Progress".to_string()),
        };
        state.buckets.push(bucket.clone());
        bucket
    }

    /// Overwrite a bucket's priority in place; `None` when no record
    /// matches both ids, leaving the store unchanged.
    pub fn update_priority(&self, bucket_id: i64, user_id: i64, priority: f64) -> Option<Bucket> {
        let mut state = self.inner.lock().unwrap();
        let bucket = state
            .buckets
            .iter_mut()
            .find(|b| b.id == bucket_id && b.user_id == user_id)?;
        bucket.priority_score = priority;
        Some(bucket.clone())
    }

    /// Remove the first matching bucket; false when nothing matched, so a
    /// repeated delete is a no-op that reports failure.
    pub fn delete_bucket(&self, bucket_id: i64, user_id: i64) -> bool {
        let mut state = self.inner.lock().unwrap();
        match state
            .buckets
            .iter()
            .position(|b| b.id == bucket_id && b.user_id == user_id)
        {
            Some(index) => {
                state.buckets.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn list_transactions(&self, user_id: i64) -> Vec<Transaction> {
        let state = self.inner.lock().unwrap();
        state
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn create_transaction(&self, user_id: i64, draft: TransactionDraft) -> Transaction {
        let mut state = self.inner.lock().unwrap();
        let id = state.allocate_id();
        let transaction = Transaction {
            id,
            user_id,
            amount: draft.amount,
            description: draft
                .description
                .unwrap_or_else(|| "New Transaction".to_string()),
            category: Some(draft.category.unwrap_or_else(|| "Other".to_string())),
            transaction_date: draft.transaction_date.unwrap_or_else(Utc::now),
            reference: draft.reference,
            notes: draft.notes,
            is_reconciled: draft.is_reconciled.unwrap_or(false),
        };
        state.transactions.push(transaction.clone());
        transaction
    }

    /// Fixed singleton summary for the resolved user.
    pub fn summary_for(&self, user_id: i64) -> FinancialSummary {
        FinancialSummary {
            id: 1,
            savings_balance: 5000.0,
            investment_balance: 15000.0,
            debt_balance: 8000.0,
            user_id,
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
        }
    }
}

impl DemoState {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents() {
        let store = DemoStore::seeded();
        let buckets = store.list_buckets(1);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].name, "Emergency Fund");
        assert_eq!(store.list_transactions(1).len(), 3);
        // No records for other users
        assert!(store.list_buckets(2).is_empty());
    }

    #[test]
    fn test_create_bucket_applies_defaults() {
        let store = DemoStore::seeded();
        let created = store.create_bucket(
            1,
            BucketDraft {
                name: "Vacation".to_string(),
                target_amount: 3000.0,
                ..Default::default()
            },
        );
        assert_eq!(created.current_saved_amount, 0.0);
        assert_eq!(created.priority_score, 0.5);
        assert_eq!(created.status, "In Progress");

        let buckets = store.list_buckets(1);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[3], created);
    }

    #[test]
    fn test_ids_are_shared_and_strictly_increasing() {
        let store = DemoStore::seeded();
        let bucket = store.create_bucket(
            1,
            BucketDraft {
                name: "A".to_string(),
                target_amount: 1.0,
                ..Default::default()
            },
        );
        let txn = store.create_transaction(
            1,
            TransactionDraft {
                amount: 5.0,
                ..Default::default()
            },
        );
        let bucket2 = store.create_bucket(
            1,
            BucketDraft {
                name: "B".to_string(),
                target_amount: 2.0,
                ..Default::default()
            },
        );
        assert_eq!(bucket.id, 4);
        assert_eq!(txn.id, 5);
        assert_eq!(bucket2.id, 6);
    }

    #[test]
    fn test_update_priority_read_back() {
        let store = DemoStore::seeded();
        let updated = store.update_priority(1, 1, 0.8).unwrap();
        assert_eq!(updated.priority_score, 0.8);
        assert_eq!(store.get_bucket(1, 1).unwrap().priority_score, 0.8);
    }

    #[test]
    fn test_update_priority_missing_bucket_leaves_store_unchanged() {
        let store = DemoStore::seeded();
        let before = store.list_buckets(1);
        assert!(store.update_priority(99, 1, 0.8).is_none());
        // Wrong user id must not match either
        assert!(store.update_priority(1, 2, 0.8).is_none());
        assert_eq!(store.list_buckets(1), before);
    }

    #[test]
    fn test_delete_bucket_is_idempotent() {
        let store = DemoStore::seeded();
        assert!(store.delete_bucket(2, 1));
        assert_eq!(store.list_buckets(1).len(), 2);
        assert!(!store.delete_bucket(2, 1));
        assert_eq!(store.list_buckets(1).len(), 2);
    }

    #[test]
    fn test_transaction_defaults() {
        let store = DemoStore::empty();
        let txn = store.create_transaction(
            7,
            TransactionDraft {
                amount: -10.0,
                ..Default::default()
            },
        );
        assert_eq!(txn.category.as_deref(), Some("Other"));
        assert_eq!(txn.description, "New Transaction");
        assert!(!txn.is_reconciled);
        assert_eq!(store.list_transactions(7).len(), 1);
    }

    #[test]
    fn test_summary_echoes_user_id() {
        let store = DemoStore::seeded();
        let summary = store.summary_for(42);
        assert_eq!(summary.user_id, 42);
        assert_eq!(summary.savings_balance, 5000.0);
        assert_eq!(summary.expenses.rent_mortgage, 1200.0);
    }
}
