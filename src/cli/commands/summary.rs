use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::types::FinancialSummary;

#[derive(Subcommand)]
pub enum SummaryCommands {
    #[command(about = "Show the dashboard financial summary")]
    Show,

    #[command(about = "Submit onboarding income and expense figures")]
    Setup(SetupArgs),
}

/// Onboarding figures; anything not given defaults to zero, the way the
/// web onboarding form does.
#[derive(Args)]
pub struct SetupArgs {
    #[arg(long, default_value_t = 0.0)]
    pub savings: f64,
    #[arg(long, default_value_t = 0.0)]
    pub investments: f64,
    #[arg(long, default_value_t = 0.0)]
    pub debt: f64,

    #[arg(long, default_value_t = 0.0)]
    pub salary: f64,
    #[arg(long, default_value_t = 0.0)]
    pub investment_income: f64,
    #[arg(long, default_value_t = 0.0)]
    pub business_income: f64,

    #[arg(long, default_value_t = 0.0)]
    pub rent: f64,
    #[arg(long, default_value_t = 0.0)]
    pub utilities: f64,
    #[arg(long, default_value_t = 0.0)]
    pub insurance: f64,
    #[arg(long, default_value_t = 0.0)]
    pub loans: f64,
    #[arg(long, default_value_t = 0.0)]
    pub groceries: f64,
    #[arg(long, default_value_t = 0.0)]
    pub transport: f64,
    #[arg(long, default_value_t = 0.0)]
    pub subscriptions: f64,
    #[arg(long, default_value_t = 0.0)]
    pub entertainment: f64,
}

pub async fn handle(cmd: SummaryCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;
    let user = utils::current_user(&client)?;

    match cmd {
        SummaryCommands::Show => {
            let summary = client.financial_summary(user.id).await?;
            utils::output_data(&output_format, &summary, render_summary)
        }
        SummaryCommands::Setup(args) => {
            // Ids are assigned server-side
            let body = json!({
                "id": 0,
                "savingsBalance": args.savings,
                "investmentBalance": args.investments,
                "debtBalance": args.debt,
                "userId": user.id,
                "income": {
                    "id": 0,
                    "salary": args.salary,
                    "investments": args.investment_income,
                    "businessIncome": args.business_income,
                    "financialSummaryId": 0,
                },
                "expenses": {
                    "id": 0,
                    "rentMortgage": args.rent,
                    "utilities": args.utilities,
                    "insurance": args.insurance,
                    "loanPayments": args.loans,
                    "groceries": args.groceries,
                    "transportation": args.transport,
                    "subscriptions": args.subscriptions,
                    "entertainment": args.entertainment,
                },
            });
            client.submit_summary(user.id, body).await?;
            utils::output_success(&output_format, "Financial summary saved", None)
        }
    }
}

fn render_summary(summary: &FinancialSummary) {
    let total_income =
        summary.income.salary + summary.income.investments + summary.income.business_income;
    let e = &summary.expenses;
    let total_expenses = e.rent_mortgage
        + e.utilities
        + e.insurance
        + e.loan_payments
        + e.groceries
        + e.transportation
        + e.subscriptions
        + e.entertainment;

    println!("Savings:     {:>12.2}", summary.savings_balance);
    println!("Investments: {:>12.2}", summary.investment_balance);
    println!("Debt:        {:>12.2}", summary.debt_balance);
    println!("Income:      {:>12.2} / month", total_income);
    println!("Expenses:    {:>12.2} / month", total_expenses);
}
