//! Canned financial advice.
//!
//! No model behind this: chat answers are keyword-matched strings and the
//! recommendation list is static, matching what the real backend returns.

use crate::types::{Rating, Recommendation};

/// Keyword table checked in order; first hit wins.
const RESPONSES: &[(&[&str], &str)] = &[
    (&["save", "saving"], "Based on your current spending patterns, you could save an additional $250 per month by reducing your subscription services and dining out expenses. Would you like me to suggest a savings plan?"),
    (&["invest", "investment"], "With your current risk profile and financial goals, I would recommend allocating 60% to index funds, 30% to bonds, and 10% to individual stocks. Would you like more specific investment recommendations?"),
    (&["debt", "loan"], "I recommend prioritizing paying off your high-interest debt first. Based on your current income and expenses, you could be debt-free in approximately 18 months by allocating an additional $300 per month to debt repayment."),
    (&["budget", "spending"], "Your top spending categories last month were housing (35%), food (20%), and transportation (15%). Your food spending is 25% higher than the recommended amount for your income level. Would you like suggestions to reduce this expense?"),
    (&["emergency"], "Financial experts recommend having 3-6 months of expenses saved in an emergency fund. Based on your monthly expenses of $2,400, you should aim for $7,200-$14,400 in your emergency fund."),
    (&["retire", "retirement"], "Based on your current savings rate and retirement goals, you're on track to reach your target retirement savings by age 67. Increasing your monthly contributions by just $100 could help you retire 2 years earlier."),
    (&["credit", "score"], "Your simulated credit score is in the 'good' range. To improve it, focus on making all payments on time, reducing your credit utilization ratio to below 30%, and avoiding opening too many new accounts."),
    (&["tax"], "Based on your income and deductions, you might be able to save approximately $1,200 in taxes by maximizing your retirement contributions and taking advantage of available tax credits."),
    (&["insurance"], "Your current insurance coverage appears adequate, but you might consider increasing your liability coverage and adding an umbrella policy for better protection of your growing assets."),
    (&["mortgage", "refinance"], "With current interest rates, refinancing your mortgage could save you approximately $150 per month. However, you should consider the closing costs and how long you plan to stay in your home."),
    (&["car", "vehicle"], "Based on your financial situation, you could comfortably afford a car payment of up to $350 per month. Remember to factor in insurance, maintenance, and fuel costs when budgeting for a vehicle purchase."),
    (&["college", "education"], "For your children's education fund, consider a 529 plan which offers tax advantages. Starting with $200 monthly contributions now could grow to approximately $58,000 in 18 years, assuming a 6% annual return."),
    (&["wedding", "marry"], "For a wedding budget, the average cost is around $28,000, but you can have a wonderful celebration for much less by prioritizing what matters most to you and being creative with venue and catering options."),
    (&["vacation", "travel"], "Based on your savings rate, you could save enough for a $3,000 vacation in about 6 months by setting aside $500 monthly in your 'Vacation' savings bucket."),
    (&["house", "home"], "To save for a house down payment, aim for at least 20% of the home's value to avoid private mortgage insurance. For a $300,000 home, that's $60,000. At your current savings rate, this would take approximately 4 years."),
    (&["help", "what can you do"], "I can help with various financial topics including budgeting, saving, investing, debt management, retirement planning, and more. Just ask me a specific question about your finances!"),
];

/// Answer a free-form question with the first keyword match, or a default
/// nudge toward emergency savings when nothing matches.
pub fn advice_for(question: &str) -> String {
    let lower = question.to_lowercase();

    for (keywords, response) in RESPONSES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return (*response).to_string();
        }
    }

    format!(
        "Based on your financial profile, I'd recommend focusing on building your emergency fund first, \
         then paying down high-interest debt. Your question about \"{}\" is important, and I'd be happy \
         to provide more specific advice if you could provide more details.",
        question
    )
}

/// The static recommendation list every user receives.
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: 1,
            category: "Savings".to_string(),
            title: "Increase Emergency Fund".to_string(),
            description: "Your emergency fund is below the recommended 3-month expense coverage. Consider allocating more to your Emergency Fund bucket.".to_string(),
            potential_impact: Rating::High,
            difficulty: Rating::Medium,
        },
        Recommendation {
            id: 2,
            category: "Expenses".to_string(),
            title: "Reduce Subscription Services".to_string(),
            description: "You're spending $85 monthly on subscription services. Consider reviewing and canceling unused subscriptions.".to_string(),
            potential_impact: Rating::Medium,
            difficulty: Rating::Low,
        },
        Recommendation {
            id: 3,
            category: "Debt".to_string(),
            title: "Refinance Loans".to_string(),
            description: "Current interest rates are lower than your existing loans. Refinancing could save you $150 monthly.".to_string(),
            potential_impact: Rating::High,
            difficulty: Rating::Medium,
        },
        Recommendation {
            id: 4,
            category: "Income".to_string(),
            title: "Explore Side Income".to_string(),
            description: "Based on your skills, you could earn an additional $500-$1000 monthly through freelance work.".to_string(),
            potential_impact: Rating::High,
            difficulty: Rating::High,
        },
    ]
}
