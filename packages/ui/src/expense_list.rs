//! Expense rows under a job.

use api::Expense;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

fn fmt_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Flat list of expenses; the delete button only appears when a handler is
/// supplied (manager view).
#[component]
pub fn ExpenseList(
    expenses: Vec<Expense>,
    #[props(default)] on_delete: Option<EventHandler<i64>>,
) -> Element {
    rsx! {
        ul {
            class: "expenses-list",
            for expense in expenses.iter() {
                li {
                    key: "{expense.expense_id}",
                    class: "expense-item",
                    div { class: "expense-amount", {format!("${:.2}", expense.amount)} }
                    div { class: "expense-text", "{expense.text}" }
                    div { class: "expense-date", {fmt_date(&expense.date)} }
                    {on_delete.map(|on_delete| {
                        let expense_id = expense.expense_id;
                        rsx! {
                            button {
                                class: "delete-expense-btn",
                                title: "Delete this expense",
                                onclick: move |_| on_delete.call(expense_id),
                                "Delete"
                            }
                        }
                    })}
                }
            }
        }
    }
}
