use crate::core::models::BalanceEntry;
use serde_json::{Value, json};
use tracing::debug;

const BASE_COLORS: [(u8, u8, u8); 5] = [
    (75, 192, 192),  // Teal
    (255, 99, 132),  // Red
    (54, 162, 235),  // Blue
    (255, 206, 86),  // Yellow
    (153, 102, 255), // Purple
];

/// Generates a Chart.js bar chart configuration for final balances.
///
/// # Arguments
/// * `balances` - Net balances in participant order.
///
/// # Returns
/// A JSON value that can be handed to `new Chart(ctx, config)` unchanged.
/// An empty balance list yields a chart with no bars.
pub fn balance_chart_config(balances: &[BalanceEntry]) -> Value {
    let labels: Vec<&str> = balances.iter().map(|b| b.name.as_str()).collect();
    let data: Vec<f64> = balances.iter().map(|b| b.final_balance).collect();

    let mut background_colors = Vec::with_capacity(labels.len());
    let mut border_colors = Vec::with_capacity(labels.len());
    for i in 0..labels.len() {
        let (r, g, b) = BASE_COLORS[i % BASE_COLORS.len()];
        background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
        border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
    }

    debug!("Generated balance chart for {} participants", labels.len());

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Final Balance",
                "data": data,
                "backgroundColor": background_colors,
                "borderColor": border_colors,
                "borderWidth": 1
            }]
        },
        "options": {
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "title": {
                        "display": true,
                        "text": "Amount"
                    }
                },
                "x": {
                    "title": {
                        "display": true,
                        "text": "People"
                    }
                }
            },
            "plugins": {
                "title": {
                    "display": true,
                    "text": "Final Balances"
                }
            }
        }
    })
}
