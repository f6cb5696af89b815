//! Terminal Rendering
//!
//! Colored output for the model summary, prediction results, the analysis
//! view and error reports.

use std::io::{self, stdout, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::AppError;
use crate::logic::features::{FeatureSchema, FeatureVector};
use crate::logic::model::ChurnModel;
use crate::logic::risk::recommend;
use crate::logic::risk::types::{FeatureImpact, PredictionResult, RiskTier};

const BAR_WIDTH: usize = 24;
const TOP_INFLUENCES: usize = 5;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    fn colored_line(&self, color: Color, text: &str) -> io::Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    pub fn banner(&self, model: &ChurnModel) -> io::Result<()> {
        println!("📉 {} v{}", APP_NAME, APP_VERSION);
        self.colored_line(
            Color::Green,
            &format!(
                "✅ Model loaded (expecting {} features)",
                model.feature_count()
            ),
        )?;
        if !model.metadata().checksum_verified {
            println!("   (no checksum sidecar found, integrity not verified)");
        }
        println!();
        println!("How to use: fill in the customer details, then review the");
        println!("probability and risk tier. Test scenarios:");
        println!("  High Risk: 1 month tenure, $200, Month-to-month");
        println!("  Low Risk:  24 months, $50, Two year contract");
        Ok(())
    }

    pub fn model_summary(&self, model: &ChurnModel) -> io::Result<()> {
        println!();
        println!("Top {} Most Influential Features:", TOP_INFLUENCES);
        for (name, coefficient) in model.top_influences(TOP_INFLUENCES) {
            println!("  {:<28} {:>9.4}", name, coefficient);
        }
        Ok(())
    }

    pub fn prediction(&self, result: &PredictionResult) -> io::Result<()> {
        let color = tier_color(result.tier);
        println!();
        println!("Churn Probability: {:.1}%", result.probability * 100.0);

        let filled = ((result.probability * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        self.colored_line(color, &bar)?;

        self.colored_line(color, recommend::headline(result.tier))?;
        println!("{}", recommend::actions_label(result.tier));
        for action in recommend::recommendations(result.tier) {
            println!("  - {}", action);
        }
        Ok(())
    }

    /// Prediction Analysis: the prepared vector and the strongest impacts.
    pub fn analysis(
        &self,
        vector: &FeatureVector,
        schema: &FeatureSchema,
        impacts: &[FeatureImpact],
    ) -> io::Result<()> {
        println!();
        println!("Prepared Features");
        for (name, value) in schema.names().iter().zip(vector.values()) {
            println!("  {:<28} {:>9.4}", name, value);
        }

        println!();
        println!("Feature Impacts (value × coefficient)");
        for impact in impacts {
            println!(
                "  {:<28} {:>9.4} × {:>8.4} = {:>9.4}",
                impact.name, impact.value, impact.coefficient, impact.impact
            );
        }
        Ok(())
    }

    pub fn error_report(&self, err: &AppError) -> io::Result<()> {
        self.colored_line(Color::Red, &format!("❌ {}", err))?;
        let steps = err.remediation();
        if !steps.is_empty() {
            println!("Troubleshooting steps:");
            for (i, step) in steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
        }
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::Low => Color::Green,
        RiskTier::Medium => Color::Yellow,
        RiskTier::High => Color::Red,
    }
}
