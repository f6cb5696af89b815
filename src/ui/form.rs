//! Interactive Customer Form
//!
//! Collects the RawInput fields line by line, re-prompting until each value
//! sits inside its declared domain. 'q' (or end of input) ends the session.

use std::io::{self, Write};

use crate::constants::{
    DEFAULT_MONTHLY_CHARGES, DEFAULT_TENURE, MONTHLY_CHARGES_MAX, MONTHLY_CHARGES_MIN,
    TENURE_MAX, TENURE_MIN,
};
use crate::logic::features::encoder::{Contract, Gender, InternetService, RawInput, YesNo};

/// Collect one complete RawInput. Returns None when the user quits.
pub fn collect() -> io::Result<Option<RawInput>> {
    loop {
        let Some(raw) = collect_once()? else {
            return Ok(None);
        };
        match raw.validate() {
            Ok(()) => return Ok(Some(raw)),
            Err(e) => println!("  {}", e),
        }
    }
}

fn collect_once() -> io::Result<Option<RawInput>> {
    println!();
    println!("Customer Details (Enter keeps the default, 'q' quits)");

    let Some(tenure) = prompt_u32("Tenure (months)", TENURE_MIN, TENURE_MAX, DEFAULT_TENURE)?
    else {
        return Ok(None);
    };
    let Some(monthly_charges) = prompt_f64(
        "Monthly Charges ($)",
        MONTHLY_CHARGES_MIN,
        MONTHLY_CHARGES_MAX,
        DEFAULT_MONTHLY_CHARGES,
    )?
    else {
        return Ok(None);
    };
    let Some(gender) = prompt_choice(
        "Gender",
        &[(Gender::Female, "Female"), (Gender::Male, "Male")],
    )?
    else {
        return Ok(None);
    };
    let Some(senior_citizen) = prompt_yes_no("Senior Citizen")? else {
        return Ok(None);
    };
    let Some(partner) = prompt_yes_no("Partner")? else {
        return Ok(None);
    };
    let Some(dependents) = prompt_yes_no("Dependents")? else {
        return Ok(None);
    };
    let Some(contract) = prompt_choice(
        "Contract",
        &[
            (Contract::MonthToMonth, "Month-to-month"),
            (Contract::OneYear, "One year"),
            (Contract::TwoYear, "Two year"),
        ],
    )?
    else {
        return Ok(None);
    };
    let Some(internet_service) = prompt_choice(
        "Internet Service",
        &[
            (InternetService::Dsl, "DSL"),
            (InternetService::FiberOptic, "Fiber optic"),
            (InternetService::No, "No"),
        ],
    )?
    else {
        return Ok(None);
    };
    let Some(paperless_billing) = prompt_yes_no("Paperless Billing")? else {
        return Ok(None);
    };

    Ok(Some(RawInput {
        tenure,
        monthly_charges,
        gender,
        senior_citizen,
        partner,
        dependents,
        contract,
        internet_service,
        paperless_billing,
    }))
}

/// One line of input; None on quit or end of input.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}: ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}

fn prompt_u32(label: &str, min: u32, max: u32, default: u32) -> io::Result<Option<u32>> {
    loop {
        let Some(text) =
            prompt_line(&format!("{} [{}-{}, default {}]", label, min, max, default))?
        else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(Some(default));
        }
        match text.parse::<u32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
            Ok(value) => println!("  {} must be between {} and {} (got {})", label, min, max, value),
            Err(_) => println!("  '{}' is not a whole number", text),
        }
    }
}

fn prompt_f64(label: &str, min: f64, max: f64, default: f64) -> io::Result<Option<f64>> {
    loop {
        let Some(text) = prompt_line(&format!(
            "{} [{:.0}-{:.0}, default {:.0}]",
            label, min, max, default
        ))?
        else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(Some(default));
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= min && value <= max => {
                return Ok(Some(value))
            }
            Ok(value) => println!(
                "  {} must be between {:.0} and {:.0} (got {})",
                label, min, max, value
            ),
            Err(_) => println!("  '{}' is not a number", text),
        }
    }
}

fn prompt_yes_no(label: &str) -> io::Result<Option<YesNo>> {
    prompt_choice(label, &[(YesNo::No, "No"), (YesNo::Yes, "Yes")])
}

fn prompt_choice<T: Copy>(label: &str, options: &[(T, &str)]) -> io::Result<Option<T>> {
    let menu: String = options
        .iter()
        .enumerate()
        .map(|(i, (_, name))| format!("{}) {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("  ");

    loop {
        let Some(text) = prompt_line(&format!("{}: {}  [default 1]", label, menu))? else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(Some(options[0].0));
        }
        match text.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(Some(options[n - 1].0)),
            _ => println!("  Pick a number between 1 and {}", options.len()),
        }
    }
}
