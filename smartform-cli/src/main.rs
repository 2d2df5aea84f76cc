//! Interactive registration form on stdin/stdout.
//!
//! Prompts for each field in form order, validates as values are entered
//! (re-prompting until a field passes), shows the password-strength meter,
//! and runs the simulated submission with its artificial delays.

use std::fs::File;
use std::io::{self, BufRead, Write};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use smartform_lib::prelude::*;
use smartform_lib::utils;

/// Width of the strength meter, one cell per possible point.
const METER_WIDTH: usize = 6;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn meter(score: u8) -> String {
    let filled = usize::from(score).min(METER_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
}

/// Map a raw prompt line to the value stored for a field.
///
/// Phone input is filtered to digits before storage; the terms checkbox
/// accepts y/yes (any case) as checked.
fn field_value(field: Field, raw: String) -> FieldValue {
    match field {
        Field::Phone => FieldValue::Text(utils::digits_only(&raw)),
        Field::Terms => {
            let checked = matches!(raw.trim().to_lowercase().as_str(), "y" | "yes");
            FieldValue::Checked(checked)
        }
        _ => FieldValue::Text(raw),
    }
}

/// Prompt for one field until its rule passes, rendering inline feedback for
/// every evaluation the edit triggered.
fn read_field(form: &mut RegistrationForm, field: Field) -> io::Result<()> {
    if field == Field::Password {
        println!(
            "  (need one? try: {})",
            utils::generate_password(utils::DEFAULT_PASSWORD_LEN)
        );
    }
    if field == Field::Terms {
        println!("  Do you agree to the terms and conditions? [y/n]");
    }

    loop {
        let raw = prompt(field.label())?;
        let evaluated = form.touch(field, field_value(field, raw));

        if field == Field::Password {
            let strength = password_strength(&form.values().password);
            println!("  [{}] {}", meter(strength.score), strength.label.caption());
            if utils::is_password_compromised(&form.values().password) {
                println!("  ! This password shows up in breach lists.");
            }
        }

        for (evaluated_field, result) in &evaluated {
            match result {
                ValidationResult::Valid => {
                    if evaluated_field == &field {
                        println!("  ✓ looks good");
                    }
                }
                ValidationResult::Invalid(reason) => {
                    if evaluated_field == &field {
                        println!("  ✗ {}", reason);
                    } else {
                        println!("  ✗ {}: {}", evaluated_field.label(), reason);
                    }
                }
            }
        }

        if form.state().is_valid(field) {
            return Ok(());
        }
    }
}

async fn run() -> io::Result<()> {
    println!("Smart registration form");
    println!("Fill in each field; invalid entries re-prompt.\n");

    let mut form = RegistrationForm::new();
    let submitter = Submitter::new();

    for field in Field::ALL {
        read_field(&mut form, field)?;
    }

    println!("\nSubmitting...");
    match submitter.submit(&mut form).await {
        Ok(receipt) => {
            println!("✓ Registration successful! Welcome, {}.", receipt.full_name);
            println!("  Phone on file: {}", utils::format_phone(&receipt.phone));

            tokio::time::sleep(submitter.reset_dwell()).await;
            form.reset();
            println!("Form reset.");
        }
        Err(SubmitError::Invalid(report)) => {
            if let Some(error) = report.first_invalid() {
                println!("✗ Fix {} first: {}", error.field.label(), error.reason);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("smartform.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
